//! PostgreSQL shop repository
//!
//! Updates take a row lock before rewriting the shop, so concurrent
//! occupancy changes against the same unit serialize and the last
//! writer is authoritative.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use kasuwa_core::domain::Shop;
use kasuwa_core::error::DomainError;
use kasuwa_core::repositories::ShopRepository;

use super::rows::{ShopRow, SHOP_SELECT};

pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, clause: &str, id: &Uuid) -> Result<Vec<Shop>, DomainError> {
        let sql = format!("{SHOP_SELECT} WHERE {clause}");
        let rows: Vec<ShopRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing shops: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ShopRepository for PgShopRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Shop>, DomainError> {
        let sql = format!("{SHOP_SELECT} WHERE s.id = $1");
        let row: Option<ShopRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding shop by id: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Into::into))
    }

    async fn find_all_for_building(&self, building_id: &Uuid) -> Result<Vec<Shop>, DomainError> {
        self.fetch_where("s.building_id = $1", building_id).await
    }

    async fn find_all_for_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Shop>, DomainError> {
        self.fetch_where("s.tenant_id = $1", tenant_id).await
    }

    async fn create(&self, shop: &Shop) -> Result<Shop, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO shops (id, building_id, tenant_id, name, annual_rent_rate, size,
                               status, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(shop.id)
        .bind(shop.building_id)
        .bind(shop.tenant.as_ref().map(|t| t.id))
        .bind(&shop.name)
        .bind(shop.annual_rent_rate)
        .bind(shop.size)
        .bind(shop.status.as_str())
        .bind(shop.created_at)
        .bind(shop.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating shop: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Shop created: {}", shop.id);
        Ok(shop.clone())
    }

    async fn update(&self, shop: &Shop) -> Result<Shop, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error opening transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        // Serialize writers per shop row.
        sqlx::query("SELECT id FROM shops WHERE id = $1 FOR UPDATE")
            .bind(shop.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error locking shop row: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        sqlx::query(
            r#"
            UPDATE shops
            SET name = $2, annual_rent_rate = $3, size = $4, tenant_id = $5,
                status = $6, modified_at = $7
            WHERE id = $1
            "#,
        )
        .bind(shop.id)
        .bind(&shop.name)
        .bind(shop.annual_rent_rate)
        .bind(shop.size)
        .bind(shop.tenant.as_ref().map(|t| t.id))
        .bind(shop.status.as_str())
        .bind(shop.modified_at)
        .execute(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating shop: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing shop update: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(shop.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error opening transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query("DELETE FROM rent_payments WHERE shop_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting shop payments: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        sqlx::query("DELETE FROM shops WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting shop: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing shop deletion: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Shop deleted: {}", id);
        Ok(())
    }
}
