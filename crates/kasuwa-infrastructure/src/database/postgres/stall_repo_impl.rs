//! PostgreSQL stall repository
//!
//! Same row-locking discipline as the shop repository: concurrent
//! occupancy changes against one stall serialize on its row.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use kasuwa_core::domain::Stall;
use kasuwa_core::error::DomainError;
use kasuwa_core::repositories::StallRepository;

use super::rows::{StallRow, STALL_SELECT};

pub struct PgStallRepository {
    pool: PgPool,
}

impl PgStallRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, clause: &str, id: &Uuid) -> Result<Vec<Stall>, DomainError> {
        let sql = format!("{STALL_SELECT} WHERE {clause}");
        let rows: Vec<StallRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing stalls: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl StallRepository for PgStallRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Stall>, DomainError> {
        let sql = format!("{STALL_SELECT} WHERE s.id = $1");
        let row: Option<StallRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding stall by id: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Into::into))
    }

    async fn find_all_for_market(&self, market_id: &Uuid) -> Result<Vec<Stall>, DomainError> {
        self.fetch_where("s.market_id = $1", market_id).await
    }

    async fn find_all_for_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Stall>, DomainError> {
        self.fetch_where("s.tenant_id = $1", tenant_id).await
    }

    async fn create(&self, stall: &Stall) -> Result<Stall, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO stalls (id, market_id, tenant_id, name, annual_rent_rate, status,
                                created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(stall.id)
        .bind(stall.market_id)
        .bind(stall.tenant.as_ref().map(|t| t.id))
        .bind(&stall.name)
        .bind(stall.annual_rent_rate)
        .bind(stall.status.as_str())
        .bind(stall.created_at)
        .bind(stall.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating stall: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Stall created: {}", stall.id);
        Ok(stall.clone())
    }

    async fn update(&self, stall: &Stall) -> Result<Stall, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error opening transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        // Serialize writers per stall row.
        sqlx::query("SELECT id FROM stalls WHERE id = $1 FOR UPDATE")
            .bind(stall.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error locking stall row: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        sqlx::query(
            r#"
            UPDATE stalls
            SET name = $2, annual_rent_rate = $3, tenant_id = $4, status = $5, modified_at = $6
            WHERE id = $1
            "#,
        )
        .bind(stall.id)
        .bind(&stall.name)
        .bind(stall.annual_rent_rate)
        .bind(stall.tenant.as_ref().map(|t| t.id))
        .bind(stall.status.as_str())
        .bind(stall.modified_at)
        .execute(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating stall: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing stall update: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(stall.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM stalls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting stall: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        info!("Stall deleted: {}", id);
        Ok(())
    }
}
