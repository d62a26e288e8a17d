//! PostgreSQL building repository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use kasuwa_core::domain::Building;
use kasuwa_core::error::DomainError;
use kasuwa_core::repositories::BuildingRepository;

use super::rows::{BuildingRow, ShopRow, BUILDING_SELECT, SHOP_SELECT};

pub struct PgBuildingRepository {
    pool: PgPool,
}

impl PgBuildingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BuildingRepository for PgBuildingRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Building>, DomainError> {
        let sql = format!("{BUILDING_SELECT} WHERE id = $1");
        let row: Option<BuildingRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding building by id: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut building: Building = row.into();

        let sql = format!("{SHOP_SELECT} WHERE s.building_id = $1");
        let shops: Vec<ShopRow> = sqlx::query_as(&sql)
            .bind(building.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error loading shops for building: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        building.shops = shops.into_iter().map(Into::into).collect();

        Ok(Some(building))
    }

    async fn find_all_for_market(&self, market_id: &Uuid) -> Result<Vec<Building>, DomainError> {
        let sql = format!("{BUILDING_SELECT} WHERE market_id = $1");
        let rows: Vec<BuildingRow> = sqlx::query_as(&sql)
            .bind(market_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing buildings: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let mut buildings: Vec<Building> = rows.into_iter().map(Into::into).collect();

        let sql = format!(
            "{SHOP_SELECT} WHERE s.building_id IN (SELECT id FROM buildings WHERE market_id = $1)"
        );
        let shops: Vec<ShopRow> = sqlx::query_as(&sql)
            .bind(market_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error loading shops for market buildings: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        for shop in shops {
            let building_id = shop.building_id;
            if let Some(building) = buildings.iter_mut().find(|b| b.id == building_id) {
                building.shops.push(shop.into());
            }
        }

        Ok(buildings)
    }

    async fn create(&self, building: &Building) -> Result<Building, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO buildings (id, market_id, name, description, summary, status,
                                   created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(building.id)
        .bind(building.market_id)
        .bind(&building.name)
        .bind(&building.description)
        .bind(&building.summary)
        .bind(&building.status)
        .bind(building.created_at)
        .bind(building.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating building: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Building created: {}", building.id);
        Ok(building.clone())
    }

    async fn update(&self, building: &Building) -> Result<Building, DomainError> {
        sqlx::query(
            r#"
            UPDATE buildings
            SET name = $2, description = $3, summary = $4, status = $5, modified_at = $6
            WHERE id = $1
            "#,
        )
        .bind(building.id)
        .bind(&building.name)
        .bind(&building.description)
        .bind(&building.summary)
        .bind(&building.status)
        .bind(building.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating building: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(building.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error opening transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let statements = [
            r#"
            DELETE FROM rent_payments
            WHERE shop_id IN (SELECT id FROM shops WHERE building_id = $1)
            "#,
            "DELETE FROM shops WHERE building_id = $1",
            "DELETE FROM buildings WHERE id = $1",
        ];

        for statement in statements {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error cascading building deletion: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;
        }

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing building deletion: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Building deleted: {}", id);
        Ok(())
    }
}
