//! PostgreSQL market repository
//!
//! The market aggregate spans four tables (markets, addresses, buildings,
//! stalls). Creation, update and deletion each run inside one transaction
//! so a partial failure never leaves an orphaned row.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use kasuwa_core::domain::Market;
use kasuwa_core::error::{DomainError, EntityKind};
use kasuwa_core::repositories::MarketRepository;

use super::rows::{BuildingRow, MarketRow, StallRow, BUILDING_SELECT, MARKET_SELECT, STALL_SELECT};

pub struct PgMarketRepository {
    pool: PgPool,
}

impl PgMarketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_children(&self, market: &mut Market) -> Result<(), DomainError> {
        let sql = format!("{BUILDING_SELECT} WHERE market_id = $1");
        let buildings: Vec<BuildingRow> = sqlx::query_as(&sql)
            .bind(market.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error loading buildings for market: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        market.buildings = buildings.into_iter().map(Into::into).collect();

        let sql = format!("{STALL_SELECT} WHERE s.market_id = $1");
        let stalls: Vec<StallRow> = sqlx::query_as(&sql)
            .bind(market.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error loading stalls for market: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        market.stalls = stalls.into_iter().map(Into::into).collect();

        Ok(())
    }
}

#[async_trait]
impl MarketRepository for PgMarketRepository {
    async fn find_all(&self) -> Result<Vec<Market>, DomainError> {
        let rows: Vec<MarketRow> = sqlx::query_as(MARKET_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing markets: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let mut markets: Vec<Market> = rows.into_iter().map(Into::into).collect();
        for market in &mut markets {
            self.load_children(market).await?;
        }
        Ok(markets)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Market>, DomainError> {
        let sql = format!("{MARKET_SELECT} WHERE m.id = $1");
        let row: Option<MarketRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding market by id: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        match row {
            Some(row) => {
                let mut market: Market = row.into();
                self.load_children(&mut market).await?;
                Ok(Some(market))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, market: &Market) -> Result<Market, DomainError> {
        info!("Creating market: {}", market.name);

        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error opening transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO addresses (id, street_address, town, lga, state)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(market.address.id)
        .bind(&market.address.street_address)
        .bind(&market.address.town)
        .bind(&market.address.lga)
        .bind(&market.address.state)
        .execute(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating address: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO markets (id, name, address_id, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(market.id)
        .bind(&market.name)
        .bind(market.address.id)
        .bind(market.created_at)
        .bind(market.modified_at)
        .execute(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating market: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        for building in &market.buildings {
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
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error creating nested building: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        for stall in &market.stalls {
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
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error creating nested stall: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing market creation: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Market created successfully: {}", market.id);
        Ok(market.clone())
    }

    async fn update(&self, market: &Market) -> Result<Market, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error opening transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query(
            r#"
            UPDATE addresses
            SET street_address = $2, town = $3, lga = $4, state = $5
            WHERE id = $1
            "#,
        )
        .bind(market.address.id)
        .bind(&market.address.street_address)
        .bind(&market.address.town)
        .bind(&market.address.lga)
        .bind(&market.address.state)
        .execute(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating address: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query("UPDATE markets SET name = $2, modified_at = $3 WHERE id = $1")
            .bind(market.id)
            .bind(&market.name)
            .bind(market.modified_at)
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error updating market: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing market update: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        self.find_by_id(&market.id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Market,
                id: market.id,
            })
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error opening transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let address_id: Option<Uuid> =
            sqlx::query_scalar("SELECT address_id FROM markets WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error resolving market address: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;

        // Children first: rent payments, shops, buildings, stalls.
        let statements = [
            r#"
            DELETE FROM rent_payments
            WHERE shop_id IN (
                SELECT s.id FROM shops s
                JOIN buildings b ON b.id = s.building_id
                WHERE b.market_id = $1
            )
            "#,
            "DELETE FROM shops WHERE building_id IN (SELECT id FROM buildings WHERE market_id = $1)",
            "DELETE FROM buildings WHERE market_id = $1",
            "DELETE FROM stalls WHERE market_id = $1",
            "DELETE FROM markets WHERE id = $1",
        ];

        for statement in statements {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error cascading market deletion: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;
        }

        if let Some(address_id) = address_id {
            sqlx::query("DELETE FROM addresses WHERE id = $1")
                .bind(address_id)
                .execute(&mut *tx)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error deleting market address: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;
        }

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing market deletion: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Market deleted: {}", id);
        Ok(())
    }
}
