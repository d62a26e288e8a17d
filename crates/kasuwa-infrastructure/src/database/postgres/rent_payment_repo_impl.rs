//! PostgreSQL rent payment repository
//!
//! The ledger is append-only apart from amount/year corrections; the
//! shop and tenant columns are never rewritten after insertion.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use kasuwa_core::domain::RentPayment;
use kasuwa_core::error::DomainError;
use kasuwa_core::repositories::RentPaymentRepository;

use super::rows::{RentPaymentRow, RENT_PAYMENT_SELECT};

pub struct PgRentPaymentRepository {
    pool: PgPool,
}

impl PgRentPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentPaymentRepository for PgRentPaymentRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RentPayment>, DomainError> {
        let sql = format!("{RENT_PAYMENT_SELECT} WHERE id = $1");
        let row: Option<RentPaymentRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding rent payment by id: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Into::into))
    }

    async fn find_all_for_shop(&self, shop_id: &Uuid) -> Result<Vec<RentPayment>, DomainError> {
        let sql = format!("{RENT_PAYMENT_SELECT} WHERE shop_id = $1 ORDER BY year");
        let rows: Vec<RentPaymentRow> = sqlx::query_as(&sql)
            .bind(shop_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing rent payments: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, payment: &RentPayment) -> Result<RentPayment, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO rent_payments (id, shop_id, tenant_id, amount, year,
                                       created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(payment.id)
        .bind(payment.shop_id)
        .bind(payment.tenant_id)
        .bind(payment.amount)
        .bind(payment.year)
        .bind(payment.created_at)
        .bind(payment.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating rent payment: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Rent payment created: {}", payment.id);
        Ok(payment.clone())
    }

    async fn update(&self, payment: &RentPayment) -> Result<RentPayment, DomainError> {
        sqlx::query(
            "UPDATE rent_payments SET amount = $2, year = $3, modified_at = $4 WHERE id = $1",
        )
        .bind(payment.id)
        .bind(payment.amount)
        .bind(payment.year)
        .bind(payment.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating rent payment: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(payment.clone())
    }
}
