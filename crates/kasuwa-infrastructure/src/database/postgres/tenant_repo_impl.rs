//! PostgreSQL tenant repository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use kasuwa_core::domain::Tenant;
use kasuwa_core::error::DomainError;
use kasuwa_core::repositories::TenantRepository;

use super::rows::{TenantRow, TENANT_SELECT};

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_unique_violation(e: sqlx::Error, contact_number: &str) -> DomainError {
    let msg = e.to_string();
    if msg.contains("unique") || msg.contains("duplicate") {
        DomainError::ContactNumberAlreadyExists(contact_number.to_string())
    } else {
        DomainError::DatabaseError(msg)
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let sql = format!("{TENANT_SELECT} WHERE id = $1");
        let row: Option<TenantRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding tenant by id: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Into::into))
    }

    async fn find_by_contact_number(
        &self,
        contact_number: &str,
    ) -> Result<Option<Tenant>, DomainError> {
        let sql = format!("{TENANT_SELECT} WHERE contact_number = $1");
        let row: Option<TenantRow> = sqlx::query_as(&sql)
            .bind(contact_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding tenant by contact number: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Tenant>, DomainError> {
        let rows: Vec<TenantRow> = sqlx::query_as(TENANT_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing tenants: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tenants (id, first_name, middle_name, last_name, email,
                                 contact_number, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(tenant.id)
        .bind(&tenant.first_name)
        .bind(&tenant.middle_name)
        .bind(&tenant.last_name)
        .bind(&tenant.email)
        .bind(&tenant.contact_number)
        .bind(tenant.created_at)
        .bind(tenant.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating tenant: {}", e);
            map_unique_violation(e, &tenant.contact_number)
        })?;

        info!("Tenant created: {}", tenant.id);
        Ok(tenant.clone())
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        sqlx::query(
            r#"
            UPDATE tenants
            SET first_name = $2, middle_name = $3, last_name = $4, email = $5,
                contact_number = $6, modified_at = $7
            WHERE id = $1
            "#,
        )
        .bind(tenant.id)
        .bind(&tenant.first_name)
        .bind(&tenant.middle_name)
        .bind(&tenant.last_name)
        .bind(&tenant.email)
        .bind(&tenant.contact_number)
        .bind(tenant.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating tenant: {}", e);
            map_unique_violation(e, &tenant.contact_number)
        })?;

        Ok(tenant.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting tenant: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        info!("Tenant deleted: {}", id);
        Ok(())
    }
}
