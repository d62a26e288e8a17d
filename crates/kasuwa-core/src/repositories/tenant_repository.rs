//! Tenant repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Tenant;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError>;

    async fn find_by_contact_number(&self, contact_number: &str)
        -> Result<Option<Tenant>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Tenant>, DomainError>;

    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError>;

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError>;

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
