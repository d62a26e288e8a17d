//! Stall repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Stall;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StallRepository: Send + Sync {
    /// Fetches a stall with its tenant, when assigned.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Stall>, DomainError>;

    async fn find_all_for_market(&self, market_id: &Uuid) -> Result<Vec<Stall>, DomainError>;

    async fn find_all_for_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Stall>, DomainError>;

    async fn create(&self, stall: &Stall) -> Result<Stall, DomainError>;

    /// Rewrites the stall row. Implementations serialize concurrent
    /// updates per stall so the last writer is authoritative.
    async fn update(&self, stall: &Stall) -> Result<Stall, DomainError>;

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
