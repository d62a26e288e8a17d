//! Shop repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Shop;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Fetches a shop with its tenant, when assigned.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Shop>, DomainError>;

    async fn find_all_for_building(&self, building_id: &Uuid) -> Result<Vec<Shop>, DomainError>;

    async fn find_all_for_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Shop>, DomainError>;

    async fn create(&self, shop: &Shop) -> Result<Shop, DomainError>;

    /// Rewrites the shop row. Implementations serialize concurrent
    /// updates per shop so the last writer is authoritative.
    async fn update(&self, shop: &Shop) -> Result<Shop, DomainError>;

    /// Removes the shop and its rent payments in one transaction.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
