//! Building repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Building;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// Fetches a building with its shops.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Building>, DomainError>;

    async fn find_all_for_market(&self, market_id: &Uuid) -> Result<Vec<Building>, DomainError>;

    async fn create(&self, building: &Building) -> Result<Building, DomainError>;

    async fn update(&self, building: &Building) -> Result<Building, DomainError>;

    /// Removes the building, its shops, and those shops' rent payments
    /// in one transaction.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
