//! Market repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Market;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketRepository: Send + Sync {
    /// Fetches every market with its address, buildings and stalls.
    async fn find_all(&self) -> Result<Vec<Market>, DomainError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Market>, DomainError>;

    /// Persists the whole aggregate (address, market, nested buildings
    /// and stalls) atomically. Partial failure persists nothing.
    async fn create(&self, market: &Market) -> Result<Market, DomainError>;

    /// Rewrites the market row and its owned address in one transaction.
    /// Nested buildings and stalls are not touched here.
    async fn update(&self, market: &Market) -> Result<Market, DomainError>;

    /// Removes the market and everything reachable from it, children
    /// first: rent payments, shops, buildings, stalls, then the market
    /// and its address.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
