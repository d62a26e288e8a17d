//! Reference resolution
//!
//! Every create/update payload that names another entity goes through
//! this resolver before anything is written, so all call sites share
//! one error shape that identifies which reference failed.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Building, Market, Shop, Stall, Tenant};
use crate::error::{DomainError, EntityKind};
use crate::repositories::{
    BuildingRepository, MarketRepository, ShopRepository, StallRepository, TenantRepository,
};

#[derive(Clone)]
pub struct ReferenceResolver {
    markets: Arc<dyn MarketRepository>,
    buildings: Arc<dyn BuildingRepository>,
    shops: Arc<dyn ShopRepository>,
    stalls: Arc<dyn StallRepository>,
    tenants: Arc<dyn TenantRepository>,
}

impl ReferenceResolver {
    pub fn new(
        markets: Arc<dyn MarketRepository>,
        buildings: Arc<dyn BuildingRepository>,
        shops: Arc<dyn ShopRepository>,
        stalls: Arc<dyn StallRepository>,
        tenants: Arc<dyn TenantRepository>,
    ) -> Self {
        Self {
            markets,
            buildings,
            shops,
            stalls,
            tenants,
        }
    }

    pub async fn market(&self, id: &Uuid) -> Result<Market, DomainError> {
        self.markets
            .find_by_id(id)
            .await?
            .ok_or(DomainError::InvalidReference {
                kind: EntityKind::Market,
                id: *id,
            })
    }

    pub async fn building(&self, id: &Uuid) -> Result<Building, DomainError> {
        self.buildings
            .find_by_id(id)
            .await?
            .ok_or(DomainError::InvalidReference {
                kind: EntityKind::Building,
                id: *id,
            })
    }

    pub async fn shop(&self, id: &Uuid) -> Result<Shop, DomainError> {
        self.shops
            .find_by_id(id)
            .await?
            .ok_or(DomainError::InvalidReference {
                kind: EntityKind::Shop,
                id: *id,
            })
    }

    pub async fn stall(&self, id: &Uuid) -> Result<Stall, DomainError> {
        self.stalls
            .find_by_id(id)
            .await?
            .ok_or(DomainError::InvalidReference {
                kind: EntityKind::Stall,
                id: *id,
            })
    }

    pub async fn tenant(&self, id: &Uuid) -> Result<Tenant, DomainError> {
        self.tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::InvalidReference {
                kind: EntityKind::Tenant,
                id: *id,
            })
    }
}
