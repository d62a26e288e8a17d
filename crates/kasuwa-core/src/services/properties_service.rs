//! Properties service
//!
//! Owns the market hierarchy: markets with their addresses, buildings,
//! shops and stalls. All reference checks happen before the first write
//! of an operation; the repositories make each multi-row write atomic.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use validator::Validate;

use crate::domain::{
    Address, Building, BuildingPatch, Market, MarketPatch, NewBuilding, NewMarket, NewShop,
    NewStall, RentableUnit, Shop, ShopPatch, Stall, StallPatch,
};
use crate::error::{DomainError, EntityKind};
use crate::repositories::{
    BuildingRepository, MarketRepository, ShopRepository, StallRepository,
};
use crate::services::ReferenceResolver;

pub struct PropertiesService {
    markets: Arc<dyn MarketRepository>,
    buildings: Arc<dyn BuildingRepository>,
    shops: Arc<dyn ShopRepository>,
    stalls: Arc<dyn StallRepository>,
    resolver: ReferenceResolver,
}

impl PropertiesService {
    pub fn new(
        markets: Arc<dyn MarketRepository>,
        buildings: Arc<dyn BuildingRepository>,
        shops: Arc<dyn ShopRepository>,
        stalls: Arc<dyn StallRepository>,
        resolver: ReferenceResolver,
    ) -> Self {
        Self {
            markets,
            buildings,
            shops,
            stalls,
            resolver,
        }
    }

    // --- Markets ---

    /// Creates a market together with its address and any nested
    /// buildings and stalls, in one transaction.
    pub async fn create_market(&self, new: NewMarket) -> Result<Market, DomainError> {
        new.validate()?;
        info!("Creating market: {}", new.name);

        let mut market = Market::new(new.name, Address::new(new.address))?;

        for building in &new.buildings {
            market.buildings.push(Building::new(market.id, building)?);
        }

        // Resolve every nested stall tenant before the first write.
        for new_stall in &new.stalls {
            let tenant = match new_stall.tenant_id {
                Some(tenant_id) => Some(self.resolver.tenant(&tenant_id).await?),
                None => None,
            };
            let mut stall = Stall::new(market.id, new_stall)?;
            stall.set_occupant(tenant);
            market.stalls.push(stall);
        }

        let created = self.markets.create(&market).await?;
        info!("Market created: {}", created.id);
        Ok(created)
    }

    pub async fn find_all_markets(&self) -> Result<Vec<Market>, DomainError> {
        self.markets.find_all().await
    }

    pub async fn find_one_market(&self, id: &Uuid) -> Result<Market, DomainError> {
        self.markets
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Market,
                id: *id,
            })
    }

    /// Partial merge; address fields, when present, update the owned
    /// address in the same transaction as the market row.
    pub async fn update_market(&self, id: &Uuid, patch: MarketPatch) -> Result<Market, DomainError> {
        let mut market = self.find_one_market(id).await?;
        market.apply(patch)?;
        self.markets.update(&market).await
    }

    pub async fn delete_market(&self, id: &Uuid) -> Result<(), DomainError> {
        let market = self.find_one_market(id).await?;
        info!("Deleting market {} and everything under it", market.id);
        self.markets.delete(&market.id).await
    }

    // --- Buildings ---

    pub async fn create_building(
        &self,
        market_id: &Uuid,
        new: NewBuilding,
    ) -> Result<Building, DomainError> {
        new.validate()?;
        let market = self.resolver.market(market_id).await.map_err(|e| {
            warn!("Building creation failed: market {} not found", market_id);
            e
        })?;

        let building = Building::new(market.id, &new)?;
        self.buildings.create(&building).await
    }

    pub async fn find_one_building(&self, id: &Uuid) -> Result<Building, DomainError> {
        self.buildings
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Building,
                id: *id,
            })
    }

    pub async fn find_all_buildings(&self, market_id: &Uuid) -> Result<Vec<Building>, DomainError> {
        self.buildings.find_all_for_market(market_id).await
    }

    pub async fn update_building(
        &self,
        id: &Uuid,
        patch: BuildingPatch,
    ) -> Result<Building, DomainError> {
        let mut building = self.find_one_building(id).await?;
        building.apply(patch)?;
        self.buildings.update(&building).await
    }

    pub async fn delete_building(&self, id: &Uuid) -> Result<(), DomainError> {
        let building = self.find_one_building(id).await?;
        self.buildings.delete(&building.id).await
    }

    // --- Shops ---

    pub async fn create_shop(
        &self,
        building_id: &Uuid,
        new: NewShop,
    ) -> Result<Shop, DomainError> {
        new.validate()?;
        let building = self.resolver.building(building_id).await?;

        let tenant = match new.tenant_id {
            Some(tenant_id) => Some(self.resolver.tenant(&tenant_id).await?),
            None => None,
        };

        let mut shop = Shop::new(building.id, &new)?;
        shop.set_occupant(tenant);
        self.shops.create(&shop).await
    }

    pub async fn find_one_shop(&self, id: &Uuid) -> Result<Shop, DomainError> {
        self.shops
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Shop,
                id: *id,
            })
    }

    pub async fn find_all_shops(&self, building_id: &Uuid) -> Result<Vec<Shop>, DomainError> {
        self.shops.find_all_for_building(building_id).await
    }

    /// Partial merge. A supplied `tenant_id` replaces the occupant; an
    /// omitted one keeps the previous occupant. Either way the status is
    /// recomputed from the resulting tenant reference.
    pub async fn update_shop(&self, id: &Uuid, patch: ShopPatch) -> Result<Shop, DomainError> {
        let mut shop = self.find_one_shop(id).await?;

        let tenant = match patch.tenant_id {
            Some(tenant_id) => Some(self.resolver.tenant(&tenant_id).await?),
            None => shop.tenant.clone(),
        };

        shop.apply(&patch)?;
        shop.set_occupant(tenant);
        self.shops.update(&shop).await
    }

    pub async fn delete_shop(&self, id: &Uuid) -> Result<(), DomainError> {
        let shop = self.find_one_shop(id).await?;
        self.shops.delete(&shop.id).await
    }

    // --- Stalls ---

    /// Used by the nested market-create path; direct exposure over HTTP
    /// sits behind a deployment flag.
    pub async fn create_stall(
        &self,
        market_id: &Uuid,
        new: NewStall,
    ) -> Result<Stall, DomainError> {
        new.validate()?;
        let market = self.resolver.market(market_id).await?;

        let tenant = match new.tenant_id {
            Some(tenant_id) => Some(self.resolver.tenant(&tenant_id).await?),
            None => None,
        };

        let mut stall = Stall::new(market.id, &new)?;
        stall.set_occupant(tenant);
        self.stalls.create(&stall).await
    }

    pub async fn find_one_stall(&self, id: &Uuid) -> Result<Stall, DomainError> {
        self.stalls
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Stall,
                id: *id,
            })
    }

    pub async fn find_all_stalls(&self, market_id: &Uuid) -> Result<Vec<Stall>, DomainError> {
        self.stalls.find_all_for_market(market_id).await
    }

    /// Same merge and tenant semantics as [`Self::update_shop`].
    pub async fn update_stall(&self, id: &Uuid, patch: StallPatch) -> Result<Stall, DomainError> {
        let mut stall = self.find_one_stall(id).await?;

        let tenant = match patch.tenant_id {
            Some(tenant_id) => Some(self.resolver.tenant(&tenant_id).await?),
            None => stall.tenant.clone(),
        };

        stall.apply(&patch)?;
        stall.set_occupant(tenant);
        self.stalls.update(&stall).await
    }

    pub async fn delete_stall(&self, id: &Uuid) -> Result<(), DomainError> {
        let stall = self.find_one_stall(id).await?;
        self.stalls.delete(&stall.id).await
    }
}
