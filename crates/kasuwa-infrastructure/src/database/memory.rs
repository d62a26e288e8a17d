//! In-memory implementation of the repository traits.
//!
//! # Purpose
//! Implements every repository trait over `HashMap`s guarded by a single
//! `tokio::sync::RwLock`. It exists for local development and tests, with
//! no external dependencies.
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: mutations take the write lock, so
//!   concurrent updates against one unit serialize and the last writer
//!   wins, matching the row-locking discipline of the Postgres adapters.
//! - Deletes cascade by scanning for dependents; acceptable for the
//!   small workloads this store is meant for.
//!
//! Tenant links are stored as ids and aggregates are assembled on read,
//! so an edit to a tenant is visible through every unit referencing it,
//! the same shape the relational schema has.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use kasuwa_core::domain::{
    Address, Building, Market, RentPayment, Shop, Stall, Tenant, UnitStatus,
};
use kasuwa_core::error::{DomainError, EntityKind};
use kasuwa_core::repositories::{
    BuildingRepository, MarketRepository, RentPaymentRepository, ShopRepository, StallRepository,
    TenantRepository,
};

#[derive(Debug, Clone)]
struct MarketRecord {
    id: Uuid,
    name: String,
    address_id: Uuid,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct BuildingRecord {
    id: Uuid,
    market_id: Uuid,
    name: String,
    description: String,
    summary: String,
    status: String,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct ShopRecord {
    id: Uuid,
    building_id: Uuid,
    tenant_id: Option<Uuid>,
    name: String,
    annual_rent_rate: f64,
    size: Option<f64>,
    status: UnitStatus,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct StallRecord {
    id: Uuid,
    market_id: Uuid,
    tenant_id: Option<Uuid>,
    name: String,
    annual_rent_rate: f64,
    status: UnitStatus,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct State {
    addresses: HashMap<Uuid, Address>,
    markets: HashMap<Uuid, MarketRecord>,
    buildings: HashMap<Uuid, BuildingRecord>,
    shops: HashMap<Uuid, ShopRecord>,
    stalls: HashMap<Uuid, StallRecord>,
    tenants: HashMap<Uuid, Tenant>,
    rent_payments: HashMap<Uuid, RentPayment>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn shop_record(shop: &Shop) -> ShopRecord {
    ShopRecord {
        id: shop.id,
        building_id: shop.building_id,
        tenant_id: shop.tenant.as_ref().map(|t| t.id),
        name: shop.name.clone(),
        annual_rent_rate: shop.annual_rent_rate,
        size: shop.size,
        status: shop.status,
        created_at: shop.created_at,
        modified_at: shop.modified_at,
    }
}

fn stall_record(stall: &Stall) -> StallRecord {
    StallRecord {
        id: stall.id,
        market_id: stall.market_id,
        tenant_id: stall.tenant.as_ref().map(|t| t.id),
        name: stall.name.clone(),
        annual_rent_rate: stall.annual_rent_rate,
        status: stall.status,
        created_at: stall.created_at,
        modified_at: stall.modified_at,
    }
}

fn building_record(building: &Building) -> BuildingRecord {
    BuildingRecord {
        id: building.id,
        market_id: building.market_id,
        name: building.name.clone(),
        description: building.description.clone(),
        summary: building.summary.clone(),
        status: building.status.clone(),
        created_at: building.created_at,
        modified_at: building.modified_at,
    }
}

fn assemble_shop(state: &State, record: &ShopRecord) -> Shop {
    Shop {
        id: record.id,
        building_id: record.building_id,
        name: record.name.clone(),
        annual_rent_rate: record.annual_rent_rate,
        size: record.size,
        status: record.status,
        tenant: record.tenant_id.and_then(|id| state.tenants.get(&id).cloned()),
        created_at: record.created_at,
        modified_at: record.modified_at,
    }
}

fn assemble_stall(state: &State, record: &StallRecord) -> Stall {
    Stall {
        id: record.id,
        market_id: record.market_id,
        name: record.name.clone(),
        annual_rent_rate: record.annual_rent_rate,
        status: record.status,
        tenant: record.tenant_id.and_then(|id| state.tenants.get(&id).cloned()),
        created_at: record.created_at,
        modified_at: record.modified_at,
    }
}

fn assemble_building(state: &State, record: &BuildingRecord, with_shops: bool) -> Building {
    let shops = if with_shops {
        state
            .shops
            .values()
            .filter(|s| s.building_id == record.id)
            .map(|s| assemble_shop(state, s))
            .collect()
    } else {
        Vec::new()
    };

    Building {
        id: record.id,
        market_id: record.market_id,
        name: record.name.clone(),
        description: record.description.clone(),
        summary: record.summary.clone(),
        status: record.status.clone(),
        shops,
        created_at: record.created_at,
        modified_at: record.modified_at,
    }
}

fn assemble_market(state: &State, record: &MarketRecord) -> Result<Market, DomainError> {
    let address = state
        .addresses
        .get(&record.address_id)
        .cloned()
        .ok_or_else(|| {
            DomainError::DatabaseError(format!("address missing for market {}", record.id))
        })?;

    Ok(Market {
        id: record.id,
        name: record.name.clone(),
        address,
        buildings: state
            .buildings
            .values()
            .filter(|b| b.market_id == record.id)
            .map(|b| assemble_building(state, b, false))
            .collect(),
        stalls: state
            .stalls
            .values()
            .filter(|s| s.market_id == record.id)
            .map(|s| assemble_stall(state, s))
            .collect(),
        created_at: record.created_at,
        modified_at: record.modified_at,
    })
}

fn foreign_key_violation(table: &str, column: &str) -> DomainError {
    DomainError::DatabaseError(format!("foreign key violation on {table}.{column}"))
}

#[async_trait]
impl MarketRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Market>, DomainError> {
        let state = self.inner.read().await;
        state
            .markets
            .values()
            .map(|record| assemble_market(&state, record))
            .collect()
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Market>, DomainError> {
        let state = self.inner.read().await;
        match state.markets.get(id) {
            Some(record) => Ok(Some(assemble_market(&state, record)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, market: &Market) -> Result<Market, DomainError> {
        let mut state = self.inner.write().await;

        for stall in &market.stalls {
            if let Some(tenant_id) = stall.tenant.as_ref().map(|t| t.id) {
                if !state.tenants.contains_key(&tenant_id) {
                    return Err(foreign_key_violation("stalls", "tenant_id"));
                }
            }
        }

        state.addresses.insert(market.address.id, market.address.clone());
        state.markets.insert(
            market.id,
            MarketRecord {
                id: market.id,
                name: market.name.clone(),
                address_id: market.address.id,
                created_at: market.created_at,
                modified_at: market.modified_at,
            },
        );
        for building in &market.buildings {
            state.buildings.insert(building.id, building_record(building));
        }
        for stall in &market.stalls {
            state.stalls.insert(stall.id, stall_record(stall));
        }

        Ok(market.clone())
    }

    async fn update(&self, market: &Market) -> Result<Market, DomainError> {
        let mut state = self.inner.write().await;

        let record = state
            .markets
            .get_mut(&market.id)
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Market,
                id: market.id,
            })?;
        record.name = market.name.clone();
        record.modified_at = market.modified_at;
        let record = record.clone();

        state
            .addresses
            .insert(market.address.id, market.address.clone());

        assemble_market(&state, &record)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut state = self.inner.write().await;

        let Some(record) = state.markets.remove(id) else {
            return Ok(());
        };

        let building_ids: Vec<Uuid> = state
            .buildings
            .values()
            .filter(|b| b.market_id == *id)
            .map(|b| b.id)
            .collect();
        let shop_ids: Vec<Uuid> = state
            .shops
            .values()
            .filter(|s| building_ids.contains(&s.building_id))
            .map(|s| s.id)
            .collect();

        state
            .rent_payments
            .retain(|_, p| !shop_ids.contains(&p.shop_id));
        state.shops.retain(|_, s| !building_ids.contains(&s.building_id));
        state.buildings.retain(|_, b| b.market_id != *id);
        state.stalls.retain(|_, s| s.market_id != *id);
        state.addresses.remove(&record.address_id);

        Ok(())
    }
}

#[async_trait]
impl BuildingRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Building>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .buildings
            .get(id)
            .map(|record| assemble_building(&state, record, true)))
    }

    async fn find_all_for_market(&self, market_id: &Uuid) -> Result<Vec<Building>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .buildings
            .values()
            .filter(|b| b.market_id == *market_id)
            .map(|b| assemble_building(&state, b, true))
            .collect())
    }

    async fn create(&self, building: &Building) -> Result<Building, DomainError> {
        let mut state = self.inner.write().await;
        if !state.markets.contains_key(&building.market_id) {
            return Err(foreign_key_violation("buildings", "market_id"));
        }
        state.buildings.insert(building.id, building_record(building));
        Ok(building.clone())
    }

    async fn update(&self, building: &Building) -> Result<Building, DomainError> {
        let mut state = self.inner.write().await;
        if !state.buildings.contains_key(&building.id) {
            return Err(DomainError::NotFound {
                kind: EntityKind::Building,
                id: building.id,
            });
        }
        state.buildings.insert(building.id, building_record(building));
        Ok(building.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut state = self.inner.write().await;

        let shop_ids: Vec<Uuid> = state
            .shops
            .values()
            .filter(|s| s.building_id == *id)
            .map(|s| s.id)
            .collect();
        state
            .rent_payments
            .retain(|_, p| !shop_ids.contains(&p.shop_id));
        state.shops.retain(|_, s| s.building_id != *id);
        state.buildings.remove(id);

        Ok(())
    }
}

#[async_trait]
impl ShopRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Shop>, DomainError> {
        let state = self.inner.read().await;
        Ok(state.shops.get(id).map(|record| assemble_shop(&state, record)))
    }

    async fn find_all_for_building(&self, building_id: &Uuid) -> Result<Vec<Shop>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .shops
            .values()
            .filter(|s| s.building_id == *building_id)
            .map(|s| assemble_shop(&state, s))
            .collect())
    }

    async fn find_all_for_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Shop>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .shops
            .values()
            .filter(|s| s.tenant_id == Some(*tenant_id))
            .map(|s| assemble_shop(&state, s))
            .collect())
    }

    async fn create(&self, shop: &Shop) -> Result<Shop, DomainError> {
        let mut state = self.inner.write().await;
        if !state.buildings.contains_key(&shop.building_id) {
            return Err(foreign_key_violation("shops", "building_id"));
        }
        if let Some(tenant_id) = shop.tenant.as_ref().map(|t| t.id) {
            if !state.tenants.contains_key(&tenant_id) {
                return Err(foreign_key_violation("shops", "tenant_id"));
            }
        }
        state.shops.insert(shop.id, shop_record(shop));
        Ok(shop.clone())
    }

    async fn update(&self, shop: &Shop) -> Result<Shop, DomainError> {
        let mut state = self.inner.write().await;
        if !state.shops.contains_key(&shop.id) {
            return Err(DomainError::NotFound {
                kind: EntityKind::Shop,
                id: shop.id,
            });
        }
        state.shops.insert(shop.id, shop_record(shop));
        Ok(shop.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut state = self.inner.write().await;
        state.rent_payments.retain(|_, p| p.shop_id != *id);
        state.shops.remove(id);
        Ok(())
    }
}

#[async_trait]
impl StallRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Stall>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .stalls
            .get(id)
            .map(|record| assemble_stall(&state, record)))
    }

    async fn find_all_for_market(&self, market_id: &Uuid) -> Result<Vec<Stall>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .stalls
            .values()
            .filter(|s| s.market_id == *market_id)
            .map(|s| assemble_stall(&state, s))
            .collect())
    }

    async fn find_all_for_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Stall>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .stalls
            .values()
            .filter(|s| s.tenant_id == Some(*tenant_id))
            .map(|s| assemble_stall(&state, s))
            .collect())
    }

    async fn create(&self, stall: &Stall) -> Result<Stall, DomainError> {
        let mut state = self.inner.write().await;
        if !state.markets.contains_key(&stall.market_id) {
            return Err(foreign_key_violation("stalls", "market_id"));
        }
        if let Some(tenant_id) = stall.tenant.as_ref().map(|t| t.id) {
            if !state.tenants.contains_key(&tenant_id) {
                return Err(foreign_key_violation("stalls", "tenant_id"));
            }
        }
        state.stalls.insert(stall.id, stall_record(stall));
        Ok(stall.clone())
    }

    async fn update(&self, stall: &Stall) -> Result<Stall, DomainError> {
        let mut state = self.inner.write().await;
        if !state.stalls.contains_key(&stall.id) {
            return Err(DomainError::NotFound {
                kind: EntityKind::Stall,
                id: stall.id,
            });
        }
        state.stalls.insert(stall.id, stall_record(stall));
        Ok(stall.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut state = self.inner.write().await;
        state.stalls.remove(id);
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let state = self.inner.read().await;
        Ok(state.tenants.get(id).cloned())
    }

    async fn find_by_contact_number(
        &self,
        contact_number: &str,
    ) -> Result<Option<Tenant>, DomainError> {
        let state = self.inner.read().await;
        Ok(state
            .tenants
            .values()
            .find(|t| t.contact_number == contact_number)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tenant>, DomainError> {
        let state = self.inner.read().await;
        Ok(state.tenants.values().cloned().collect())
    }

    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let mut state = self.inner.write().await;
        if state
            .tenants
            .values()
            .any(|t| t.contact_number == tenant.contact_number)
        {
            return Err(DomainError::ContactNumberAlreadyExists(
                tenant.contact_number.clone(),
            ));
        }
        state.tenants.insert(tenant.id, tenant.clone());
        Ok(tenant.clone())
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let mut state = self.inner.write().await;
        if state
            .tenants
            .values()
            .any(|t| t.id != tenant.id && t.contact_number == tenant.contact_number)
        {
            return Err(DomainError::ContactNumberAlreadyExists(
                tenant.contact_number.clone(),
            ));
        }
        if !state.tenants.contains_key(&tenant.id) {
            return Err(DomainError::NotFound {
                kind: EntityKind::Tenant,
                id: tenant.id,
            });
        }
        state.tenants.insert(tenant.id, tenant.clone());
        Ok(tenant.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut state = self.inner.write().await;
        if state.shops.values().any(|s| s.tenant_id == Some(*id)) {
            return Err(foreign_key_violation("shops", "tenant_id"));
        }
        if state.stalls.values().any(|s| s.tenant_id == Some(*id)) {
            return Err(foreign_key_violation("stalls", "tenant_id"));
        }
        if state.rent_payments.values().any(|p| p.tenant_id == *id) {
            return Err(foreign_key_violation("rent_payments", "tenant_id"));
        }
        state.tenants.remove(id);
        Ok(())
    }
}

#[async_trait]
impl RentPaymentRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RentPayment>, DomainError> {
        let state = self.inner.read().await;
        Ok(state.rent_payments.get(id).cloned())
    }

    async fn find_all_for_shop(&self, shop_id: &Uuid) -> Result<Vec<RentPayment>, DomainError> {
        let state = self.inner.read().await;
        let mut payments: Vec<RentPayment> = state
            .rent_payments
            .values()
            .filter(|p| p.shop_id == *shop_id)
            .cloned()
            .collect();
        payments.sort_by_key(|p| p.year);
        Ok(payments)
    }

    async fn create(&self, payment: &RentPayment) -> Result<RentPayment, DomainError> {
        let mut state = self.inner.write().await;
        if !state.shops.contains_key(&payment.shop_id) {
            return Err(foreign_key_violation("rent_payments", "shop_id"));
        }
        if !state.tenants.contains_key(&payment.tenant_id) {
            return Err(foreign_key_violation("rent_payments", "tenant_id"));
        }
        state.rent_payments.insert(payment.id, payment.clone());
        Ok(payment.clone())
    }

    async fn update(&self, payment: &RentPayment) -> Result<RentPayment, DomainError> {
        let mut state = self.inner.write().await;
        if !state.rent_payments.contains_key(&payment.id) {
            return Err(DomainError::NotFound {
                kind: EntityKind::RentPayment,
                id: payment.id,
            });
        }
        state.rent_payments.insert(payment.id, payment.clone());
        Ok(payment.clone())
    }
}
