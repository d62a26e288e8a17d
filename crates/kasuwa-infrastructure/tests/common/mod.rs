//! Shared test wiring: the real services over the in-memory store.
#![allow(dead_code)]

use std::sync::Arc;

use kasuwa_core::domain::{NewAddress, NewBuilding, NewMarket, NewShop, NewStall, NewTenant};
use kasuwa_core::repositories::{
    BuildingRepository, MarketRepository, RentPaymentRepository, ShopRepository, StallRepository,
    TenantRepository,
};
use kasuwa_core::services::{
    OccupancyAssigner, PropertiesService, ReferenceResolver, RentLedgerService, TenantsService,
};
use kasuwa_infrastructure::MemoryStore;

pub struct TestContext {
    pub properties: PropertiesService,
    pub occupancy: OccupancyAssigner,
    pub ledger: RentLedgerService,
    pub tenants: TenantsService,
}

pub fn setup() -> TestContext {
    let store = MemoryStore::new();
    let markets: Arc<dyn MarketRepository> = Arc::new(store.clone());
    let buildings: Arc<dyn BuildingRepository> = Arc::new(store.clone());
    let shops: Arc<dyn ShopRepository> = Arc::new(store.clone());
    let stalls: Arc<dyn StallRepository> = Arc::new(store.clone());
    let tenants: Arc<dyn TenantRepository> = Arc::new(store.clone());
    let payments: Arc<dyn RentPaymentRepository> = Arc::new(store);

    let resolver = ReferenceResolver::new(
        markets.clone(),
        buildings.clone(),
        shops.clone(),
        stalls.clone(),
        tenants.clone(),
    );

    TestContext {
        properties: PropertiesService::new(
            markets,
            buildings,
            shops.clone(),
            stalls.clone(),
            resolver.clone(),
        ),
        occupancy: OccupancyAssigner::new(shops.clone(), stalls.clone(), resolver.clone()),
        ledger: RentLedgerService::new(payments, resolver),
        tenants: TenantsService::new(tenants, shops, stalls),
    }
}

pub fn central_market() -> NewMarket {
    NewMarket {
        name: "Central Market".to_string(),
        address: NewAddress {
            street_address: "Ahmadu Bello Way".to_string(),
            town: "Kaduna".to_string(),
            lga: "Kaduna North".to_string(),
            state: None,
        },
        buildings: vec![NewBuilding {
            name: "Block A".to_string(),
            description: "Main wing".to_string(),
            summary: "3 floors with mixed use".to_string(),
        }],
        stalls: vec![NewStall {
            name: "Stall 1".to_string(),
            annual_rent_rate: 25000.0,
            tenant_id: None,
        }],
    }
}

pub fn john_doe() -> NewTenant {
    NewTenant {
        first_name: "John".to_string(),
        middle_name: None,
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        contact_number: "+2348012345678".to_string(),
    }
}

pub fn tenant_with_contact(contact_number: &str) -> NewTenant {
    NewTenant {
        first_name: "Amina".to_string(),
        middle_name: Some("B.".to_string()),
        last_name: "Bello".to_string(),
        email: "amina.bello@example.com".to_string(),
        contact_number: contact_number.to_string(),
    }
}

pub fn shop_101() -> NewShop {
    NewShop {
        name: "Shop 101".to_string(),
        annual_rent_rate: 75000.0,
        size: Some(50.0),
        tenant_id: None,
    }
}
