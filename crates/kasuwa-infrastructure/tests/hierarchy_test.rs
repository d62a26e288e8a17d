//! Integration tests for the market hierarchy: nested creation,
//! partial updates, referential guards and cascading deletion.

mod common;

use common::*;
use kasuwa_core::domain::{
    AddressPatch, BuildingPatch, MarketPatch, NewStall, ShopPatch, UnitStatus,
};
use kasuwa_core::error::{DomainError, EntityKind};
use uuid::Uuid;

#[tokio::test]
async fn create_and_fetch_market_round_trips_nested_children() {
    let ctx = setup();

    let created = ctx.properties.create_market(central_market()).await.unwrap();
    let fetched = ctx.properties.find_one_market(&created.id).await.unwrap();

    assert_eq!(fetched.name, "Central Market");
    assert_eq!(fetched.address.street_address, "Ahmadu Bello Way");
    assert_eq!(fetched.address.town, "Kaduna");
    assert_eq!(fetched.address.lga, "Kaduna North");
    assert_eq!(fetched.address.state, "Kaduna");

    assert_eq!(fetched.buildings.len(), 1);
    assert_eq!(fetched.buildings[0].name, "Block A");
    assert_eq!(fetched.buildings[0].status, "working");

    assert_eq!(fetched.stalls.len(), 1);
    assert_eq!(fetched.stalls[0].name, "Stall 1");
    assert_eq!(fetched.stalls[0].annual_rent_rate, 25000.0);
    assert_eq!(fetched.stalls[0].status, UnitStatus::Vacant);
}

#[tokio::test]
async fn create_market_with_unknown_stall_tenant_persists_nothing() {
    let ctx = setup();

    let mut new = central_market();
    new.stalls.push(NewStall {
        name: "Stall 2".to_string(),
        annual_rent_rate: 30000.0,
        tenant_id: Some(Uuid::new_v4()),
    });

    let err = ctx.properties.create_market(new).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::Tenant,
            ..
        }
    ));

    let markets = ctx.properties.find_all_markets().await.unwrap();
    assert!(markets.is_empty());
}

#[tokio::test]
async fn create_shop_under_unknown_building_is_rejected() {
    let ctx = setup();

    let err = ctx
        .properties
        .create_shop(&Uuid::new_v4(), shop_101())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::Building,
            ..
        }
    ));
}

#[tokio::test]
async fn partial_building_update_changes_only_supplied_fields() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;

    let updated = ctx
        .properties
        .update_building(
            &building_id,
            BuildingPatch {
                description: Some("Renovated wing".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.description, "Renovated wing");
    assert_eq!(updated.name, "Block A");
    assert_eq!(updated.summary, "3 floors with mixed use");
    assert_eq!(updated.status, "working");
}

#[tokio::test]
async fn market_address_patch_updates_owned_address_in_place() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let address_id = market.address.id;

    let updated = ctx
        .properties
        .update_market(
            &market.id,
            MarketPatch {
                name: None,
                address: Some(AddressPatch {
                    street_address: Some("Independence Way".to_string()),
                    ..Default::default()
                }),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.address.id, address_id);
    assert_eq!(updated.address.street_address, "Independence Way");
    assert_eq!(updated.address.town, "Kaduna");
    assert_eq!(updated.name, "Central Market");
}

#[tokio::test]
async fn shop_update_without_tenant_keeps_previous_occupant() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();

    let mut new_shop = shop_101();
    new_shop.tenant_id = Some(tenant.id);
    let shop = ctx
        .properties
        .create_shop(&building_id, new_shop)
        .await
        .unwrap();
    assert_eq!(shop.status, UnitStatus::Occupied);

    let updated = ctx
        .properties
        .update_shop(
            &shop.id,
            ShopPatch {
                annual_rent_rate: Some(90000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.annual_rent_rate, 90000.0);
    assert_eq!(updated.status, UnitStatus::Occupied);
    assert_eq!(updated.tenant.map(|t| t.id), Some(tenant.id));
}

#[tokio::test]
async fn deleting_market_removes_everything_reachable_from_it() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let stall_id = market.stalls[0].id;

    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();
    let payment = ctx
        .ledger
        .create_payment(kasuwa_core::domain::NewRentPayment {
            shop_id: shop.id,
            tenant_id: tenant.id,
            amount: 75000.0,
            year: 2024,
        })
        .await
        .unwrap();

    ctx.properties.delete_market(&market.id).await.unwrap();

    assert!(matches!(
        ctx.properties.find_one_market(&market.id).await.unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::Market,
            ..
        }
    ));
    assert!(matches!(
        ctx.properties
            .find_one_building(&building_id)
            .await
            .unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::Building,
            ..
        }
    ));
    assert!(matches!(
        ctx.properties.find_one_shop(&shop.id).await.unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::Shop,
            ..
        }
    ));
    assert!(matches!(
        ctx.properties.find_one_stall(&stall_id).await.unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::Stall,
            ..
        }
    ));
    assert!(matches!(
        ctx.ledger.find_one_payment(&payment.id).await.unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::RentPayment,
            ..
        }
    ));

    // The shared tenant survives the cascade.
    assert!(ctx.tenants.get_by_id(&tenant.id).await.is_ok());
}

#[tokio::test]
async fn deleting_building_cascades_to_shops_but_not_market() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();

    ctx.properties.delete_building(&building_id).await.unwrap();

    assert!(ctx.properties.find_one_shop(&shop.id).await.is_err());
    let market = ctx.properties.find_one_market(&market.id).await.unwrap();
    assert!(market.buildings.is_empty());
    assert_eq!(market.stalls.len(), 1);
}

#[tokio::test]
async fn update_of_unknown_market_is_not_found() {
    let ctx = setup();

    let err = ctx
        .properties
        .update_market(&Uuid::new_v4(), MarketPatch::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::NotFound {
            kind: EntityKind::Market,
            ..
        }
    ));
}
