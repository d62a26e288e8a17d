//! Integration tests for the occupancy assigner: the status of a unit
//! always agrees with whether it currently has a tenant.

mod common;

use common::*;
use kasuwa_core::domain::UnitStatus;
use kasuwa_core::error::{DomainError, EntityKind};
use uuid::Uuid;

#[tokio::test]
async fn stall_goes_occupied_when_john_doe_moves_in() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let stall_id = market.stalls[0].id;
    assert_eq!(market.stalls[0].status, UnitStatus::Vacant);

    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();
    ctx.occupancy.assign_stall(&stall_id, &tenant.id).await.unwrap();

    let stall = ctx.properties.find_one_stall(&stall_id).await.unwrap();
    assert_eq!(stall.status, UnitStatus::Occupied);
    assert_eq!(stall.tenant.map(|t| t.id), Some(tenant.id));
}

#[tokio::test]
async fn assign_then_clear_leaves_shop_vacant_on_refetch() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();
    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();

    let assigned = ctx.occupancy.assign_shop(&shop.id, &tenant.id).await.unwrap();
    assert_eq!(assigned.status, UnitStatus::Occupied);

    let cleared = ctx.occupancy.clear_shop(&shop.id).await.unwrap();
    assert_eq!(cleared.status, UnitStatus::Vacant);
    assert!(cleared.tenant.is_none());

    let refetched = ctx.properties.find_one_shop(&shop.id).await.unwrap();
    assert_eq!(refetched.status, UnitStatus::Vacant);
    assert!(refetched.tenant.is_none());
}

#[tokio::test]
async fn second_assignment_replaces_the_first_occupant() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let stall_id = market.stalls[0].id;

    let first = ctx.tenants.create_tenant(john_doe()).await.unwrap();
    let second = ctx
        .tenants
        .create_tenant(tenant_with_contact("+2348098765432"))
        .await
        .unwrap();

    ctx.occupancy.assign_stall(&stall_id, &first.id).await.unwrap();
    ctx.occupancy.assign_stall(&stall_id, &second.id).await.unwrap();

    let stall = ctx.properties.find_one_stall(&stall_id).await.unwrap();
    assert_eq!(stall.status, UnitStatus::Occupied);
    assert_eq!(stall.tenant.map(|t| t.id), Some(second.id));
}

#[tokio::test]
async fn assigning_unknown_tenant_leaves_unit_untouched() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let stall_id = market.stalls[0].id;

    let err = ctx
        .occupancy
        .assign_stall(&stall_id, &Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::Tenant,
            ..
        }
    ));

    let stall = ctx.properties.find_one_stall(&stall_id).await.unwrap();
    assert_eq!(stall.status, UnitStatus::Vacant);
    assert!(stall.tenant.is_none());
}

#[tokio::test]
async fn one_tenant_may_hold_several_units() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let stall_id = market.stalls[0].id;
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();

    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();
    ctx.occupancy.assign_stall(&stall_id, &tenant.id).await.unwrap();
    ctx.occupancy.assign_shop(&shop.id, &tenant.id).await.unwrap();

    let stall = ctx.properties.find_one_stall(&stall_id).await.unwrap();
    let shop = ctx.properties.find_one_shop(&shop.id).await.unwrap();
    assert_eq!(stall.tenant.map(|t| t.id), Some(tenant.id));
    assert_eq!(shop.tenant.map(|t| t.id), Some(tenant.id));
}
