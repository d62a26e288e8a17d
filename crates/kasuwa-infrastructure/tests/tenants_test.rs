//! Integration tests for the tenants service.

mod common;

use common::*;
use kasuwa_core::domain::{TenantPatch, UnitStatus};
use kasuwa_core::error::{DomainError, EntityKind};

#[tokio::test]
async fn duplicate_contact_number_is_rejected() {
    let ctx = setup();

    ctx.tenants.create_tenant(john_doe()).await.unwrap();

    let mut duplicate = tenant_with_contact("+2348012345678");
    duplicate.email = "other@example.com".to_string();
    let err = ctx.tenants.create_tenant(duplicate).await.unwrap_err();

    assert!(matches!(err, DomainError::ContactNumberAlreadyExists(_)));
}

#[tokio::test]
async fn tenant_patch_changes_only_supplied_fields() {
    let ctx = setup();

    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();
    let updated = ctx
        .tenants
        .update(
            &tenant.id,
            TenantPatch {
                email: Some("john.doe@kasuwa.example".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "john.doe@kasuwa.example");
    assert_eq!(updated.first_name, "John");
    assert_eq!(updated.contact_number, "+2348012345678");
}

#[tokio::test]
async fn changing_contact_number_to_an_existing_one_is_rejected() {
    let ctx = setup();

    ctx.tenants.create_tenant(john_doe()).await.unwrap();
    let other = ctx
        .tenants
        .create_tenant(tenant_with_contact("+2348098765432"))
        .await
        .unwrap();

    let err = ctx
        .tenants
        .update(
            &other.id,
            TenantPatch {
                contact_number: Some("+2348012345678".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ContactNumberAlreadyExists(_)));
}

#[tokio::test]
async fn removing_a_tenant_vacates_their_units() {
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

    ctx.tenants.remove(&tenant.id).await.unwrap();

    assert!(matches!(
        ctx.tenants.get_by_id(&tenant.id).await.unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::Tenant,
            ..
        }
    ));

    let stall = ctx.properties.find_one_stall(&stall_id).await.unwrap();
    let shop = ctx.properties.find_one_shop(&shop.id).await.unwrap();
    assert_eq!(stall.status, UnitStatus::Vacant);
    assert!(stall.tenant.is_none());
    assert_eq!(shop.status, UnitStatus::Vacant);
    assert!(shop.tenant.is_none());
}
