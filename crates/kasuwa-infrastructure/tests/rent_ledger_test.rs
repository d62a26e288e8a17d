//! Integration tests for the rent ledger: referential guards at
//! creation, immutability of the shop/tenant links, and survival of
//! historical records across occupancy changes.

mod common;

use common::*;
use kasuwa_core::domain::{NewRentPayment, RentPaymentPatch};
use kasuwa_core::error::{DomainError, EntityKind};
use uuid::Uuid;

#[tokio::test]
async fn payment_requires_existing_shop_and_tenant() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();
    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();

    let err = ctx
        .ledger
        .create_payment(NewRentPayment {
            shop_id: Uuid::new_v4(),
            tenant_id: tenant.id,
            amount: 75000.0,
            year: 2024,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::Shop,
            ..
        }
    ));

    let err = ctx
        .ledger
        .create_payment(NewRentPayment {
            shop_id: shop.id,
            tenant_id: Uuid::new_v4(),
            amount: 75000.0,
            year: 2024,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::Tenant,
            ..
        }
    ));
}

#[tokio::test]
async fn ledger_keeps_payments_after_tenant_leaves_the_shop() {
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

    let payment = ctx
        .ledger
        .create_payment(NewRentPayment {
            shop_id: shop.id,
            tenant_id: tenant.id,
            amount: 75000.0,
            year: 2023,
        })
        .await
        .unwrap();

    ctx.occupancy.clear_shop(&shop.id).await.unwrap();

    let fetched = ctx.ledger.find_one_payment(&payment.id).await.unwrap();
    assert_eq!(fetched.tenant_id, tenant.id);
    assert_eq!(fetched.shop_id, shop.id);
}

#[tokio::test]
async fn payment_update_merges_amount_and_keeps_links() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();
    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();

    let payment = ctx
        .ledger
        .create_payment(NewRentPayment {
            shop_id: shop.id,
            tenant_id: tenant.id,
            amount: 75000.0,
            year: 2024,
        })
        .await
        .unwrap();

    let updated = ctx
        .ledger
        .update_payment(
            &payment.id,
            RentPaymentPatch {
                amount: Some(80000.0),
                year: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.amount, 80000.0);
    assert_eq!(updated.year, 2024);
    assert_eq!(updated.shop_id, shop.id);
    assert_eq!(updated.tenant_id, tenant.id);
}

#[tokio::test]
async fn payments_for_a_shop_come_back_in_year_order() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();
    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();

    for year in [2024, 2022, 2023] {
        ctx.ledger
            .create_payment(NewRentPayment {
                shop_id: shop.id,
                tenant_id: tenant.id,
                amount: 75000.0,
                year,
            })
            .await
            .unwrap();
    }

    let payments = ctx.ledger.find_all_for_shop(&shop.id).await.unwrap();
    let years: Vec<i32> = payments.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2022, 2023, 2024]);
}

#[tokio::test]
async fn deleting_shop_takes_its_payments_with_it() {
    let ctx = setup();

    let market = ctx.properties.create_market(central_market()).await.unwrap();
    let building_id = market.buildings[0].id;
    let shop = ctx
        .properties
        .create_shop(&building_id, shop_101())
        .await
        .unwrap();
    let tenant = ctx.tenants.create_tenant(john_doe()).await.unwrap();

    let payment = ctx
        .ledger
        .create_payment(NewRentPayment {
            shop_id: shop.id,
            tenant_id: tenant.id,
            amount: 75000.0,
            year: 2024,
        })
        .await
        .unwrap();

    ctx.properties.delete_shop(&shop.id).await.unwrap();

    assert!(matches!(
        ctx.ledger.find_one_payment(&payment.id).await.unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::RentPayment,
            ..
        }
    ));
}
