//! Occupancy assigner
//!
//! Assigns and clears the tenant on shops and stalls. A tenant may hold
//! any number of units, so no already-assigned check is made here.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{RentableUnit, Shop, Stall};
use crate::error::{DomainError, EntityKind};
use crate::repositories::{ShopRepository, StallRepository};
use crate::services::ReferenceResolver;

pub struct OccupancyAssigner {
    shops: Arc<dyn ShopRepository>,
    stalls: Arc<dyn StallRepository>,
    resolver: ReferenceResolver,
}

impl OccupancyAssigner {
    pub fn new(
        shops: Arc<dyn ShopRepository>,
        stalls: Arc<dyn StallRepository>,
        resolver: ReferenceResolver,
    ) -> Self {
        Self {
            shops,
            stalls,
            resolver,
        }
    }

    pub async fn assign_shop(&self, shop_id: &Uuid, tenant_id: &Uuid) -> Result<Shop, DomainError> {
        let mut shop = self
            .shops
            .find_by_id(shop_id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Shop,
                id: *shop_id,
            })?;

        let tenant = self.resolver.tenant(tenant_id).await?;
        info!("Assigning tenant {} to shop {}", tenant.id, shop.id);

        shop.set_occupant(Some(tenant));
        self.shops.update(&shop).await
    }

    pub async fn clear_shop(&self, shop_id: &Uuid) -> Result<Shop, DomainError> {
        let mut shop = self
            .shops
            .find_by_id(shop_id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Shop,
                id: *shop_id,
            })?;

        shop.set_occupant(None);
        self.shops.update(&shop).await
    }

    pub async fn assign_stall(
        &self,
        stall_id: &Uuid,
        tenant_id: &Uuid,
    ) -> Result<Stall, DomainError> {
        let mut stall = self
            .stalls
            .find_by_id(stall_id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Stall,
                id: *stall_id,
            })?;

        let tenant = self.resolver.tenant(tenant_id).await?;
        info!("Assigning tenant {} to stall {}", tenant.id, stall.id);

        stall.set_occupant(Some(tenant));
        self.stalls.update(&stall).await
    }

    pub async fn clear_stall(&self, stall_id: &Uuid) -> Result<Stall, DomainError> {
        let mut stall = self
            .stalls
            .find_by_id(stall_id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Stall,
                id: *stall_id,
            })?;

        stall.set_occupant(None);
        self.stalls.update(&stall).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewShop, NewTenant, Tenant, UnitStatus};
    use crate::repositories::market_repository::MockMarketRepository;
    use crate::repositories::building_repository::MockBuildingRepository;
    use crate::repositories::shop_repository::MockShopRepository;
    use crate::repositories::stall_repository::MockStallRepository;
    use crate::repositories::tenant_repository::MockTenantRepository;

    fn tenant() -> Tenant {
        Tenant::new(NewTenant {
            first_name: "John".to_string(),
            middle_name: None,
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            contact_number: "+2348012345678".to_string(),
        })
        .unwrap()
    }

    fn vacant_shop() -> Shop {
        Shop::new(
            Uuid::new_v4(),
            &NewShop {
                name: "Shop 101".to_string(),
                annual_rent_rate: 75000.0,
                size: None,
                tenant_id: None,
            },
        )
        .unwrap()
    }

    fn assigner(
        shops: MockShopRepository,
        stalls: MockStallRepository,
        tenants: MockTenantRepository,
    ) -> OccupancyAssigner {
        let shops: Arc<dyn ShopRepository> = Arc::new(shops);
        let stalls: Arc<dyn StallRepository> = Arc::new(stalls);
        let resolver = ReferenceResolver::new(
            Arc::new(MockMarketRepository::new()),
            Arc::new(MockBuildingRepository::new()),
            shops.clone(),
            stalls.clone(),
            Arc::new(tenants),
        );
        OccupancyAssigner::new(shops, stalls, resolver)
    }

    #[tokio::test]
    async fn test_assign_marks_shop_occupied() {
        let shop = vacant_shop();
        let shop_id = shop.id;
        let tenant = tenant();
        let tenant_id = tenant.id;

        let mut shops = MockShopRepository::new();
        shops
            .expect_find_by_id()
            .returning(move |_| Ok(Some(shop.clone())));
        shops.expect_update().returning(|s| Ok(s.clone()));

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));

        let assigner = assigner(shops, MockStallRepository::new(), tenants);
        let updated = assigner.assign_shop(&shop_id, &tenant_id).await.unwrap();

        assert_eq!(updated.status, UnitStatus::Occupied);
        assert_eq!(updated.tenant.map(|t| t.id), Some(tenant_id));
    }

    #[tokio::test]
    async fn test_assign_unknown_tenant_is_invalid_reference() {
        let shop = vacant_shop();
        let shop_id = shop.id;

        let mut shops = MockShopRepository::new();
        shops
            .expect_find_by_id()
            .returning(move |_| Ok(Some(shop.clone())));

        let mut tenants = MockTenantRepository::new();
        tenants.expect_find_by_id().returning(|_| Ok(None));

        let assigner = assigner(shops, MockStallRepository::new(), tenants);
        let err = assigner
            .assign_shop(&shop_id, &Uuid::new_v4())
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
    async fn test_clear_unknown_shop_is_not_found() {
        let mut shops = MockShopRepository::new();
        shops.expect_find_by_id().returning(|_| Ok(None));

        let assigner = assigner(shops, MockStallRepository::new(), MockTenantRepository::new());
        let err = assigner.clear_shop(&Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound {
                kind: EntityKind::Shop,
                ..
            }
        ));
    }
}
