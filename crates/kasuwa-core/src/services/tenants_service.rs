//! Tenants service

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{NewTenant, RentableUnit, Tenant, TenantPatch};
use crate::error::{DomainError, EntityKind};
use crate::repositories::{ShopRepository, StallRepository, TenantRepository};

pub struct TenantsService {
    tenants: Arc<dyn TenantRepository>,
    shops: Arc<dyn ShopRepository>,
    stalls: Arc<dyn StallRepository>,
}

impl TenantsService {
    pub fn new(
        tenants: Arc<dyn TenantRepository>,
        shops: Arc<dyn ShopRepository>,
        stalls: Arc<dyn StallRepository>,
    ) -> Self {
        Self {
            tenants,
            shops,
            stalls,
        }
    }

    pub async fn create_tenant(&self, new: NewTenant) -> Result<Tenant, DomainError> {
        new.validate()?;

        if self
            .tenants
            .find_by_contact_number(new.contact_number.trim())
            .await?
            .is_some()
        {
            warn!(
                "Tenant creation failed: contact number already exists: {}",
                new.contact_number
            );
            return Err(DomainError::ContactNumberAlreadyExists(new.contact_number));
        }

        let tenant = Tenant::new(new)?;
        let created = self.tenants.create(&tenant).await?;
        info!("Tenant created: {}", created.id);
        Ok(created)
    }

    pub async fn get_all(&self) -> Result<Vec<Tenant>, DomainError> {
        self.tenants.find_all().await
    }

    pub async fn get_by_id(&self, id: &Uuid) -> Result<Tenant, DomainError> {
        self.tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Tenant,
                id: *id,
            })
    }

    pub async fn update(&self, id: &Uuid, patch: TenantPatch) -> Result<Tenant, DomainError> {
        let mut tenant = self.get_by_id(id).await?;

        if let Some(contact_number) = &patch.contact_number {
            if contact_number != &tenant.contact_number {
                if let Some(other) = self.tenants.find_by_contact_number(contact_number).await? {
                    if other.id != tenant.id {
                        return Err(DomainError::ContactNumberAlreadyExists(
                            contact_number.clone(),
                        ));
                    }
                }
            }
        }

        tenant.apply(patch)?;
        self.tenants.update(&tenant).await
    }

    /// Removes a tenant. Units the tenant occupies are cleared first so
    /// no shop or stall is left pointing at a missing renter.
    pub async fn remove(&self, id: &Uuid) -> Result<(), DomainError> {
        let tenant = self.get_by_id(id).await?;

        for mut shop in self.shops.find_all_for_tenant(&tenant.id).await? {
            shop.set_occupant(None);
            self.shops.update(&shop).await?;
        }
        for mut stall in self.stalls.find_all_for_tenant(&tenant.id).await? {
            stall.set_occupant(None);
            self.stalls.update(&stall).await?;
        }

        info!("Removing tenant {}", tenant.id);
        self.tenants.delete(&tenant.id).await
    }
}
