//! Shop domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::occupancy::{derive_status, RentableUnit, UnitStatus};
use super::Tenant;

/// A rentable unit inside a building.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Shop {
    pub id: Uuid,
    pub building_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Shop name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Annual rent rate must not be negative"))]
    pub annual_rent_rate: f64,

    /// Floor area in square metres, when surveyed.
    pub size: Option<f64>,

    pub status: UnitStatus,
    pub tenant: Option<Tenant>,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewShop {
    #[validate(length(min = 1, max = 100, message = "Shop name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Annual rent rate must not be negative"))]
    pub annual_rent_rate: f64,

    pub size: Option<f64>,

    /// Initial occupant; the shop starts vacant when omitted.
    pub tenant_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopPatch {
    pub name: Option<String>,
    pub annual_rent_rate: Option<f64>,
    pub size: Option<f64>,
    /// When present, replaces the occupant; when omitted, the previous
    /// occupant is kept. Clearing goes through the occupancy assigner.
    pub tenant_id: Option<Uuid>,
}

impl Shop {
    /// Builds a vacant shop; the occupant, if any, is attached afterwards
    /// through [`RentableUnit::set_occupant`].
    pub fn new(building_id: Uuid, new: &NewShop) -> Result<Self, validator::ValidationErrors> {
        let shop = Self {
            id: Uuid::new_v4(),
            building_id,
            name: new.name.trim().to_string(),
            annual_rent_rate: new.annual_rent_rate,
            size: new.size,
            status: UnitStatus::Vacant,
            tenant: None,
            created_at: Utc::now(),
            modified_at: None,
        };

        shop.validate()?;
        Ok(shop)
    }

    /// Copies only the supplied non-occupancy fields onto the shop.
    /// The `tenant_id` entry of the patch is resolved by the caller and
    /// applied through [`RentableUnit::set_occupant`].
    pub fn apply(&mut self, patch: &ShopPatch) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(annual_rent_rate) = patch.annual_rent_rate {
            self.annual_rent_rate = annual_rent_rate;
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        self.validate()?;
        self.modified_at = Some(Utc::now());
        Ok(())
    }
}

impl RentableUnit for Shop {
    fn tenant(&self) -> Option<&Tenant> {
        self.tenant.as_ref()
    }

    fn status(&self) -> UnitStatus {
        self.status
    }

    fn set_occupant(&mut self, tenant: Option<Tenant>) {
        self.status = derive_status(tenant.as_ref());
        self.tenant = tenant;
        self.modified_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewTenant;

    fn new_shop() -> NewShop {
        NewShop {
            name: "Shop 101".to_string(),
            annual_rent_rate: 75000.0,
            size: Some(50.0),
            tenant_id: None,
        }
    }

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

    #[test]
    fn test_new_shop_is_vacant() {
        let shop = Shop::new(Uuid::new_v4(), &new_shop()).unwrap();
        assert_eq!(shop.status, UnitStatus::Vacant);
        assert!(shop.tenant.is_none());
    }

    #[test]
    fn test_occupant_drives_status() {
        let mut shop = Shop::new(Uuid::new_v4(), &new_shop()).unwrap();

        let tenant = tenant();
        let tenant_id = tenant.id;
        shop.set_occupant(Some(tenant));
        assert_eq!(shop.status, UnitStatus::Occupied);
        assert_eq!(shop.tenant.as_ref().map(|t| t.id), Some(tenant_id));

        shop.set_occupant(None);
        assert_eq!(shop.status, UnitStatus::Vacant);
        assert!(shop.tenant.is_none());
    }

    #[test]
    fn test_patch_leaves_occupant_alone() {
        let mut shop = Shop::new(Uuid::new_v4(), &new_shop()).unwrap();
        shop.set_occupant(Some(tenant()));

        shop.apply(&ShopPatch {
            annual_rent_rate: Some(90000.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(shop.annual_rent_rate, 90000.0);
        assert_eq!(shop.name, "Shop 101");
        assert_eq!(shop.status, UnitStatus::Occupied);
        assert!(shop.tenant.is_some());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let mut new = new_shop();
        new.annual_rent_rate = -1.0;
        assert!(Shop::new(Uuid::new_v4(), &new).is_err());
    }
}
