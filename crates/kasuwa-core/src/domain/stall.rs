//! Stall domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::occupancy::{derive_status, RentableUnit, UnitStatus};
use super::Tenant;

/// A rentable unit that sits directly under a market, outside any building.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Stall {
    pub id: Uuid,
    pub market_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Stall name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Annual rent rate must not be negative"))]
    pub annual_rent_rate: f64,

    pub status: UnitStatus,
    pub tenant: Option<Tenant>,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewStall {
    #[validate(length(min = 1, max = 100, message = "Stall name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Annual rent rate must not be negative"))]
    pub annual_rent_rate: f64,

    /// Initial occupant; the stall starts vacant when omitted.
    pub tenant_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StallPatch {
    pub name: Option<String>,
    pub annual_rent_rate: Option<f64>,
    /// When present, replaces the occupant; when omitted, the previous
    /// occupant is kept. Clearing goes through the occupancy assigner.
    pub tenant_id: Option<Uuid>,
}

impl Stall {
    /// Builds a vacant stall; the occupant, if any, is attached afterwards
    /// through [`RentableUnit::set_occupant`].
    pub fn new(market_id: Uuid, new: &NewStall) -> Result<Self, validator::ValidationErrors> {
        let stall = Self {
            id: Uuid::new_v4(),
            market_id,
            name: new.name.trim().to_string(),
            annual_rent_rate: new.annual_rent_rate,
            status: UnitStatus::Vacant,
            tenant: None,
            created_at: Utc::now(),
            modified_at: None,
        };

        stall.validate()?;
        Ok(stall)
    }

    /// Copies only the supplied non-occupancy fields onto the stall.
    pub fn apply(&mut self, patch: &StallPatch) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(annual_rent_rate) = patch.annual_rent_rate {
            self.annual_rent_rate = annual_rent_rate;
        }
        self.validate()?;
        self.modified_at = Some(Utc::now());
        Ok(())
    }
}

impl RentableUnit for Stall {
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

    #[test]
    fn test_assign_then_clear_leaves_stall_vacant() {
        let mut stall = Stall::new(
            Uuid::new_v4(),
            &NewStall {
                name: "Stall 1".to_string(),
                annual_rent_rate: 25000.0,
                tenant_id: None,
            },
        )
        .unwrap();
        assert_eq!(stall.status, UnitStatus::Vacant);

        let tenant = Tenant::new(NewTenant {
            first_name: "John".to_string(),
            middle_name: None,
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            contact_number: "+2348012345678".to_string(),
        })
        .unwrap();

        stall.set_occupant(Some(tenant));
        assert_eq!(stall.status, UnitStatus::Occupied);

        stall.set_occupant(None);
        assert_eq!(stall.status, UnitStatus::Vacant);
        assert!(stall.tenant.is_none());
    }
}
