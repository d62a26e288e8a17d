//! Occupancy rule for rentable units
//!
//! A shop or stall is occupied exactly when it has an assigned tenant.
//! Every code path that changes a unit's tenant reference goes through
//! [`RentableUnit::set_occupant`], which recomputes the status with
//! [`derive_status`]; status is never written independently.

use serde::{Deserialize, Serialize};

use super::Tenant;

/// Occupancy status of a rentable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Occupied,
    Vacant,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Occupied => "occupied",
            UnitStatus::Vacant => "vacant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "occupied" => Some(UnitStatus::Occupied),
            "vacant" => Some(UnitStatus::Vacant),
            _ => None,
        }
    }
}

impl Default for UnitStatus {
    fn default() -> Self {
        UnitStatus::Vacant
    }
}

/// The single owner of the occupancy rule.
pub fn derive_status(tenant: Option<&Tenant>) -> UnitStatus {
    if tenant.is_some() {
        UnitStatus::Occupied
    } else {
        UnitStatus::Vacant
    }
}

/// A unit that can hold one tenant at a time.
pub trait RentableUnit {
    fn tenant(&self) -> Option<&Tenant>;

    fn status(&self) -> UnitStatus;

    /// Replaces the occupant and recomputes the status. The only mutation
    /// path for a unit's tenant reference.
    fn set_occupant(&mut self, tenant: Option<Tenant>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewTenant;

    fn tenant() -> Tenant {
        Tenant::new(NewTenant {
            first_name: "Amina".to_string(),
            middle_name: None,
            last_name: "Bello".to_string(),
            email: "amina.bello@example.com".to_string(),
            contact_number: "+2348098765432".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_status_follows_tenant_presence() {
        assert_eq!(derive_status(None), UnitStatus::Vacant);
        assert_eq!(derive_status(Some(&tenant())), UnitStatus::Occupied);
    }

    #[test]
    fn test_status_round_trips_as_text() {
        assert_eq!(UnitStatus::from_str("occupied"), Some(UnitStatus::Occupied));
        assert_eq!(UnitStatus::from_str("vacant"), Some(UnitStatus::Vacant));
        assert_eq!(UnitStatus::from_str("leased"), None);
        assert_eq!(UnitStatus::Occupied.as_str(), "occupied");
    }
}
