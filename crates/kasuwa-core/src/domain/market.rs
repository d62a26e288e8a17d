//! Market domain entity
//!
//! The market aggregate carries its owned address and, when fetched,
//! its buildings and stalls. Buildings and stalls cannot outlive the
//! market: deleting a market removes everything reachable from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{Address, AddressPatch, Building, NewAddress, NewBuilding, NewStall, Stall};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Market {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Market name must not be empty"))]
    pub name: String,

    pub address: Address,

    #[serde(default)]
    pub buildings: Vec<Building>,

    #[serde(default)]
    pub stalls: Vec<Stall>,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMarket {
    #[validate(length(min = 1, max = 100, message = "Market name must not be empty"))]
    pub name: String,

    #[validate(nested)]
    pub address: NewAddress,

    /// Buildings created together with the market.
    #[serde(default)]
    #[validate(nested)]
    pub buildings: Vec<NewBuilding>,

    /// Stalls created together with the market.
    #[serde(default)]
    #[validate(nested)]
    pub stalls: Vec<NewStall>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketPatch {
    pub name: Option<String>,
    pub address: Option<AddressPatch>,
}

impl Market {
    pub fn new(name: String, address: Address) -> Result<Self, validator::ValidationErrors> {
        let market = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            address,
            buildings: Vec::new(),
            stalls: Vec::new(),
            created_at: Utc::now(),
            modified_at: None,
        };

        market.validate()?;
        Ok(market)
    }

    /// Copies only the supplied fields onto the market; an address
    /// sub-patch merges into the owned address the same way.
    pub fn apply(&mut self, patch: MarketPatch) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address_patch) = patch.address {
            self.address.apply(address_patch);
        }
        self.validate()?;
        self.modified_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central_market() -> Market {
        let address = Address::new(NewAddress {
            street_address: "Ahmadu Bello Way".to_string(),
            town: "Kaduna".to_string(),
            lga: "Kaduna North".to_string(),
            state: None,
        });
        Market::new("Central Market".to_string(), address).unwrap()
    }

    #[test]
    fn test_create_market_owns_address() {
        let market = central_market();
        assert_eq!(market.name, "Central Market");
        assert_eq!(market.address.state, "Kaduna");
        assert!(market.buildings.is_empty());
        assert!(market.stalls.is_empty());
    }

    #[test]
    fn test_address_patch_merges_into_owned_address() {
        let mut market = central_market();
        market
            .apply(MarketPatch {
                name: None,
                address: Some(AddressPatch {
                    street_address: Some("Independence Way".to_string()),
                    ..Default::default()
                }),
            })
            .unwrap();

        assert_eq!(market.name, "Central Market");
        assert_eq!(market.address.street_address, "Independence Way");
        assert_eq!(market.address.town, "Kaduna");
    }
}
