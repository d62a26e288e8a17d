//! Address domain entity
//!
//! An address belongs to exactly one market and shares its lifecycle:
//! it is created with the market and removed with it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kasuwa_shared::constants::DEFAULT_ADDRESS_STATE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub street_address: String,
    pub town: String,
    /// Local-government area.
    pub lga: String,
    pub state: String,
}

/// Address fields supplied when creating a market.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAddress {
    #[validate(length(min = 1, message = "Street address must not be empty"))]
    pub street_address: String,

    #[validate(length(min = 1, message = "Town must not be empty"))]
    pub town: String,

    #[validate(length(min = 1, message = "LGA must not be empty"))]
    pub lga: String,

    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressPatch {
    pub street_address: Option<String>,
    pub town: Option<String>,
    pub lga: Option<String>,
    pub state: Option<String>,
}

impl Address {
    pub fn new(new: NewAddress) -> Self {
        Self {
            id: Uuid::new_v4(),
            street_address: new.street_address,
            town: new.town,
            lga: new.lga,
            state: new.state.unwrap_or_else(|| DEFAULT_ADDRESS_STATE.to_string()),
        }
    }

    /// Copies only the supplied fields onto the address.
    pub fn apply(&mut self, patch: AddressPatch) {
        if let Some(street_address) = patch.street_address {
            self.street_address = street_address;
        }
        if let Some(town) = patch.town {
            self.town = town;
        }
        if let Some(lga) = patch.lga {
            self.lga = lga;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_address() -> NewAddress {
        NewAddress {
            street_address: "Ahmadu Bello Way".to_string(),
            town: "Kaduna".to_string(),
            lga: "Kaduna North".to_string(),
            state: None,
        }
    }

    #[test]
    fn test_state_defaults_to_kaduna() {
        let address = Address::new(new_address());
        assert_eq!(address.state, "Kaduna");
    }

    #[test]
    fn test_partial_patch_keeps_other_fields() {
        let mut address = Address::new(new_address());
        address.apply(AddressPatch {
            town: Some("Zaria".to_string()),
            ..Default::default()
        });
        assert_eq!(address.town, "Zaria");
        assert_eq!(address.street_address, "Ahmadu Bello Way");
        assert_eq!(address.lga, "Kaduna North");
        assert_eq!(address.state, "Kaduna");
    }
}
