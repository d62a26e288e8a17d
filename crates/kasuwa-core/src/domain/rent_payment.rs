//! Rent payment domain entity
//!
//! A ledger record of an amount owed for a shop, tenant and year. The
//! shop and tenant links are fixed at creation; the ledger is historical,
//! so a payment may reference a tenant no longer occupying the shop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RentPayment {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub tenant_id: Uuid,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    #[validate(range(min = 1900, max = 3000, message = "Year out of range"))]
    pub year: i32,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRentPayment {
    pub shop_id: Uuid,
    pub tenant_id: Uuid,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    #[validate(range(min = 1900, max = 3000, message = "Year out of range"))]
    pub year: i32,
}

/// The shop and tenant links are immutable, so the patch carries no
/// fields for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RentPaymentPatch {
    pub amount: Option<f64>,
    pub year: Option<i32>,
}

impl RentPayment {
    pub fn new(new: &NewRentPayment) -> Result<Self, validator::ValidationErrors> {
        let payment = Self {
            id: Uuid::new_v4(),
            shop_id: new.shop_id,
            tenant_id: new.tenant_id,
            amount: new.amount,
            year: new.year,
            created_at: Utc::now(),
            modified_at: None,
        };

        payment.validate()?;
        Ok(payment)
    }

    /// Copies only the supplied fields onto the payment.
    pub fn apply(&mut self, patch: RentPaymentPatch) -> Result<(), validator::ValidationErrors> {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        self.validate()?;
        self.modified_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payment() {
        let payment = RentPayment::new(&NewRentPayment {
            shop_id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            amount: 75000.0,
            year: 2024,
        });
        assert!(payment.is_ok());
    }

    #[test]
    fn test_patch_cannot_touch_links() {
        let mut payment = RentPayment::new(&NewRentPayment {
            shop_id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            amount: 75000.0,
            year: 2024,
        })
        .unwrap();
        let shop_id = payment.shop_id;
        let tenant_id = payment.tenant_id;

        payment
            .apply(RentPaymentPatch {
                amount: Some(80000.0),
                year: None,
            })
            .unwrap();

        assert_eq!(payment.amount, 80000.0);
        assert_eq!(payment.year, 2024);
        assert_eq!(payment.shop_id, shop_id);
        assert_eq!(payment.tenant_id, tenant_id);
    }
}
