//! Tenant domain entity
//!
//! A tenant is a renter. Shops and stalls hold references to tenants;
//! a tenant is never owned by the unit it occupies, and may occupy any
//! number of units at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Tenant {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "First name must not be empty"))]
    pub first_name: String,

    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must not be empty"))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, message = "Contact number must not be empty"))]
    pub contact_number: String,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTenant {
    #[validate(length(min = 1, max = 100, message = "First name must not be empty"))]
    pub first_name: String,

    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must not be empty"))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, message = "Contact number must not be empty"))]
    pub contact_number: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantPatch {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
}

impl Tenant {
    pub fn new(new: NewTenant) -> Result<Self, validator::ValidationErrors> {
        let tenant = Self {
            id: Uuid::new_v4(),
            first_name: new.first_name.trim().to_string(),
            middle_name: new.middle_name.map(|m| m.trim().to_string()),
            last_name: new.last_name.trim().to_string(),
            email: new.email.trim().to_string(),
            contact_number: new.contact_number.trim().to_string(),
            created_at: Utc::now(),
            modified_at: None,
        };

        tenant.validate()?;
        Ok(tenant)
    }

    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Copies only the supplied fields onto the tenant.
    pub fn apply(&mut self, patch: TenantPatch) -> Result<(), validator::ValidationErrors> {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(middle_name) = patch.middle_name {
            self.middle_name = Some(middle_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(contact_number) = patch.contact_number {
            self.contact_number = contact_number;
        }
        self.validate()?;
        self.modified_at = Some(Utc::now());
        Ok(())
    }
}
