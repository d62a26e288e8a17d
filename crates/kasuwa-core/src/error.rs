//! Domain errors

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The entity kinds a lookup or reference can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Market,
    Building,
    Shop,
    Stall,
    Tenant,
    RentPayment,
    Address,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Market => "Market",
            EntityKind::Building => "Building",
            EntityKind::Shop => "Shop",
            EntityKind::Stall => "Stall",
            EntityKind::Tenant => "Tenant",
            EntityKind::RentPayment => "Rent payment",
            EntityKind::Address => "Address",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    /// A primary-key lookup missed.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: Uuid },

    /// A parent or tenant id supplied in a payload does not resolve.
    #[error("Referenced {kind} with ID {id} does not exist")]
    InvalidReference { kind: EntityKind, id: Uuid },

    #[error("Contact number already exists: {0}")]
    ContactNumberAlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
