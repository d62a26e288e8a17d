//! HTTP handlers

pub mod buildings;
pub mod health;
pub mod markets;
pub mod rent_payments;
pub mod shops;
pub mod stalls;
pub mod tenants;
