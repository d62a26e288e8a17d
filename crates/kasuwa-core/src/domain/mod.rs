//! Domain entities for the market management application.

pub mod address;
pub mod building;
pub mod market;
pub mod occupancy;
pub mod rent_payment;
pub mod shop;
pub mod stall;
pub mod tenant;

// Re-export all entities and payload types
pub use address::{Address, AddressPatch, NewAddress};
pub use building::{Building, BuildingPatch, NewBuilding};
pub use market::{Market, MarketPatch, NewMarket};
pub use occupancy::{derive_status, RentableUnit, UnitStatus};
pub use rent_payment::{NewRentPayment, RentPayment, RentPaymentPatch};
pub use shop::{NewShop, Shop, ShopPatch};
pub use stall::{NewStall, Stall, StallPatch};
pub use tenant::{NewTenant, Tenant, TenantPatch};
