//! Domain services (business logic)

pub mod occupancy_service;
pub mod properties_service;
pub mod rent_ledger_service;
pub mod resolver;
pub mod tenants_service;

pub use occupancy_service::OccupancyAssigner;
pub use properties_service::PropertiesService;
pub use rent_ledger_service::RentLedgerService;
pub use resolver::ReferenceResolver;
pub use tenants_service::TenantsService;
