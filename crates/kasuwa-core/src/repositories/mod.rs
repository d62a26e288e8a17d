//! Repository traits (ports)

pub mod building_repository;
pub mod market_repository;
pub mod rent_payment_repository;
pub mod shop_repository;
pub mod stall_repository;
pub mod tenant_repository;

pub use building_repository::BuildingRepository;
pub use market_repository::MarketRepository;
pub use rent_payment_repository::RentPaymentRepository;
pub use shop_repository::ShopRepository;
pub use stall_repository::StallRepository;
pub use tenant_repository::TenantRepository;
