//! PostgreSQL repository implementations

mod rows;

pub mod building_repo_impl;
pub mod market_repo_impl;
pub mod rent_payment_repo_impl;
pub mod shop_repo_impl;
pub mod stall_repo_impl;
pub mod tenant_repo_impl;

pub use building_repo_impl::PgBuildingRepository;
pub use market_repo_impl::PgMarketRepository;
pub use rent_payment_repo_impl::PgRentPaymentRepository;
pub use shop_repo_impl::PgShopRepository;
pub use stall_repo_impl::PgStallRepository;
pub use tenant_repo_impl::PgTenantRepository;
