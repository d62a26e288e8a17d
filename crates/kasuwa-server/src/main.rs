use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use kasuwa_api::{routes, state::AppState};
use kasuwa_core::repositories::{
    BuildingRepository, MarketRepository, RentPaymentRepository, ShopRepository, StallRepository,
    TenantRepository,
};
use kasuwa_core::services::{
    OccupancyAssigner, PropertiesService, ReferenceResolver, RentLedgerService, TenantsService,
};
use kasuwa_infrastructure::database::connection;
use kasuwa_infrastructure::{
    PgBuildingRepository, PgMarketRepository, PgRentPaymentRepository, PgShopRepository,
    PgStallRepository, PgTenantRepository,
};
use kasuwa_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    kasuwa_shared::telemetry::init_telemetry();

    info!("Kasuwa server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    info!("Connecting to database...");
    let pool =
        connection::create_pool(&config.database.url, config.database.max_connections).await?;
    connection::run_migrations(&pool).await?;
    info!("Database connection established.");

    // Wire repositories into services
    let markets: Arc<dyn MarketRepository> = Arc::new(PgMarketRepository::new(pool.clone()));
    let buildings: Arc<dyn BuildingRepository> = Arc::new(PgBuildingRepository::new(pool.clone()));
    let shops: Arc<dyn ShopRepository> = Arc::new(PgShopRepository::new(pool.clone()));
    let stalls: Arc<dyn StallRepository> = Arc::new(PgStallRepository::new(pool.clone()));
    let tenants: Arc<dyn TenantRepository> = Arc::new(PgTenantRepository::new(pool.clone()));
    let payments: Arc<dyn RentPaymentRepository> = Arc::new(PgRentPaymentRepository::new(pool));

    let resolver = ReferenceResolver::new(
        markets.clone(),
        buildings.clone(),
        shops.clone(),
        stalls.clone(),
        tenants.clone(),
    );

    let state = AppState {
        properties: Arc::new(PropertiesService::new(
            markets,
            buildings,
            shops.clone(),
            stalls.clone(),
            resolver.clone(),
        )),
        occupancy: Arc::new(OccupancyAssigner::new(
            shops.clone(),
            stalls.clone(),
            resolver.clone(),
        )),
        ledger: Arc::new(RentLedgerService::new(payments, resolver)),
        tenants: Arc::new(TenantsService::new(tenants, shops, stalls)),
        config: config.clone(),
    };

    // Build router
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
