use std::sync::Arc;

use kasuwa_core::services::{
    OccupancyAssigner, PropertiesService, RentLedgerService, TenantsService,
};
use kasuwa_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub properties: Arc<PropertiesService>,
    pub occupancy: Arc<OccupancyAssigner>,
    pub ledger: Arc<RentLedgerService>,
    pub tenants: Arc<TenantsService>,
    pub config: AppConfig,
}
