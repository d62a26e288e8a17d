//! Router assembly

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{buildings, health, markets, rent_payments, shops, stalls, tenants};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let mut properties = Router::new()
        .route(
            "/markets",
            post(markets::create_market).get(markets::list_markets),
        )
        .route(
            "/markets/{id}",
            get(markets::get_market)
                .patch(markets::update_market)
                .delete(markets::delete_market),
        )
        .route("/markets/{id}/buildings", get(markets::list_buildings))
        .route("/markets/{id}/stalls", get(markets::list_stalls))
        .route("/buildings", post(buildings::create_building))
        .route(
            "/buildings/{id}",
            get(buildings::get_building)
                .patch(buildings::update_building)
                .delete(buildings::delete_building),
        )
        .route("/buildings/{id}/shops", get(buildings::list_shops))
        .route("/shops", post(shops::create_shop))
        .route(
            "/shops/{id}",
            get(shops::get_shop)
                .patch(shops::update_shop)
                .delete(shops::delete_shop),
        )
        .route(
            "/shops/{id}/tenant",
            put(shops::assign_tenant).delete(shops::clear_tenant),
        )
        .route(
            "/shops/{id}/rent-payments",
            get(rent_payments::list_for_shop),
        )
        .route(
            "/stalls/{id}",
            get(stalls::get_stall)
                .patch(stalls::update_stall)
                .delete(stalls::delete_stall),
        )
        .route(
            "/stalls/{id}/tenant",
            put(stalls::assign_tenant).delete(stalls::clear_tenant),
        )
        .route("/rent-payments", post(rent_payments::create_payment))
        .route(
            "/rent-payments/{id}",
            get(rent_payments::get_payment).patch(rent_payments::update_payment),
        );

    if state.config.features.enable_stall_creation {
        properties = properties.route("/stalls", post(stalls::create_stall));
    }

    let tenants = Router::new()
        .route("/", post(tenants::create_tenant).get(tenants::list_tenants))
        .route(
            "/{id}",
            get(tenants::get_tenant)
                .patch(tenants::update_tenant)
                .delete(tenants::delete_tenant),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/properties", properties)
        .nest("/api/v1/tenants", tenants)
        .with_state(state)
}
