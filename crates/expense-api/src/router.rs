//! Route table and middleware stack

use std::time::Duration;

use axum::{
    http::{header, header::InvalidHeaderValue, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use expense_shared::config::AppSettings;

use crate::handlers::{groups, health, pages};
use crate::state::AppState;

pub fn create_router(state: AppState, settings: &AppSettings) -> Result<Router, InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_origin(settings.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pages
        .route("/groups", get(pages::groups_page).post(pages::create_group_form))
        // Group routes
        .route("/api/groups", get(groups::list_groups).post(groups::create_group))
        .route("/api/groups/{id}", get(groups::get_group))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(settings.request_timeout_secs),
                ))
                .layer(cors),
        );

    Ok(router)
}
