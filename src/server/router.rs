use std::time::Duration;

use axum::{
    http::{Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::server::{
    controller::{
        car::{create_car, delete_car, get_car, list_cars, update_car},
        docs::openapi_json,
        health::health,
        order::{create_order, delete_order, get_order, list_orders, update_order},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/docs/openapi.json", get(openapi_json))
        .route("/api/v1/cars", get(list_cars).post(create_car))
        .route(
            "/api/v1/cars/{id}",
            get(get_car).put(update_car).delete(delete_car),
        )
        .route("/api/v1/orders", get(list_orders).post(create_order))
        .route(
            "/api/v1/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// Builds the complete application with state, CORS, tracing and a request timeout.
///
/// Requests exceeding `request_timeout` are answered with `408 Request Timeout` and the
/// in-flight handler future is dropped.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    router()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods([
        Method::PUT,
        Method::POST,
        Method::GET,
        Method::DELETE,
        Method::OPTIONS,
    ])
}
