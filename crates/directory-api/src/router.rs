//! Route table

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{compensation, employee, health};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Employee routes
        .route("/api/employee", post(employee::create_employee))
        .route(
            "/api/employee/{id}",
            get(employee::get_employee).put(employee::replace_employee),
        )
        .route(
            "/api/employee/reportingStructure/{id}",
            get(employee::get_reporting_structure),
        )
        // Compensation routes
        .route("/api/compensations", post(compensation::create_compensation))
        .route("/api/compensations/{employee_id}", get(compensation::get_compensation))
        // Add State
        .with_state(state)
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        // Request ids
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
