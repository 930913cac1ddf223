// src/routes.rs

use std::any::Any;

use axum::{
    Json, Router,
    http::{Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, problems, time_window},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

/// Turns a panic inside a handler into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": "Internal Server Error" })),
    )
        .into_response()
}

/// Assembles the main application router.
///
/// * Public problem and time-window routes (optional bearer token).
/// * Admin routes behind auth + admin middleware.
/// * Global middleware (Trace, CORS, panic guard).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let admin_routes = Router::new()
        .route("/time-window", put(time_window::update_time_window))
        .route(
            "/problem-sets/{date}/{difficulty}",
            get(admin::get_problem_set)
                .put(admin::update_problem_set)
                .delete(admin::delete_problem_set),
        )
        // Auth first, then Admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route(
            "/api/problems",
            get(problems::get_problems).post(problems::submit_answers),
        )
        .route("/api/time-window", get(time_window::get_time_window))
        .nest("/api/admin", admin_routes)
        // Global Middleware (applied from outside in)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
