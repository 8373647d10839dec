pub mod accounts;
pub mod health;

use crate::db::Repository;
use axum::http::header::{HeaderName, HeaderValue};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .route(
            "/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/accounts/:id",
            get(accounts::read_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account),
        )
        .layer(cors)
        // outermost, so even preflight responses produced by the CORS
        // layer carry the hardening headers
        .layer(security_headers())
        .with_state(state)
}

type SecurityHeaderLayer = SetResponseHeaderLayer<HeaderValue>;

/// Hardening headers applied to every response.
fn security_headers() -> (
    SecurityHeaderLayer,
    SecurityHeaderLayer,
    SecurityHeaderLayer,
    SecurityHeaderLayer,
) {
    (
        SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("SAMEORIGIN"),
        ),
        SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ),
        SetResponseHeaderLayer::overriding(
            HeaderName::from_static("content-security-policy"),
            HeaderValue::from_static("default-src 'self'; object-src 'none'"),
        ),
        SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
    )
}
