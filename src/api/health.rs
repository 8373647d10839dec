use axum::Json;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "OK"}))
}

pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Account REST API Service",
        "version": env!("CARGO_PKG_VERSION"),
        "paths": {"accounts": "/accounts"},
    }))
}
