// routes/verify.rs
// POST /api/verify { "token": "123456", "secret": "BASE32" } -> { "success": true|false }

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::secret::Secret;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub token: Option<String>,
    pub secret: Option<String>,
}

/// Checks the token against the current step plus the configured window.
pub async fn verify(
    State(st): State<Arc<AppState>>,
    Json(body): Json<VerifyRequest>,
) -> impl IntoResponse {
    let token = body.token.as_deref().map(str::trim).unwrap_or_default();
    let secret = body.secret.as_deref().map(str::trim).unwrap_or_default();
    if token.is_empty() || secret.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Missing token or secret" })),
        );
    }

    let secret = match Secret::from_base32(secret) {
        Ok(s) => s,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    let verified = st.engine.verify_current(&secret, token);
    tracing::info!(verified, "token verification");
    let message = if verified { "Verified" } else { "Invalid" };
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": verified,
            "message": message
        })),
    )
}
