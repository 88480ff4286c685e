// routes/setup.rs
// POST /api/setup { "label": "...", "issuer": "..." } -> { secret, qr_image, otpauth_url }.
// Nothing is stored: the caller must keep `secret` in its own database.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::DEFAULT_LABEL;
use crate::error::OtpError;
use crate::qr::png_data_uri;
use crate::secret::SecretProvisioner;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SetupRequest {
    pub label: Option<String>,
    pub issuer: Option<String>,
}

pub async fn setup(
    State(st): State<Arc<AppState>>,
    Json(body): Json<SetupRequest>,
) -> impl IntoResponse {
    let label = body.label.unwrap_or_else(|| DEFAULT_LABEL.to_string());
    let issuer = body
        .issuer
        .unwrap_or_else(|| st.config.default_issuer.clone());

    let mut provisioner = SecretProvisioner::os().with_params(st.config.params);
    match provisioner.provision(&issuer, &label, st.config.secret_bytes) {
        Ok(issued) => match png_data_uri(&issued.otpauth_url) {
            Ok(qr_image) => {
                tracing::info!(%issuer, "issued new TOTP secret");
                (
                    StatusCode::OK,
                    Json(serde_json::json!({
                        "secret": issued.base32,
                        "qr_image": qr_image,
                        "otpauth_url": issued.otpauth_url
                    })),
                )
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to render QR code");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "failed to build qr" })),
                )
            }
        },
        Err(e @ OtpError::InvalidLabel(_)) => {
            tracing::debug!(error = %e, "rejected setup request");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "secret issuance failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}
