use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use log::info;
use uuid::Uuid;

use crate::config::Config;
use crate::error::RelayError;
use crate::lead::Lead;
use crate::portfolio;
use crate::relay::{self, Outcome};
use crate::types::{HealthResponse, SendRequest, SendResponse};
use crate::whatsapp::MessageSender;

const LANDING_PAGE: &str = include_str!("../assets/index.html");

pub struct AppState {
    pub config: Config,
    pub sender: Arc<dyn MessageSender>,
}

pub async fn send_consultation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> Result<impl IntoResponse, RelayError> {
    let Json(req) = payload?;
    let lead = Lead::from_request(req, &state.config.country_code)?;
    let creds = state.config.credentials()?;

    let id = Uuid::new_v4();
    info!(
        "[{}] consultation request: {} ({}, {})",
        id, lead.name, lead.property_type, lead.location
    );

    let report = relay::relay(id, &lead, &state.config, &creds, state.sender.as_ref()).await;
    let outcome = report.outcome();
    let (status, message) = match outcome {
        Outcome::Delivered | Outcome::Partial => (
            StatusCode::OK,
            "Consultation request submitted successfully",
        ),
        Outcome::Failed => (
            StatusCode::BAD_GATEWAY,
            "Failed to send WhatsApp messages",
        ),
    };

    Ok((
        status,
        Json(SendResponse {
            success: outcome != Outcome::Failed,
            submission_id: id,
            message: message.to_string(),
            outcome,
            client_message_sent: report.client == relay::DeliveryStatus::Sent,
            owner_notified: report.owner == relay::DeliveryStatus::Sent,
            client_message: report.client,
            owner_message: report.owner,
            development_mode: report.development_mode,
            note: report.note(),
        }),
    ))
}

pub async fn get_portfolio() -> impl IntoResponse {
    Json(portfolio::portfolio())
}

pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = if state.config.credentials().is_ok() {
        "ok"
    } else {
        "unconfigured"
    };
    Json(HealthResponse {
        status: status.to_string(),
    })
}
