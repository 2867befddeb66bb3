// Voice webhook handler

use axum::{body::Bytes, extract::State, http::header::CONTENT_TYPE, response::IntoResponse};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::twiml::VoiceResponse;
use crate::utils::form;

/// Spoken line returned to the telephony platform for every call event.
const GREETING: &str = "Hello from your Autocall replica!";

/// Answers a call-event notification with a fixed spoken response.
/// The inbound payload is decoded leniently but never acted on, so the
/// output is byte-identical regardless of input.
#[instrument(skip(_state, body))]
pub async fn call_handler(
    State(_state): State<AppState>,
    body: Bytes, // Forces body reading and triggers size limits
) -> impl IntoResponse {
    let event = form::parse(&body);
    info!(params = event.len(), "Call event received, responding with fixed voice document");

    let twiml: String = VoiceResponse::new().say(GREETING).to_xml();

    ([(CONTENT_TYPE, "text/xml")], twiml)
}
