//! Kapso webhook endpoint handler
//!
//! The gateway expects a `200` for every notification it delivers, whatever
//! happens while replying. Parsing, signature and send failures are logged and
//! the notification is acknowledged anyway.

use super::{handler, schemas, security};
use crate::{app::AppState, consts, metric};
use ntex::{util::Bytes, web};

/// Acknowledgment returned for every notification
fn acknowledge() -> web::HttpResponse {
    web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "success"
    }))
}

/// Checks the payload signature when a webhook secret is configured
fn is_authentic(req: &web::HttpRequest, body: &[u8], secret: Option<&str>) -> bool {
    let Some(secret) = secret else {
        return true;
    };

    match req
        .headers()
        .get(consts::WEBHOOK_SIGNATURE_HEADER)
        .map(|value| value.to_str())
    {
        Some(Ok(signature)) => security::verify_signature(signature, body, secret),
        Some(Err(_)) => {
            logfire::warn!("Invalid X-Webhook-Signature header: not valid UTF-8");
            false
        }
        None => {
            logfire::warn!("Missing X-Webhook-Signature header");
            false
        }
    }
}

/// Webhook receiver endpoint (POST)
///
/// Receives inbound message notifications from Kapso, decides on a reply with
/// the configured strategy and sends it before answering.
///
/// # Returns
/// - 200 `{"status":"success"}`, always
#[web::post("/webhook")]
pub async fn receive(
    req: web::HttpRequest,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let _span = logfire::span!("kapso_webhook").entered();

    if !is_authentic(&req, &body, app_state.webhook_secret.as_deref()) {
        metric::incr_webhook_statds("rejected");
        return Ok(acknowledge());
    }

    let payload: schemas::WebhookPayload = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(e) => {
            metric::incr_webhook_statds("ignored");
            logfire::warn!(
                "Failed to parse webhook payload: {error}",
                error = e.to_string()
            );
            return Ok(acknowledge());
        }
    };

    handler::process_webhook(
        &payload,
        app_state.reply_strategy.as_ref(),
        &app_state.reply_sender,
    )
    .await;

    Ok(acknowledge())
}
