//! # Kapso Webhook Handler
//!
//! Turns a parsed webhook notification into at most one reply and sends it.
//! Failures are logged here and never reach the HTTP layer.

use super::{
    outgoing_schemas::GatewayMessageResponse, responder::ReplyStrategy, schemas::WebhookPayload,
};
use crate::{metric, models::message::OutboundReply, services};

/// Sends a reply through the gateway
///
/// # Returns
///
/// The gateway response, or `None` if the send failed for any reason
pub async fn dispatch_reply(
    reply: &OutboundReply,
    sender: &services::ImplReplySender,
) -> Option<GatewayMessageResponse> {
    logfire::info!(
        "Sending reply to {recipient}: {text}",
        recipient = reply.recipient.clone(),
        text = reply.text.clone()
    );

    match sender.send_reply(reply).await {
        Ok(rsp) => {
            metric::incr_reply_statds("sent");
            Some(rsp)
        }
        Err(e) => {
            metric::incr_reply_statds("failed");
            logfire::error!("Failed to send reply: {error}", error = format!("{e:#}"));
            None
        }
    }
}

/// Main webhook processor
///
/// Extracts the inbound message, asks the strategy for a reply and, if there
/// is one, dispatches it exactly once.
///
/// # Returns
///
/// The gateway response when a reply was sent successfully
pub async fn process_webhook(
    payload: &WebhookPayload,
    strategy: &dyn ReplyStrategy,
    sender: &services::ImplReplySender,
) -> Option<GatewayMessageResponse> {
    let Some(inbound) = payload.inbound_message() else {
        metric::incr_webhook_statds("ignored");
        logfire::info!("Webhook notification without an inbound message, ignoring");
        return None;
    };

    logfire::info!(
        "Message received from {sender}: {text}",
        sender = inbound.sender.clone(),
        text = inbound.text.clone()
    );

    let Some(reply) = strategy.reply_to(&inbound) else {
        metric::incr_webhook_statds("no_reply");
        return None;
    };

    metric::incr_webhook_statds("replied");
    dispatch_reply(&reply, sender).await
}
