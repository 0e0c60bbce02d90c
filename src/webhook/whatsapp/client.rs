//! # Kapso API Client
//!
//! This module provides a client for sending WhatsApp messages through the
//! Kapso API. It handles API-key authentication and text message sending.

use super::outgoing_schemas::{GatewayMessageResponse, OutgoingTextMessage};
use crate::{config::GatewayCredentials, consts, models::message::OutboundReply, services};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Kapso API client for sending messages
#[derive(Clone)]
pub struct GatewayClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Kapso endpoint for sending messages
    endpoint: String,
    /// 🔒 SENSITIVE: API key
    api_key: String,
}

impl GatewayClient {
    /// Creates a new Kapso client from immutable credentials
    pub fn new(credentials: &GatewayCredentials, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: credentials.send_msg_endpoint(),
            api_key: credentials.api_key.clone(),
        })
    }

    /// Endpoint messages are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a text message
    ///
    /// # Arguments
    /// * `to` - Recipient's WhatsApp ID (phone number with country code)
    /// * `body` - Message text
    pub async fn send_text_message(
        &self,
        to: String,
        body: String,
    ) -> Result<GatewayMessageResponse> {
        let message = OutgoingTextMessage::new(to, body);
        self.send_message(&message).await
    }

    /// Internal method to send any message type to the Kapso API
    async fn send_message<T: serde::Serialize>(
        &self,
        message: &T,
    ) -> Result<GatewayMessageResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(consts::API_KEY_HEADER, &self.api_key)
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .context("Failed to send request to Kapso API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Kapso API response body")?;

        logfire::info!(
            "Kapso API responded {status}: {body}",
            status = status.to_string(),
            body = body.clone()
        );

        if !status.is_success() {
            anyhow::bail!("Kapso API returned error status {}: {}", status, body);
        }

        serde_json::from_str(&body).context("Failed to parse Kapso API response")
    }
}

#[async_trait]
impl services::ReplySender for GatewayClient {
    async fn send_reply(&self, reply: &OutboundReply) -> Result<GatewayMessageResponse> {
        self.send_message(&OutgoingTextMessage::from(reply))
            .await
            .with_context(|| format!("Failed to send reply to {}", reply.recipient))
    }
}
