//! # Kapso Outgoing Message Schemas
//!
//! Payloads sent to the Kapso send API and the response it returns.

use crate::models::message::OutboundReply;
use serde::{Deserialize, Serialize};

/// Text message to send through Kapso
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OutgoingTextMessage {
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type, always "text"
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Text content
    pub text: OutgoingTextContent,
}

impl OutgoingTextMessage {
    /// Creates a new text message
    pub fn new(to: String, body: String) -> Self {
        Self {
            to,
            msg_type: "text".to_string(),
            text: OutgoingTextContent { body },
        }
    }
}

impl From<&OutboundReply> for OutgoingTextMessage {
    fn from(reply: &OutboundReply) -> Self {
        Self::new(reply.recipient.clone(), reply.text.clone())
    }
}

/// Text content for outgoing messages
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OutgoingTextContent {
    /// Message body text
    pub body: String,
}

/// Response from Kapso when sending a message.
///
/// Kapso proxies the WhatsApp Cloud API response; every field is defaulted so
/// any JSON object is accepted.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayMessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_product: Option<String>,
    /// Array of contacts (recipients)
    #[serde(default)]
    pub contacts: Vec<GatewayContact>,
    /// Array of messages sent
    #[serde(default)]
    pub messages: Vec<GatewayMessageStatus>,
}

/// Contact information in response
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayContact {
    /// WhatsApp ID of the contact
    #[serde(default)]
    pub wa_id: String,
    /// Input phone number
    #[serde(default)]
    pub input: String,
}

/// Message status in response
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayMessageStatus {
    /// Message ID
    pub id: String,
}

impl GatewayMessageResponse {
    /// ID of the first message accepted by the gateway
    pub fn message_id(&self) -> Option<&str> {
        self.messages.first().map(|msg| msg.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_envelope() {
        let message = OutgoingTextMessage::from(&OutboundReply::new("905551112233", "test"));

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"to": "905551112233", "type": "text", "text": {"body": "test"}})
        );
    }

    #[test]
    fn test_response_accepts_partial_objects() {
        let rsp: GatewayMessageResponse = serde_json::from_value(json!({
            "messaging_product": "whatsapp",
            "contacts": [{"input": "905551112233", "wa_id": "905551112233"}],
            "messages": [{"id": "wamid.HBgM"}]
        }))
        .unwrap();
        assert_eq!(rsp.message_id(), Some("wamid.HBgM"));

        let rsp: GatewayMessageResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(rsp, GatewayMessageResponse::default());
        assert!(rsp.message_id().is_none());
    }

    #[test]
    fn test_response_rejects_non_objects() {
        assert!(serde_json::from_value::<GatewayMessageResponse>(json!("ok")).is_err());
    }
}
