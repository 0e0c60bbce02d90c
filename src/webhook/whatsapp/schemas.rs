//! # Kapso Webhook Schemas
//!
//! Data structures for the JSON payload Kapso POSTs when a WhatsApp message
//! arrives. Only the sender and the text body are modeled; every other field
//! is ignored whatever its type, and a notification without a usable message
//! is ignored rather than rejected.

use crate::models::message::InboundMessage;
use serde::Deserialize;

/// Root webhook payload from Kapso
#[derive(Debug, Default, Deserialize)]
pub struct WebhookPayload {
    /// The inbound message, absent for other notification kinds
    #[serde(default)]
    pub message: Option<Message>,
}

/// Message object
#[derive(Debug, Default, Deserialize)]
pub struct Message {
    /// Sender's WhatsApp ID (phone number)
    #[serde(default)]
    pub from: Option<String>,
    /// Text message content (if type is "text")
    #[serde(default)]
    pub text: Option<TextMessage>,
}

/// Text message content
#[derive(Debug, Default, Deserialize)]
pub struct TextMessage {
    /// The text body of the message
    #[serde(default)]
    pub body: String,
}

impl Message {
    /// Sender ID exactly as received, `None` when missing or blank
    pub fn sender(&self) -> Option<&str> {
        self.from
            .as_deref()
            .filter(|from| !from.trim().is_empty())
    }

    /// Text body, empty when the message carries no text
    pub fn text_body(&self) -> &str {
        self.text.as_ref().map_or("", |text| text.body.as_str())
    }
}

impl WebhookPayload {
    /// Extracts the inbound message, if the notification carries one with a sender
    pub fn inbound_message(&self) -> Option<InboundMessage> {
        let message = self.message.as_ref()?;

        Some(InboundMessage {
            sender: message.sender()?.to_string(),
            text: message.text_body().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> WebhookPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_message_is_extracted() {
        let payload = parse(
            r#"{"message":{"id":"wamid.1","from":"905551112233","type":"text","timestamp":"1712345678","text":{"body":"Merhaba"}}}"#,
        );

        assert_eq!(
            payload.inbound_message(),
            Some(InboundMessage {
                sender: "905551112233".into(),
                text: "Merhaba".into(),
            })
        );
    }

    #[test]
    fn test_missing_text_defaults_to_empty() {
        let payload = parse(r#"{"message":{"from":"905551112233","type":"image"}}"#);

        let inbound = payload.inbound_message().unwrap();
        assert_eq!(inbound.text, "");

        let payload = parse(r#"{"message":{"from":"905551112233","text":{}}}"#);
        assert_eq!(payload.inbound_message().unwrap().text, "");
    }

    #[test]
    fn test_payload_without_message_is_ignored() {
        let payload = parse(r#"{"event":"whatsapp.message.delivered","data":{"id":"x"}}"#);

        assert!(payload.message.is_none());
        assert!(payload.inbound_message().is_none());
    }

    #[test]
    fn test_blank_sender_is_ignored() {
        assert!(parse(r#"{"message":{"text":{"body":"selam"}}}"#)
            .inbound_message()
            .is_none());
        assert!(parse(r#"{"message":{"from":"  ","text":{"body":"selam"}}}"#)
            .inbound_message()
            .is_none());
    }

    #[test]
    fn test_unread_fields_of_any_type_are_ignored() {
        let payload = parse(
            r#"{"message":{"id":42,"from":"905551112233","timestamp":1712345678,"type":{"kind":"text"},"context":null,"text":{"body":"merhaba","preview_url":false}},"conversation":[1,2]}"#,
        );

        assert_eq!(
            payload.inbound_message(),
            Some(InboundMessage {
                sender: "905551112233".into(),
                text: "merhaba".into(),
            })
        );
    }

    #[test]
    fn test_sender_is_kept_verbatim() {
        let payload = parse(r#"{"message":{"from":" +905551112233 ","text":{"body":"test"}}}"#);

        assert_eq!(payload.inbound_message().unwrap().sender, " +905551112233 ");
    }

    #[test]
    fn test_non_object_message_fails_to_parse() {
        assert!(serde_json::from_str::<WebhookPayload>(r#"{"message":"hello"}"#).is_err());
    }
}
