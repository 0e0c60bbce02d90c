use derive_more::Display;

/// A user-originated text message delivered by one webhook notification.
/// Lives only for the duration of the request.
#[derive(Debug, Display, Clone, Default, PartialEq)]
#[display("{sender}: {text:?}")]
pub struct InboundMessage {
    /// Sender's WhatsApp ID (phone number with country code)
    pub sender: String,
    /// Text body, empty when the notification carried none
    pub text: String,
}

/// A reply decided for an [`InboundMessage`], sent once then discarded.
#[derive(Debug, Display, Clone, Default, PartialEq)]
#[display("{recipient}: {text:?}")]
pub struct OutboundReply {
    pub recipient: String,
    pub text: String,
}

impl OutboundReply {
    pub fn new(recipient: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            text: text.into(),
        }
    }
}
