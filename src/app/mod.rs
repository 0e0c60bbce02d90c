pub mod server;

use crate::{services, webhook::whatsapp::responder::ImplReplyStrategy};

/// Per-worker state shared by every request. Immutable after startup.
pub struct AppState {
    pub reply_sender: services::ImplReplySender,
    pub reply_strategy: ImplReplyStrategy,
    /// 🔒 SENSITIVE: enables webhook signature verification when set
    pub webhook_secret: Option<String>,
}
