use crate::{
    models::message::OutboundReply,
    webhook::whatsapp::outgoing_schemas::GatewayMessageResponse,
};
use async_trait::async_trait;

/// Sends replies through the messaging gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySender {
    /// Sends one text reply, without retrying.
    async fn send_reply(&self, reply: &OutboundReply) -> anyhow::Result<GatewayMessageResponse>;
}

pub type ImplReplySender = Box<dyn ReplySender>;
