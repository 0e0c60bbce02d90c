//! Kapso WhatsApp webhook integration module
//!
//! ## Submodules
//!
//! - [`routes`] - HTTP endpoint receiving inbound message notifications
//! - [`handler`] - Turns a notification into at most one reply and sends it
//! - [`responder`] - Reply strategies (keyword bot, echo bot)
//! - [`schemas`] / [`outgoing_schemas`] - Incoming and outgoing payloads
//! - [`client`] - Kapso API client for sending messages
//! - [`security`] - Webhook signature verification

pub mod client;
pub mod handler;
pub mod outgoing_schemas;
pub mod responder;
pub mod routes;
pub mod schemas;
pub mod security;

pub use routes::receive;
