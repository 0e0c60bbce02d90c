//! Webhook handlers for external integrations
//!
//! ## Modules
//!
//! - [`whatsapp`] - Kapso WhatsApp webhook receiver, reply strategies and API client

pub mod routes;
pub mod whatsapp;
