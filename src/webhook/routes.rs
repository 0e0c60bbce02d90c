use ntex::web;

/// Configures webhook routes for the WhatsApp gateway.
///
/// These routes are public endpoints that don't require authentication;
/// authenticity is checked through the optional payload signature.
///
/// # Routes
/// - `POST /webhook` - Kapso inbound message receiver
pub fn whatsapp(cfg: &mut web::ServiceConfig) {
    cfg.service(super::whatsapp::receive);
}
