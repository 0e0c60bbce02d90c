//! # WhatsApp Relay
//!
//! Webhook service for a Kapso WhatsApp number: receives inbound message
//! notifications, decides on a reply (keyword menu bot or echo bot) and sends
//! it back through the Kapso API.

pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod metric;
pub mod models;
pub mod services;
pub mod webhook;

use envconfig::Envconfig;
use logfire::config::{MetricsOptions, SendToLogfire};
use ntex::web;
use webhook::whatsapp::{client::GatewayClient, responder::ResponderKind};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    let app_config = config::AppConfig::init_from_env()?;
    let credentials = app_config.gateway_credentials()?;
    let responder_kind = app_config.responder_kind()?;

    // Initialize logging and metrics
    let send_to_logfire = match app_config.logfire_token {
        Some(_) => SendToLogfire::Yes,
        None => SendToLogfire::No,
    };
    let mut logfire_config = logfire::configure()
        .install_panic_handler()
        .with_metrics(Some(MetricsOptions::default()))
        .send_to_logfire(send_to_logfire);
    if let Some(token) = &app_config.logfire_token {
        logfire_config = logfire_config.with_token(token);
    }
    let shutdown_handler = logfire_config.finish()?;

    let gateway_client = GatewayClient::new(&credentials, app_config.gateway_timeout())?;

    tracing::info!(
        "Starting relay: env={}, responder={}, endpoint={}, signature_check={}",
        app_config.env,
        responder_kind,
        gateway_client.endpoint(),
        app_config.kapso_webhook_secret.is_some()
    );

    configure_and_run_server(&app_config, gateway_client, responder_kind).await?;

    shutdown_handler.shutdown()?;

    Ok(())
}

/// Creates application state from the provided services
fn create_app_state(
    gateway_client: GatewayClient,
    responder_kind: ResponderKind,
    webhook_secret: Option<String>,
) -> app::AppState {
    app::AppState {
        reply_sender: Box::new(gateway_client),
        reply_strategy: responder_kind.build(),
        webhook_secret,
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(
    app_config: &config::AppConfig,
    gateway_client: GatewayClient,
    responder_kind: ResponderKind,
) -> anyhow::Result<()> {
    let webhook_secret = app_config.kapso_webhook_secret.clone();

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(create_app_state(
                gateway_client.clone(),
                responder_kind,
                webhook_secret.clone(),
            ))
            .configure(webhook::routes::whatsapp)
            .service(app::server::health)
            .default_service(web::route().to(app::server::serve_not_found))
    })
    .bind(app_config.server_addr())?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
