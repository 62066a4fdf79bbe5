use std::sync::Arc;

use log::{info, warn};

use landing_relay::config::Config;
use landing_relay::handlers::AppState;
use landing_relay::whatsapp::WhatsAppClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "landing_relay=info");
    }
    pretty_env_logger::init_timed();

    let config = Config::from_env();
    info!("Public dir: {}", config.public_dir.display());
    info!("WhatsApp API: {}", config.api_url);
    if let Err(e) = config.credentials() {
        warn!("{}; consultation requests will be rejected", e);
    }

    let client = WhatsAppClient::new(&config.api_url, config.timeout)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState {
        config,
        sender: Arc::new(client),
    });

    let app = landing_relay::app(state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
