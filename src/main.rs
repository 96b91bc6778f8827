use investor_desk::api::{self, AppState};
use investor_desk::PortalConfig;
use log::{error, info};

#[tokio::main]
async fn main() {
    // Load `.env` before the logger so `RUST_LOG` can come from it
    dotenvy::dotenv().ok();

    // Initialize the logger
    env_logger::init();

    let config = PortalConfig::from_env();
    let addr = config.bind_address();

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            error!(kind = e.kind(); "Failed to initialize portal: {}", e);
            std::process::exit(1);
        }
    };

    let app = api::router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(kind = "io_error", addr:% = addr; "Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!(addr:% = addr; "Starting server on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!(kind = "io_error"; "Server error: {}", e);
        std::process::exit(1);
    }
}
