//! Wallet Service entry point
//!
//! ```text
//! --env <name>   config/<name>.yaml (default: dev)
//! --port <n>     override gateway.port
//! ```

use wallet_service::config::AppConfig;
use wallet_service::gateway::{self, state::AppState};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = wallet_service::logging::init_logging(&app_config);

    tracing::info!(
        backend = ?app_config.storage.backend,
        "Starting Wallet Service in {} mode",
        env
    );

    let state = AppState::from_config(&app_config).await?;
    gateway::run_server(&app_config.gateway, state).await
}
