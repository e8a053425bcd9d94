mod api_error;
mod cleanup_task;
mod game_service;
mod server_config;
mod store;
mod web_server;

use std::time::Duration;

use clap::Parser;

use common::config::ConfigManager;
use common::{log, logger};

use cleanup_task::CleanupTask;
use game_service::GameService;
use server_config::ServerConfig;
use store::GameStore;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "puzzle2048_server")]
struct Args {
    /// Path to the YAML server config; defaults apply when the file is missing.
    #[arg(long, default_value = "server_config.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    let store = GameStore::new();
    let game_service = GameService::new(store.clone(), config.clone());

    let cleanup_task = CleanupTask::new(
        store,
        Duration::from_secs(config.cleanup_check_interval_secs),
        Duration::from_secs(config.inactivity_timeout_secs),
    );
    tokio::spawn(async move {
        cleanup_task.run().await;
    });

    log!("Starting 2048 puzzle server");
    run_web_server(game_service, &config.bind_address).await;

    log!("Server shut down gracefully");
    Ok(())
}
