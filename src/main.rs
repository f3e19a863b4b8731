use adelphi_results::utils::logger;
use adelphi_results::CliConfig;
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting adelphi-results API");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    let server_config = match config.server_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received");
    };

    if let Err(e) = adelphi_results::serve(&server_config, shutdown).await {
        tracing::error!("❌ Server failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(if e.is_config_error() { 2 } else { 1 });
    }
}
