use anyhow::Context;
use clap::Parser;
use hello_backend::core::server;
use hello_backend::utils::logger;
use hello_backend::ServerArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    // 初始化日誌
    logger::init_server_logger(args.verbose, args.json_logs);

    tracing::info!("Starting hello-server");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    server::serve(&config)
        .await
        .with_context(|| format!("hello-server failed on {}:{}", config.host, config.port))?;

    Ok(())
}
