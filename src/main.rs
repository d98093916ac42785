use anyhow::Result;
use clap::Parser;
use linkpulse::config::{self, StoreBackend};
use linkpulse::server;
use tracing_subscriber::EnvFilter;

/// URL shortener with top-domain metrics.
#[derive(Parser)]
#[command(name = "linkpulse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,

    /// Store backend: memory or postgres (overrides STORE_BACKEND)
    #[arg(long)]
    backend: Option<StoreBackend>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_from_env(cli.listen, cli.backend)?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("Fatal: {:#}", e);
        return Err(e);
    }

    Ok(())
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
