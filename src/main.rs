use shortlink::config::{self, Config};
use shortlink::server;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; real environment variables take precedence.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);

    config.print_summary();

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level; `LOG_FORMAT=json` switches to
/// structured JSON output for log aggregation.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
