use anyhow::Context as _;
use tracing::info;

use facegen::Capabilities;
use facegen::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("invalid PORT value '{raw}'"))?,
        Err(_) => server::DEFAULT_PORT,
    };

    let caps = Capabilities::probe();
    info!(
        raster = caps.raster,
        encode = caps.encode,
        "dynamic GIF generator starting"
    );

    server::run(caps, port).await
}
