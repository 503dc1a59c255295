mod bootstrap;
mod di;

use clap::Parser;
use rdns_router_application::ControlStatePort;
use rdns_router_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "rdns-router")]
#[command(version)]
#[command(about = "Routing and selection core of a recursive DNS proxy")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Overrides `[server].bind_address`.
    #[arg(short = 'b', long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let app = di::build(&config).await?;

    for line in app.core.describe() {
        tracing::info!("upstream group: {line}");
    }

    // TODO: start the DNS listener once the wire-format codec lands and hand
    // incoming requests to `core.racer`.
    let core = app.core;
    tokio::spawn(async move {
        core.control.status().await;
        tracing::info!("routing core ready, no DNS front-end wired up yet");
    });

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(addr = %config.server.bind_address, "control plane listening");

    let router = rdns_router_api::build_router(app.state);
    axum::serve(listener, router).await?;

    Ok(())
}
