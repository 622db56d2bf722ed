use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::VentilationGateway;
use gateway_server::{api, state::AppState};
use infrastructure::{RtuTransport, SerialConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Serial device of the ventilation unit, e.g. /dev/ttyUSB0
    #[arg(long, short = 'd')]
    device: String,

    /// Modbus slave ID of the unit
    #[arg(long, short = 's', default_value = "1")]
    slave_id: u8,

    /// Address to listen on (HTTP)
    #[arg(long, default_value = "0.0.0.0")]
    listen_address: String,

    /// Port to listen on (HTTP)
    #[arg(long, short = 'p', default_value = "8080")]
    http_port: u16,

    /// Use verbose logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(device = %args.device, slave_id = %args.slave_id, "Opening serial connection");
    let config = SerialConfig::new(&args.device).with_slave_id(args.slave_id);
    let transport = RtuTransport::open(&config)?;

    let gateway = VentilationGateway::new(Box::new(transport));
    let state = Arc::new(AppState::new(gateway));

    let app = api::create_router(state);
    let addr = format!("{}:{}", args.listen_address, args.http_port);
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
