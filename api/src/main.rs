mod application;
mod args;

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server::{router, state};
use crate::application::scan::run_scan;
use crate::args::{Args, Command, LogArgs};

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log);

    match args.command.clone() {
        Some(Command::Scan(scan)) => run_scan(args, scan).await,
        Some(Command::Serve) | None => {
            let addr = format!("{}:{}", args.server.host, args.server.port);
            let state = state(Arc::new(args))?;
            let router = router(state)?;

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("ProductScan API listening on {}", listener.local_addr()?);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            Ok(())
        }
    }
}
