use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use claimdesk::web;

#[derive(Parser, Debug)]
#[command(
    name = "claimdesk",
    about = "Back-office tools for claims teams: resolution targets and report merging"
)]
struct Args {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();
    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "claimdesk listening");
    axum::serve(listener, web::router()).await?;

    Ok(())
}
