use anyhow::Result;
use clap::Parser;
use server::{build_app, Templates};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Path to the search index artifact (JSON)
    #[arg(long, default_value = "./search.json")]
    index: PathBuf,
    /// Optional path to a page templates file (JSON)
    #[arg(long)]
    templates: Option<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let templates = match &args.templates {
        Some(path) => Templates::from_file(path)?,
        None => Templates::default(),
    };
    let app = build_app(args.index, templates);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
