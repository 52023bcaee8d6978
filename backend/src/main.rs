use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;

use backend::routes;
use generation_client::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Parser, Debug)]
struct Args {
    #[clap(short, long, default_value = "127.0.0.1:8000")]
    address: String,
    #[clap(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[clap(long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!("Starting backend with model {}", &args.model);

    let client = GeminiClient::new(GeminiConfig {
        api_key: args.api_key,
        base_url: args.base_url,
        model: args.model,
    });
    let app = routes::app(Arc::new(client));

    tracing::info!("Listening on {}", &args.address);
    let listener = TcpListener::bind(&args.address).await?;

    axum::serve(listener, app).await?;
    tracing::info!("Server shutdown");

    Ok(())
}
