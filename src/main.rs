mod error;
mod handlers;
mod models;
mod prompt;
mod response;
mod server;
mod services;

use anyhow::Result;
use dotenv::dotenv;
use std::env;
use std::sync::Arc;

use handlers::AnalyzeHandler;
use services::{DishAnalysis, OpenAiVisionService};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Load environment variables
    dotenv().ok();

    log::info!("🚀 Starting Dish Analysis API...");

    let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    // A missing key is reported per request as a configuration error, so
    // startup keeps going instead of crashing the deployment.
    let analyzer = match env::var("OPENAI_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            log::info!("✅ OpenAI vision service initialized with model: {}", model);
            Some(Arc::new(OpenAiVisionService::new(api_key, model)) as Arc<dyn DishAnalysis>)
        }
        _ => {
            log::warn!("⚠️ OPENAI_API_KEY not set, analysis requests will be rejected");
            None
        }
    };

    let handler = Arc::new(AnalyzeHandler::new(analyzer));
    log::info!("✅ Analyze handler initialized");

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = server::create_router(handler);

    log::info!("🌐 HTTP server starting on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
