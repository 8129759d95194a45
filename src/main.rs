use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travelcost_pricing::config::{Config, PricingStrategy};
use travelcost_pricing::pricing::engine::CostEstimator;
use travelcost_pricing::{pricing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Strategy is fixed for the life of the process. A missing or
    // incompatible model artifact refuses to start; the deployer falls back
    // to PRICING_STRATEGY=formula.
    let estimator = match config.strategy {
        PricingStrategy::Formula => CostEstimator::formula(),
        PricingStrategy::Model => {
            let path = config
                .model_path
                .as_deref()
                .context("model strategy selected without a model path")?;
            CostEstimator::from_artifact(path)
                .context("failed to load trained cost model; set PRICING_STRATEGY=formula to fall back")?
        }
    };
    info!(strategy = estimator.strategy_name(), "pricing strategy selected");

    let state = AppState::new(estimator);

    let app = pricing::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("pricing service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
