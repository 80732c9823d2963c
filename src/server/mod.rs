pub mod handlers;
pub mod types;

use crate::{Result, config::Config, flow::Simplifier, llm::OpenAiGenerator};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/simplify", post(handlers::simplify))
        .route("/example", post(handlers::example))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Each flow owns its generator
    let simplify_flow = Arc::new(Simplifier::new(Box::new(OpenAiGenerator::new(
        config.llm.clone(),
    ))));
    let example_flow = Arc::new(Simplifier::example(Box::new(OpenAiGenerator::new(
        config.llm.clone(),
    ))));

    let app_state = handlers::AppState {
        simplify_flow,
        example_flow,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
