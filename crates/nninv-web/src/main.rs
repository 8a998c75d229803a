//! NN Investigator web server
//!
//! Run with: cargo run -p nninv-web --bin nninv

use std::sync::Arc;

use anyhow::Context;
use nninv_common::Config;
use nninv_db::{Database, PairRepository};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nninv_web::init_tracing();

    info!("Starting NN Investigator...");
    let config = Config::load()?;

    let db = Database::open(&config.database.path)
        .await
        .with_context(|| format!("opening database {}", config.database.path.display()))?;
    db.initialize().await.context("initializing schema")?;
    let stats = db.stats().await?;
    info!(path = %config.database.path.display(), pairs = stats.pairs, evaluated = stats.evaluated, "database ready");

    let store = Arc::new(PairRepository::new(Arc::new(db)));
    let state = nninv_web::state::AppState::from_config(&config, store)?;
    let app = nninv_web::router::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
