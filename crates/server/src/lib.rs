use std::sync::Arc;

use axum::Router;
use tracing::info;

pub mod cli;
pub mod db;
pub mod extract;
pub mod routes;

mod state;
pub use state::*;

use crate::cli::Cli;

/// Brings the database schema up to date, opens the connection pool and builds
/// the router on top of it. Fails if the database can't be opened
pub fn build_app(args: Cli) -> Result<Router, anyhow::Error> {
    // Run the migrations synchronously before creating the pool
    let ran = db::run_migrations(&args.database_url)?;
    info!("Ran {ran} db migrations");

    let pool = db::create_pool(&args.database_url)?;

    routes::router(AppState {
        pool,
        args: Arc::new(args),
    })
}
