//! Rangoli Studio · design catalog, tutorials and generator backend
//!
//! - Axum HTTP API for the tutorial and design catalogs
//! - WebSocket view sessions (tutorial step-player, gallery filter, generation)
//! - Mock design generator (fixed delay, random sample)
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT               : u16 (default 3000)
//!   STUDIO_CONFIG_PATH : path to TOML config (generator delay, extra tutorials/designs, prompts)
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"

mod telemetry;
mod util;
mod illustration;
mod domain;
mod config;
mod seeds;
mod catalog;
mod player;
mod generator;
mod session;
mod state;
mod protocol;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared read-only state: catalog, generator, prompt suggestions.
  let state = Arc::new(AppState::new());

  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "rangoli_studio", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
