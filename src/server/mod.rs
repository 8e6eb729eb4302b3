//! # HTTP Endpoint for Label Printing
//!
//! Accepts label content over HTTP and prints it with the configured
//! template and printer. Each request is one print job.
//!
//! ## Usage
//!
//! ```bash
//! zebrella serve --listen 0.0.0.0:8080 --address 10.0.0.9 --model ZEBRA_GK420T
//! curl -d '{"fullName": "Ada Lovelace", "region": "East"}' localhost:8080/print
//! ```
//!
//! ## Routes
//!
//! | Method | Path         | Body           | Response                      |
//! |--------|--------------|----------------|-------------------------------|
//! | POST   | `/print`     | content object | print outcome (JSON)          |
//! | POST   | `/preview`   | content object | label command text            |
//! | GET    | `/templates` |                | template names and defaults   |

mod handlers;
mod state;

pub use state::AppState;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{Result, ZebrellaError};
use crate::print::PrintService;

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/print", post(handlers::labels::print))
        .route("/preview", post(handlers::labels::preview))
        .route("/templates", get(handlers::templates::list))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Start the HTTP endpoint and serve until the process exits.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use zebrella::config::{Config, ServerConfig};
/// use zebrella::print::PrintService;
/// use zebrella::server::serve;
/// use zebrella::template::TemplateCatalog;
/// use zebrella::transport::TcpTransport;
///
/// # async fn example() -> zebrella::Result<()> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".parse().unwrap(),
///     config: Config::default(),
/// };
/// let service = PrintService::new(Arc::new(TemplateCatalog::builtin()), Arc::new(TcpTransport));
///
/// serve(config, service).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig, service: PrintService) -> Result<()> {
    let listen_addr = config.listen_addr;
    info!(
        %listen_addr,
        printer = %config.config.printer.name,
        address = %config.config.printer.address,
        template = %config.config.template,
        "Zebrella HTTP endpoint starting"
    );

    let state = Arc::new(AppState::new(config.config, service));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .map_err(|e| ZebrellaError::Server(format!("Failed to bind to {}: {}", listen_addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ZebrellaError::Server(e.to_string()))?;

    Ok(())
}
