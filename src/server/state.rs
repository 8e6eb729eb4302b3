//! Server state.

use crate::config::Config;
use crate::print::PrintService;

/// Application state shared across handlers.
#[derive(Debug)]
pub struct AppState {
    /// Printer, template and media every request prints with
    pub config: Config,
    pub service: PrintService,
}

impl AppState {
    pub fn new(config: Config, service: PrintService) -> Self {
        Self { config, service }
    }
}
