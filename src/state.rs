use std::sync::Arc;

use crate::logfile::LogFile;

#[derive(Clone)]
pub struct AppState {
    pub log: Arc<LogFile>,
}

impl AppState {
    pub fn new(log: LogFile) -> Self {
        Self { log: Arc::new(log) }
    }
}
