//! Page-view reporting
//!
//! Every location change is reported as one page view carrying the path and
//! query string. The sink is pluggable; the default one only logs.

use tracing::info;

pub trait PageTracker {
    fn page_view(&mut self, page_path: &str);
}

/// Writes page views to the log under the configured measurement id
#[derive(Debug, Clone)]
pub struct LogPageTracker {
    measurement_id: String,
}

impl LogPageTracker {
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
        }
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }
}

impl PageTracker for LogPageTracker {
    fn page_view(&mut self, page_path: &str) {
        info!(measurement_id = %self.measurement_id, page_path, "page view");
    }
}

/// Keeps every reported path, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct RecordingPageTracker {
    pub views: Vec<String>,
}

impl PageTracker for RecordingPageTracker {
    fn page_view(&mut self, page_path: &str) {
        self.views.push(page_path.to_string());
    }
}
