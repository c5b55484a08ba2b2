use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::aggregator::DashboardAggregator;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<DashboardAggregator>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(aggregator: DashboardAggregator, metrics: PrometheusHandle) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            metrics,
        }
    }
}
