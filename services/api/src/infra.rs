use dreamhome::loans::clean_numeric_input;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, String> {
    clean_numeric_input(raw).map_err(|err| err.to_string())
}
