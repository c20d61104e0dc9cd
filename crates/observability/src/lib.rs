use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    itineraries_generated_total: AtomicU64,
    planner_errors_total: AtomicU64,
    days_planned_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub itineraries_generated_total: u64,
    pub planner_errors_total: u64,
    pub days_planned_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("seethio_requests_total").increment(1);
    }

    pub fn record_itinerary(&self, days: u32) {
        self.itineraries_generated_total
            .fetch_add(1, Ordering::Relaxed);
        self.days_planned_total
            .fetch_add(u64::from(days), Ordering::Relaxed);
        metrics::counter!("seethio_itineraries_generated_total").increment(1);
        metrics::counter!("seethio_days_planned_total").increment(u64::from(days));
    }

    pub fn inc_planner_error(&self, code: &'static str) {
        self.planner_errors_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("seethio_planner_errors_total", "code" => code).increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        metrics::histogram!("seethio_plan_latency_seconds").record(duration.as_secs_f64());
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            itineraries_generated_total: self.itineraries_generated_total.load(Ordering::Relaxed),
            planner_errors_total: self.planner_errors_total.load(Ordering::Relaxed),
            days_planned_total: self.days_planned_total.load(Ordering::Relaxed),
            avg_latency_micros: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
        }
    }
}

/// Installs the JSON subscriber once per process; later calls are no-ops.
///
/// Logs go to stderr so command output on stdout stays parseable.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(service_name)));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::info!(service = service_name, "tracing initialized");
    });
}

fn default_filter(service_name: &str) -> String {
    format!(
        "{service_name}=info,seethio_observability=info,seethio_service=info,seethio_api=info"
    )
}
