//! Request counters exposed at `GET /metrics`.

use math_operations::Operation;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Per-operation counters
#[derive(Default)]
pub struct OperationCounters {
    pub calls: AtomicU64,
    pub errors: AtomicU64,
}

/// API Gateway metrics
#[derive(Default)]
pub struct GatewayMetrics {
    // Request counters
    pub requests_total: AtomicU64,
    pub requests_success: AtomicU64,
    pub requests_error: AtomicU64,

    // Indexed like `Operation::ALL`
    operations: [OperationCounters; Operation::ALL.len()],

    // Panics turned into 500s
    pub panics_caught: AtomicU64,

    // Latency tracking (simplified - in production use histograms)
    pub total_latency_ms: AtomicU64,
    pub request_count_for_latency: AtomicU64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request
    pub fn record_request(&self, operation: Option<Operation>, success: bool, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        if success {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        }

        if let Some(counters) = operation.and_then(|op| self.counters(op)) {
            counters.calls.fetch_add(1, Ordering::Relaxed);
            if !success {
                counters.errors.fetch_add(1, Ordering::Relaxed);
            }
        }

        self.total_latency_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.request_count_for_latency
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a handler panic
    pub fn record_panic(&self) {
        self.panics_caught.fetch_add(1, Ordering::Relaxed);
    }

    fn counters(&self, operation: Operation) -> Option<&OperationCounters> {
        let idx = Operation::ALL.iter().position(|op| *op == operation)?;
        self.operations.get(idx)
    }

    /// Calls recorded for one operation
    pub fn operation_calls(&self, operation: Operation) -> u64 {
        self.counters(operation)
            .map(|c| c.calls.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Get average latency in ms
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.request_count_for_latency.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Export metrics as JSON
    pub fn to_json(&self) -> serde_json::Value {
        let operations: serde_json::Map<String, serde_json::Value> = Operation::ALL
            .iter()
            .zip(self.operations.iter())
            .map(|(op, c)| {
                (
                    op.as_str().to_string(),
                    serde_json::json!({
                        "calls": c.calls.load(Ordering::Relaxed),
                        "errors": c.errors.load(Ordering::Relaxed),
                    }),
                )
            })
            .collect();

        serde_json::json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "success": self.requests_success.load(Ordering::Relaxed),
                "error": self.requests_error.load(Ordering::Relaxed),
                "panics": self.panics_caught.load(Ordering::Relaxed),
            },
            "operations": operations,
            "latency": {
                "average_ms": self.average_latency_ms(),
            }
        })
    }
}

/// Request timing helper
pub struct RequestTimer {
    start: Instant,
    metrics: Arc<GatewayMetrics>,
}

impl RequestTimer {
    pub fn new(metrics: Arc<GatewayMetrics>) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn finish(self, operation: Option<Operation>, success: bool) {
        let latency_ms = self.start.elapsed().as_millis() as u64;
        self.metrics.record_request(operation, success, latency_ms);
    }
}
