use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, register_int_gauge, Encoder, IntCounterVec, IntGauge, TextEncoder};

// Prometheus metrics (default registry)
pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "crud_store_operations_total",
        "Record store operations by kind and outcome",
        &["op", "outcome"]
    )
    .expect("register store_operations_total")
});

/// Set from the serving store's `len()` right before each scrape.
pub static STORE_ITEMS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("crud_store_items", "Records held by the serving store")
        .expect("register store_items")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Create,
    Read,
    Update,
    Delete,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Create => "create",
            Op::Read => "read",
            Op::Update => "update",
            Op::Delete => "delete",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Invalid,
    NotFound,
    Conflict,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Invalid => "invalid",
            Outcome::NotFound => "not_found",
            Outcome::Conflict => "conflict",
        }
    }
}

pub fn record(op: Op, outcome: Outcome) {
    STORE_OPERATIONS_TOTAL
        .with_label_values(&[op.as_str(), outcome.as_str()])
        .inc();
}

pub fn observe_store_len(len: usize) {
    STORE_ITEMS.set(i64::try_from(len).unwrap_or(i64::MAX));
}

#[cfg(test)]
pub fn operation_count(op: Op, outcome: Outcome) -> u64 {
    STORE_OPERATIONS_TOTAL
        .with_label_values(&[op.as_str(), outcome.as_str()])
        .get()
}

pub fn encode_metrics() -> (StatusCode, String) {
    // export the gauge even if nothing has observed a store yet
    Lazy::force(&STORE_ITEMS);
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
