use std::time::Instant;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder};
use service::errors::ServiceError;

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "table_service_operations_total",
        "Resource operations by outcome",
        &["resource", "operation", "outcome"]
    )
    .expect("register operations_total")
});

pub static OPERATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "table_service_operation_duration_seconds",
        "Service call duration in seconds",
        &["resource", "operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .expect("register operation_duration")
});

pub fn outcome<T>(res: &Result<T, ServiceError>) -> &'static str {
    match res {
        Ok(_) => "ok",
        Err(ServiceError::NotFound(_)) => "not_found",
        Err(ServiceError::Conflict(_)) => "conflict",
        Err(ServiceError::Validation(_)) => "invalid",
        Err(ServiceError::Db(_)) => "error",
    }
}

/// Record one service call.
pub fn observe<T>(resource: &str, operation: &str, started: Instant, res: &Result<T, ServiceError>) {
    OPERATIONS_TOTAL.with_label_values(&[resource, operation, outcome(res)]).inc();
    OPERATION_DURATION
        .with_label_values(&[resource, operation])
        .observe(started.elapsed().as_secs_f64());
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(outcome::<()>(&Ok(())), "ok");
        assert_eq!(outcome::<()>(&Err(ServiceError::NotFound("x".into()))), "not_found");
        assert_eq!(outcome::<()>(&Err(ServiceError::Conflict("x".into()))), "conflict");
        assert_eq!(outcome::<()>(&Err(ServiceError::Db("x".into()))), "error");
    }

    #[test]
    fn observed_calls_are_exported() {
        observe::<()>("customers", "get", Instant::now(), &Err(ServiceError::NotFound("x".into())));
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("table_service_operations_total"));
        assert!(body.contains(r#"outcome="not_found""#));
    }
}
