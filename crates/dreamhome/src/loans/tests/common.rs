use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::loans::{loan_router, LoanInput, LoanService};

pub(super) const TOLERANCE: f64 = 1e-6;

pub(super) fn reference_loan() -> LoanInput {
    LoanInput::new(1_000_000.0, 8.5, 20)
}

pub(super) fn router() -> axum::Router {
    loan_router(Arc::new(LoanService::default()))
}

pub(super) fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("valid request")
}

pub(super) async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
