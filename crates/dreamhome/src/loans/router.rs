use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::warn;

use super::domain::{LoanApplication, PreApprovalQuote};
use super::form::{CalculatorPrefill, LoanCalculatorForm};
use super::service::{LoanCalculation, LoanService};
use crate::error::AppError;

pub const CALCULATOR_PATH: &str = "/api/v1/loans/calculator";

/// Router builder exposing the calculator, prefill and pre-approval endpoints.
pub fn loan_router(service: Arc<LoanService>) -> Router {
    Router::new()
        .route(CALCULATOR_PATH, post(calculator_handler))
        .route("/api/v1/loans/calculator/prefill", get(prefill_handler))
        .route("/api/v1/loans/apply", post(apply_handler))
        .route("/loan/calculator", get(legacy_calculator_redirect))
        .with_state(service)
}

pub(crate) async fn calculator_handler(
    State(service): State<Arc<LoanService>>,
    payload: Result<Json<LoanCalculatorForm>, JsonRejection>,
) -> Result<Json<LoanCalculation>, AppError> {
    let Json(form) = payload?;
    service.calculate(&form).map(Json).map_err(|error| {
        warn!(%error, "rejected loan calculator input");
        AppError::from(error)
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct PrefillQuery {
    pub(crate) amount: String,
    #[serde(default)]
    pub(crate) property_id: Option<u64>,
}

pub(crate) async fn prefill_handler(
    State(service): State<Arc<LoanService>>,
    query: Result<Query<PrefillQuery>, QueryRejection>,
) -> Result<Json<CalculatorPrefill>, AppError> {
    let Query(query) = query?;
    let prefill = service.prefill(&query.amount, query.property_id)?;
    Ok(Json(prefill))
}

pub(crate) async fn apply_handler(
    State(service): State<Arc<LoanService>>,
    payload: Result<Json<LoanApplication>, JsonRejection>,
) -> Result<Json<PreApprovalQuote>, AppError> {
    let Json(application) = payload?;
    let quote = service.apply(&application)?;
    Ok(Json(quote))
}

async fn legacy_calculator_redirect() -> Redirect {
    Redirect::permanent(CALCULATOR_PATH)
}
