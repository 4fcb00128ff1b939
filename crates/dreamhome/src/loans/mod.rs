//! Home-loan tooling: EMI computation, calculator form handling, pre-approval
//! quotes and the HTTP routes that expose them.

pub mod advice;
pub mod domain;
pub mod engine;
pub mod export;
pub mod form;
pub mod preapproval;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use advice::{AdviceView, RateAdvice, TenureAdvice};
pub use domain::{
    AmortizationYear, LoanApplication, LoanInput, LoanResult, PreApprovalQuote,
    PreApprovalStatus,
};
pub use engine::{compute_loan, monthly_payment, LoanError, MAX_TENURE_YEARS};
pub use export::write_schedule_csv;
pub use form::{clean_numeric_input, CalculatorPrefill, FormError, LoanCalculatorForm};
pub use preapproval::{ApprovalTier, PreApprovalDesk};
pub use router::loan_router;
pub use service::{LoanCalculation, LoanService};
