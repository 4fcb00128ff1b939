use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated inputs for an EMI computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Property value or requested amount before any down payment.
    pub principal: f64,
    /// Nominal annual rate, e.g. `8.5` for 8.5%.
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
    #[serde(default)]
    pub down_payment: f64,
}

impl LoanInput {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
            down_payment: 0.0,
        }
    }

    pub fn with_down_payment(mut self, down_payment: f64) -> Self {
        self.down_payment = down_payment;
        self
    }

    /// Amount actually financed.
    pub fn effective_principal(&self) -> f64 {
        self.principal - self.down_payment
    }
}

/// One row of the yearly amortization table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub total_payment: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub effective_principal: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub interest_percent_of_total: f64,
    pub principal_percent_of_total: f64,
    pub schedule: Vec<AmortizationYear>,
}

impl LoanResult {
    pub fn final_balance(&self) -> f64 {
        self.schedule
            .last()
            .map(|year| year.ending_balance)
            .unwrap_or(self.effective_principal)
    }

    pub fn principal_repaid(&self) -> f64 {
        self.schedule.iter().map(|year| year.principal_paid).sum()
    }
}

/// Pre-approval request posted from the calculator page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub amount: f64,
    pub rate: f64,
    pub tenure: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreApprovalStatus {
    PreApproved,
}

impl PreApprovalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PreApprovalStatus::PreApproved => "pre_approved",
        }
    }
}

/// Indicative bank response for a [`LoanApplication`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreApprovalQuote {
    pub status: PreApprovalStatus,
    pub reference_id: String,
    pub requested_amount: f64,
    pub max_amount: f64,
    pub rate: f64,
    pub tenure: u32,
    pub application_date: DateTime<Utc>,
}
