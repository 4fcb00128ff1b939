use serde::Serialize;

use super::advice::{AdviceView, RateAdvice, TenureAdvice};
use super::domain::{LoanApplication, LoanInput, LoanResult, PreApprovalQuote};
use super::engine::{compute_loan, LoanError};
use super::form::{clean_numeric_input, CalculatorPrefill, FormError, LoanCalculatorForm};
use super::preapproval::PreApprovalDesk;
use crate::config::LoanDefaults;

/// Calculator response: cleaned inputs, the computed schedule and field advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanCalculation {
    pub inputs: LoanInput,
    pub result: LoanResult,
    pub rate_advice: AdviceView,
    pub tenure_advice: AdviceView,
}

/// Service composing form parsing, the amortization engine and the pre-approval desk.
pub struct LoanService {
    defaults: LoanDefaults,
    desk: PreApprovalDesk,
}

impl LoanService {
    pub fn new(defaults: LoanDefaults, desk: PreApprovalDesk) -> Self {
        Self { defaults, desk }
    }

    pub fn defaults(&self) -> &LoanDefaults {
        &self.defaults
    }

    pub fn calculate(&self, form: &LoanCalculatorForm) -> Result<LoanCalculation, FormError> {
        let inputs = form.parse()?;
        Ok(self.calculate_input(inputs)?)
    }

    pub fn calculate_input(&self, inputs: LoanInput) -> Result<LoanCalculation, LoanError> {
        let result = compute_loan(&inputs)?;
        Ok(LoanCalculation {
            rate_advice: RateAdvice::for_rate(inputs.annual_rate_percent).view(),
            tenure_advice: TenureAdvice::for_tenure(inputs.tenure_years).view(),
            inputs,
            result,
        })
    }

    /// Preset the form from a listing price, which may carry separators.
    pub fn prefill(
        &self,
        raw_amount: &str,
        property_id: Option<u64>,
    ) -> Result<CalculatorPrefill, FormError> {
        let price = clean_numeric_input(raw_amount)?;
        let prefill = CalculatorPrefill::for_property(price, &self.defaults)?;
        Ok(match property_id {
            Some(id) => prefill.with_property_id(id),
            None => prefill,
        })
    }

    pub fn apply(&self, application: &LoanApplication) -> Result<PreApprovalQuote, LoanError> {
        self.desk.quote(application)
    }
}

impl Default for LoanService {
    fn default() -> Self {
        Self::new(LoanDefaults::default(), PreApprovalDesk::standard())
    }
}
