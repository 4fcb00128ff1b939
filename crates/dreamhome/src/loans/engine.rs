use tracing::debug;

use super::domain::{AmortizationYear, LoanInput, LoanResult};

const MONTHS_PER_YEAR: u32 = 12;

/// Longest tenure the portal offers.
pub const MAX_TENURE_YEARS: u32 = 30;

/// Validation failure for loan inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoanError {
    #[error("invalid loan input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl LoanError {
    pub(crate) const fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidInput { field, reason }
    }

    pub fn field(&self) -> &'static str {
        match self {
            LoanError::InvalidInput { field, .. } => field,
        }
    }
}

impl LoanInput {
    pub fn validate(&self) -> Result<(), LoanError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(LoanError::invalid("amount", "must be greater than zero"));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent <= 0.0 {
            return Err(LoanError::invalid("rate", "must be greater than zero"));
        }
        if self.tenure_years == 0 {
            return Err(LoanError::invalid("tenure", "must be greater than zero"));
        }
        if self.tenure_years > MAX_TENURE_YEARS {
            return Err(LoanError::invalid("tenure", "cannot exceed 30 years"));
        }
        if !self.down_payment.is_finite() || self.down_payment < 0.0 {
            return Err(LoanError::invalid("down_payment", "cannot be negative"));
        }
        if self.down_payment >= self.principal {
            return Err(LoanError::invalid(
                "down_payment",
                "must be less than the loan amount",
            ));
        }
        Ok(())
    }
}

/// Fixed monthly instalment for an annuity loan.
pub fn monthly_payment(effective_principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let rate_factor = (1.0 + monthly_rate).powf(f64::from(months));
    effective_principal * monthly_rate * rate_factor / (rate_factor - 1.0)
}

/// Compute the EMI, totals and yearly amortization table for a loan.
pub fn compute_loan(input: &LoanInput) -> Result<LoanResult, LoanError> {
    input.validate()?;

    let months = input.tenure_years * MONTHS_PER_YEAR;
    let effective_principal = input.effective_principal();
    let monthly_rate = input.annual_rate_percent / 1200.0;

    let emi = monthly_payment(effective_principal, monthly_rate, months);
    if !emi.is_finite() || emi <= 0.0 {
        return Err(LoanError::invalid(
            "rate",
            "cannot be amortized over the requested tenure",
        ));
    }

    let mut schedule = Vec::with_capacity(input.tenure_years as usize);
    let mut balance = effective_principal;
    let mut principal_paid = 0.0;
    let mut interest_paid = 0.0;

    for month in 1..=months {
        let last_month = month == months;
        let interest = balance * monthly_rate;
        // Last instalment retires the remaining balance.
        let principal = if last_month { balance } else { emi - interest };

        principal_paid += principal;
        interest_paid += interest;
        balance = if last_month {
            0.0
        } else {
            (balance - principal).max(0.0)
        };

        if month % MONTHS_PER_YEAR == 0 || last_month {
            schedule.push(AmortizationYear {
                year: month.div_ceil(MONTHS_PER_YEAR),
                principal_paid,
                interest_paid,
                total_payment: principal_paid + interest_paid,
                ending_balance: balance,
            });
            principal_paid = 0.0;
            interest_paid = 0.0;
        }
    }

    let total_payment = emi * f64::from(months);
    let total_interest = total_payment - effective_principal;
    debug!(
        emi,
        months, effective_principal, "computed loan amortization schedule"
    );

    Ok(LoanResult {
        effective_principal,
        monthly_payment: emi,
        total_payment,
        total_interest,
        interest_percent_of_total: round_to_tenth(total_interest / total_payment * 100.0),
        principal_percent_of_total: round_to_tenth(effective_principal / total_payment * 100.0),
        schedule,
    })
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_percentages_to_one_decimal() {
        assert_eq!(round_to_tenth(37.549), 37.5);
        assert_eq!(round_to_tenth(62.451), 62.5);
    }

    #[test]
    fn error_names_the_field() {
        let err = compute_loan(&LoanInput::new(500_000.0, 0.0, 10)).expect_err("zero rate");
        assert_eq!(err.field(), "rate");
        assert_eq!(err.to_string(), "invalid loan input: rate must be greater than zero");
    }

    #[test]
    fn rejects_non_finite_principal() {
        let err = compute_loan(&LoanInput::new(f64::NAN, 8.0, 10)).expect_err("nan principal");
        assert_eq!(err.field(), "amount");
    }
}
