use serde::{Deserialize, Deserializer, Serialize};

use super::domain::LoanInput;
use super::engine::{LoanError, MAX_TENURE_YEARS};
use crate::config::LoanDefaults;

/// Calculator fields exactly as posted by the browser.
///
/// Amounts may carry thousands separators in either western (`1,000,000`) or
/// Indian (`10,00,000`) grouping. API clients may send plain JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanCalculatorForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub tenure: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub rate: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub down_payment: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<FieldValue>::deserialize(deserializer)?.map(|value| match value {
            FieldValue::Text(text) => text,
            FieldValue::Integer(number) => number.to_string(),
            FieldValue::Number(number) => number.to_string(),
        }),
    )
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid numeric value: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    Loan(#[from] LoanError),
}

/// Strip separators and parse a currency amount. Blank input counts as zero.
pub fn clean_numeric_input(raw: &str) -> Result<f64, FormError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
    if cleaned.is_empty() {
        return Ok(0.0);
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormError::InvalidNumber(raw.to_string()))
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, FormError> {
    match value.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(raw),
        _ => Err(FormError::MissingField(field)),
    }
}

impl LoanCalculatorForm {
    pub fn new(amount: &str, tenure: &str, rate: &str) -> Self {
        Self {
            amount: Some(amount.to_string()),
            tenure: Some(tenure.to_string()),
            rate: Some(rate.to_string()),
            down_payment: None,
        }
    }

    pub fn with_down_payment(mut self, down_payment: &str) -> Self {
        self.down_payment = Some(down_payment.to_string());
        self
    }

    /// Clean and validate the submitted fields.
    pub fn parse(&self) -> Result<LoanInput, FormError> {
        let principal = clean_numeric_input(required(&self.amount, "amount")?)?;

        let raw_tenure = required(&self.tenure, "tenure")?;
        let tenure = raw_tenure
            .parse::<i64>()
            .map_err(|_| FormError::InvalidNumber(raw_tenure.to_string()))?;
        if tenure <= 0 {
            return Err(LoanError::invalid("tenure", "must be greater than zero").into());
        }
        let tenure_years = u32::try_from(tenure)
            .ok()
            .filter(|years| *years <= MAX_TENURE_YEARS)
            .ok_or(LoanError::invalid("tenure", "cannot exceed 30 years"))?;

        let raw_rate = required(&self.rate, "rate")?;
        let annual_rate_percent = raw_rate
            .parse::<f64>()
            .map_err(|_| FormError::InvalidNumber(raw_rate.to_string()))?;

        let down_payment = match self.down_payment.as_deref() {
            Some(raw) => clean_numeric_input(raw)?,
            None => 0.0,
        };

        let input = LoanInput {
            principal,
            annual_rate_percent,
            tenure_years,
            down_payment,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Form values suggested when the calculator is opened from a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorPrefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<u64>,
    pub amount: f64,
    pub down_payment: f64,
    pub tenure: u32,
    pub rate: f64,
}

impl CalculatorPrefill {
    pub fn for_property(price: f64, defaults: &LoanDefaults) -> Result<Self, LoanError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(LoanError::invalid("amount", "must be greater than zero"));
        }

        Ok(Self {
            property_id: None,
            amount: price,
            down_payment: price * defaults.down_payment_share,
            tenure: defaults.tenure_years,
            rate: defaults.rate_percent,
        })
    }

    pub fn with_property_id(mut self, property_id: u64) -> Self {
        self.property_id = Some(property_id);
        self
    }
}
