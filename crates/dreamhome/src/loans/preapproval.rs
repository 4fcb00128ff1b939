use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{LoanApplication, PreApprovalQuote, PreApprovalStatus};
use super::engine::{LoanError, MAX_TENURE_YEARS};

static REFERENCE_SEQUENCE: AtomicU64 = AtomicU64::new(100_000);

fn next_reference_id() -> String {
    let id = REFERENCE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("LOAN{id:06}")
}

/// Share of the requested amount offered once the request exceeds `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApprovalTier {
    pub threshold: f64,
    pub approval_ratio: f64,
}

/// Indicative pre-approval rules applied before a lender is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct PreApprovalDesk {
    /// Sorted by descending threshold.
    tiers: Vec<ApprovalTier>,
    base_ratio: f64,
}

impl Default for PreApprovalDesk {
    fn default() -> Self {
        Self::standard()
    }
}

impl PreApprovalDesk {
    /// Over 1 crore: 80%. Over 50 lakh: 90%. Otherwise 120%.
    pub fn standard() -> Self {
        Self::new(
            vec![
                ApprovalTier {
                    threshold: 10_000_000.0,
                    approval_ratio: 0.8,
                },
                ApprovalTier {
                    threshold: 5_000_000.0,
                    approval_ratio: 0.9,
                },
            ],
            1.2,
        )
    }

    pub fn new(mut tiers: Vec<ApprovalTier>, base_ratio: f64) -> Self {
        tiers.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        Self { tiers, base_ratio }
    }

    pub fn approval_ratio(&self, amount: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| amount > tier.threshold)
            .map(|tier| tier.approval_ratio)
            .unwrap_or(self.base_ratio)
    }

    pub fn quote(&self, application: &LoanApplication) -> Result<PreApprovalQuote, LoanError> {
        self.quote_at(application, Utc::now())
    }

    pub fn quote_at(
        &self,
        application: &LoanApplication,
        applied_at: DateTime<Utc>,
    ) -> Result<PreApprovalQuote, LoanError> {
        validate_application(application)?;

        let LoanApplication {
            amount,
            rate,
            tenure,
        } = *application;
        let max_amount = amount * self.approval_ratio(amount);
        let reference_id = next_reference_id();

        info!(
            event_type = "loan_application",
            %reference_id,
            amount,
            rate,
            tenure,
            "loan application submitted"
        );

        Ok(PreApprovalQuote {
            status: PreApprovalStatus::PreApproved,
            reference_id,
            requested_amount: amount,
            max_amount,
            rate,
            tenure,
            application_date: applied_at,
        })
    }
}

fn validate_application(application: &LoanApplication) -> Result<(), LoanError> {
    if !application.amount.is_finite() || application.amount <= 0.0 {
        return Err(LoanError::invalid("amount", "must be greater than zero"));
    }
    if !application.rate.is_finite() || application.rate <= 0.0 {
        return Err(LoanError::invalid("rate", "must be greater than zero"));
    }
    if application.tenure == 0 {
        return Err(LoanError::invalid("tenure", "must be greater than zero"));
    }
    if application.tenure > MAX_TENURE_YEARS {
        return Err(LoanError::invalid("tenure", "cannot exceed 30 years"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn application(amount: f64) -> LoanApplication {
        LoanApplication {
            amount,
            rate: 8.5,
            tenure: 20,
        }
    }

    #[test]
    fn tiers_apply_strictly_above_threshold() {
        let desk = PreApprovalDesk::standard();
        assert_eq!(desk.approval_ratio(10_000_000.0), 0.9);
        assert_eq!(desk.approval_ratio(10_000_001.0), 0.8);
        assert_eq!(desk.approval_ratio(5_000_000.0), 1.2);
        assert_eq!(desk.approval_ratio(5_000_001.0), 0.9);
    }

    #[test]
    fn quote_uses_tiered_ratio() {
        let desk = PreApprovalDesk::standard();
        let quote = desk
            .quote(&application(20_000_000.0))
            .expect("quote succeeds");
        assert_eq!(quote.status, PreApprovalStatus::PreApproved);
        assert!((quote.max_amount - 16_000_000.0).abs() < 1e-6);
        assert_eq!(quote.tenure, 20);
    }

    #[test]
    fn reference_ids_are_unique_and_prefixed() {
        let desk = PreApprovalDesk::standard();
        let ids: HashSet<String> = (0..5)
            .map(|_| {
                desk.quote(&application(1_000_000.0))
                    .expect("quote succeeds")
                    .reference_id
            })
            .collect();

        assert_eq!(ids.len(), 5);
        assert!(ids.iter().all(|id| id.starts_with("LOAN") && id.len() == 10));
    }

    #[test]
    fn rejects_zero_rate() {
        let desk = PreApprovalDesk::standard();
        let err = desk
            .quote(&LoanApplication {
                amount: 1_000_000.0,
                rate: 0.0,
                tenure: 10,
            })
            .expect_err("zero rate");
        assert_eq!(err.field(), "rate");
    }

    #[test]
    fn rejects_tenure_beyond_portal_maximum() {
        let desk = PreApprovalDesk::standard();
        let mut request = application(1_000_000.0);
        request.tenure = MAX_TENURE_YEARS;
        assert!(desk.quote(&request).is_ok());

        request.tenure = MAX_TENURE_YEARS + 1;
        let err = desk.quote(&request).expect_err("tenure over the cap");
        assert_eq!(
            err.to_string(),
            "invalid loan input: tenure cannot exceed 30 years"
        );
    }

    #[test]
    fn custom_tiers_are_sorted() {
        let desk = PreApprovalDesk::new(
            vec![
                ApprovalTier {
                    threshold: 100.0,
                    approval_ratio: 0.5,
                },
                ApprovalTier {
                    threshold: 1_000.0,
                    approval_ratio: 0.25,
                },
            ],
            1.0,
        );
        assert_eq!(desk.approval_ratio(5_000.0), 0.25);
        assert_eq!(desk.approval_ratio(500.0), 0.5);
        assert_eq!(desk.approval_ratio(50.0), 1.0);
    }
}
