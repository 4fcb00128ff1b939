use serde::Serialize;

/// Guidance shown next to the interest rate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateAdvice {
    Excellent,
    Good,
    Negotiate,
    High,
}

impl RateAdvice {
    pub fn for_rate(annual_rate_percent: f64) -> Self {
        if annual_rate_percent < 7.0 {
            Self::Excellent
        } else if annual_rate_percent <= 9.0 {
            Self::Good
        } else if annual_rate_percent <= 12.0 {
            Self::Negotiate
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RateAdvice::Excellent => "excellent",
            RateAdvice::Good => "good",
            RateAdvice::Negotiate => "negotiate",
            RateAdvice::High => "high",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            RateAdvice::Excellent => "Excellent rate! This is below market average.",
            RateAdvice::Good => "Good rate within normal range.",
            RateAdvice::Negotiate => "Consider negotiating for a better rate.",
            RateAdvice::High => "This rate seems high. Shop around for better offers.",
        }
    }

    pub fn view(self) -> AdviceView {
        AdviceView {
            label: self.label(),
            message: self.message(),
        }
    }
}

/// Guidance shown next to the tenure field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenureAdvice {
    Short,
    Balanced,
    Long,
}

impl TenureAdvice {
    pub fn for_tenure(years: u32) -> Self {
        match years {
            0..=15 => Self::Short,
            16..=25 => Self::Balanced,
            _ => Self::Long,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TenureAdvice::Short => "short",
            TenureAdvice::Balanced => "balanced",
            TenureAdvice::Long => "long",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            TenureAdvice::Short => "Shorter term = Higher EMI but less total interest.",
            TenureAdvice::Balanced => "Balanced choice between EMI and total interest.",
            TenureAdvice::Long => "Longer term = Lower EMI but more total interest.",
        }
    }

    pub fn view(self) -> AdviceView {
        AdviceView {
            label: self.label(),
            message: self.message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceView {
    pub label: &'static str,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_bands_are_inclusive_at_upper_edges() {
        assert_eq!(RateAdvice::for_rate(6.99), RateAdvice::Excellent);
        assert_eq!(RateAdvice::for_rate(7.0), RateAdvice::Good);
        assert_eq!(RateAdvice::for_rate(9.0), RateAdvice::Good);
        assert_eq!(RateAdvice::for_rate(12.0), RateAdvice::Negotiate);
        assert_eq!(RateAdvice::for_rate(12.01), RateAdvice::High);
    }

    #[test]
    fn tenure_bands() {
        assert_eq!(TenureAdvice::for_tenure(15), TenureAdvice::Short);
        assert_eq!(TenureAdvice::for_tenure(16), TenureAdvice::Balanced);
        assert_eq!(TenureAdvice::for_tenure(25), TenureAdvice::Balanced);
        assert_eq!(TenureAdvice::for_tenure(30), TenureAdvice::Long);
    }
}
