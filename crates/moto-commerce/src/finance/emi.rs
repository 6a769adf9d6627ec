//! EMI (equated monthly installment) calculator.

use crate::error::MarketError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Inputs to the loan calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LoanTerms {
    /// Amount borrowed, in rupees.
    pub principal: f64,
    /// Annual interest rate, percent.
    pub annual_rate_pct: f64,
    /// Repayment term, months.
    pub tenure_months: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            tenure_months,
        }
    }

    /// Monthly interest rate as a fraction (annual % / 1200).
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 1_200.0
    }

    /// Run the standard amortization formula.
    ///
    /// EMI = P·i·(1+i)^n / ((1+i)^n − 1) for i > 0, P/n at zero
    /// interest. A zero-month tenure is the one rejected input; every
    /// other value flows through the arithmetic as given.
    pub fn calculate(&self) -> Result<EmiBreakdown, MarketError> {
        if self.tenure_months == 0 {
            return Err(MarketError::InvalidTenure(self.tenure_months));
        }

        let n = self.tenure_months as f64;
        let i = self.monthly_rate();

        let monthly_emi = if i > 0.0 {
            let growth = (1.0 + i).powf(n);
            self.principal * i * growth / (growth - 1.0)
        } else {
            self.principal / n
        };

        let total_payable = monthly_emi * n;
        let total_interest = total_payable - self.principal;

        Ok(EmiBreakdown {
            monthly_emi,
            total_payable,
            total_interest,
        })
    }
}

impl Default for LoanTerms {
    /// The calculator page's starting position.
    fn default() -> Self {
        Self {
            principal: 250_000.0,
            annual_rate_pct: 9.5,
            tenure_months: 36,
        }
    }
}

/// Output of the loan calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EmiBreakdown {
    /// Fixed monthly payment, rupees.
    pub monthly_emi: f64,
    /// EMI × tenure.
    pub total_payable: f64,
    /// Total payable minus principal.
    pub total_interest: f64,
}

impl EmiBreakdown {
    /// Monthly EMI rounded to whole rupees (e.g., "₹8,008").
    pub fn emi_display(&self) -> String {
        rounded_rupees(self.monthly_emi)
    }

    /// Total payable rounded to whole rupees.
    pub fn total_display(&self) -> String {
        rounded_rupees(self.total_payable)
    }

    /// Total interest rounded to whole rupees.
    pub fn interest_display(&self) -> String {
        rounded_rupees(self.total_interest)
    }
}

fn rounded_rupees(value: f64) -> String {
    Money::from_rupees(value.round() as i64).display()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_loan() {
        // 2.5 lakh at 9.5% over 36 months.
        let breakdown = LoanTerms::new(250_000.0, 9.5, 36).calculate().unwrap();

        assert!(
            (breakdown.monthly_emi - 8_005.0).abs() <= 5.0,
            "EMI {} outside expected band",
            breakdown.monthly_emi
        );
        assert!((breakdown.total_payable - breakdown.monthly_emi * 36.0).abs() < 1e-6);
        assert!(
            (breakdown.total_interest - (breakdown.total_payable - 250_000.0)).abs() < 1e-6
        );
        assert!((breakdown.total_interest - 38_300.0).abs() < 200.0);
    }

    #[test]
    fn test_zero_interest_divides_evenly() {
        let breakdown = LoanTerms::new(120_000.0, 0.0, 24).calculate().unwrap();

        assert!((breakdown.monthly_emi - 5_000.0).abs() < 1e-9);
        assert!((breakdown.total_interest - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let result = LoanTerms::new(250_000.0, 9.5, 0).calculate();
        assert_eq!(result, Err(MarketError::InvalidTenure(0)));
    }

    #[test]
    fn test_monthly_rate() {
        let terms = LoanTerms::new(250_000.0, 9.5, 36);
        assert!((terms.monthly_rate() - 0.00791666).abs() < 1e-6);
    }

    #[test]
    fn test_longer_tenure_lowers_emi() {
        let short = LoanTerms::new(250_000.0, 9.5, 24).calculate().unwrap();
        let long = LoanTerms::new(250_000.0, 9.5, 60).calculate().unwrap();

        assert!(long.monthly_emi < short.monthly_emi);
        assert!(long.total_interest > short.total_interest);
    }

    #[test]
    fn test_display_rounding() {
        let breakdown = EmiBreakdown {
            monthly_emi: 8_008.23,
            total_payable: 288_296.1,
            total_interest: 38_296.1,
        };
        assert_eq!(breakdown.emi_display(), "\u{20b9}8,008");
        assert_eq!(breakdown.total_display(), "\u{20b9}2,88,296");
        assert_eq!(breakdown.interest_display(), "\u{20b9}38,296");
    }

    #[test]
    fn test_default_terms() {
        let terms = LoanTerms::default();
        assert!((terms.principal - 250_000.0).abs() < 1e-9);
        assert!((terms.annual_rate_pct - 9.5).abs() < 1e-9);
        assert_eq!(terms.tenure_months, 36);
    }
}
