//! Level-payment EMI calculation.
//!
//! Every other view (comparison, prepayment baseline, insights) goes through
//! [`compute_emi`] so the formula and the rounding policy live in one place.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EmiError;
use crate::time_value::{level_payment, monthly_rate, round_money};
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money, Percent, Rate};
use crate::EmiResult;

/// Above this annual rate a warning is attached to the output.
const HIGH_RATE_WARNING_PCT: Decimal = dec!(30);

/// Tenures beyond this many months (40 years) are flagged as unusual.
const LONG_TENURE_WARNING_MONTHS: u32 = 480;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Monthly installment, rounded to 2 dp.
    pub emi: Money,
    /// `emi * tenure_months`, rounded to 2 dp.
    pub total_amount: Money,
    /// `total_amount - principal`, rounded to 2 dp. Never negative.
    pub total_interest: Money,
    /// Per-month rate as a decimal.
    pub monthly_rate: Rate,
    pub tenure_months: u32,
}

/// Reject terms the formula cannot price. Callers' range clamps are not
/// relied upon.
pub fn validate_loan_terms(
    principal: Money,
    annual_rate_pct: Percent,
    tenure_months: u32,
) -> EmiResult<()> {
    if principal <= Decimal::ZERO {
        return Err(EmiError::InvalidLoanTerms {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if tenure_months == 0 {
        return Err(EmiError::InvalidLoanTerms {
            field: "tenure_months".into(),
            reason: "Tenure must be at least one month".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(EmiError::InvalidLoanTerms {
            field: "annual_rate_pct".into(),
            reason: "Annual interest rate cannot be negative".into(),
        });
    }
    Ok(())
}

/// Compute the EMI, total payment and total interest for one loan.
pub fn compute_emi(
    principal: Money,
    annual_rate_pct: Percent,
    tenure_months: u32,
) -> EmiResult<AmortizationResult> {
    validate_loan_terms(principal, annual_rate_pct, tenure_months)?;

    let rate = monthly_rate(annual_rate_pct);
    let n = Decimal::from(tenure_months);

    if rate.is_zero() {
        // Straight-line repayment: nothing accrues, so the total is the principal.
        return Ok(AmortizationResult {
            emi: round_money(principal / n),
            total_amount: round_money(principal),
            total_interest: Decimal::ZERO,
            monthly_rate: rate,
            tenure_months,
        });
    }

    let emi = round_money(level_payment(principal, rate, tenure_months)?);
    let mut total_amount = round_money(emi.checked_mul(n).ok_or_else(|| {
        EmiError::ArithmeticOverflow {
            context: "total amount (emi * tenure)".into(),
        }
    })?);
    let mut total_interest = round_money(total_amount - principal);

    // Cent rounding of the EMI can undershoot the principal on near-zero rates.
    if total_interest < Decimal::ZERO {
        total_amount = principal;
        total_interest = Decimal::ZERO;
    }

    debug!(
        "emi computed: principal={principal} rate={annual_rate_pct}% n={tenure_months} emi={emi}"
    );

    Ok(AmortizationResult {
        emi,
        total_amount,
        total_interest,
        monthly_rate: rate,
        tenure_months,
    })
}

/// Envelope-wrapped EMI calculation over [`LoanTerms`].
pub fn calculate_emi(terms: &LoanTerms) -> EmiResult<ComputationOutput<AmortizationResult>> {
    let start = Instant::now();
    let tenure_months = terms.tenure_months();

    let result = compute_emi(terms.principal, terms.annual_rate_pct, tenure_months)?;

    let mut warnings = Vec::new();
    if terms.annual_rate_pct.is_zero() {
        warnings.push("Zero interest rate: principal is repaid in equal installments".into());
    }
    if terms.annual_rate_pct > HIGH_RATE_WARNING_PCT {
        warnings.push(format!(
            "Annual rate of {}% is unusually high",
            terms.annual_rate_pct
        ));
    }
    if tenure_months > LONG_TENURE_WARNING_MONTHS {
        warnings.push(format!(
            "Tenure of {tenure_months} months exceeds {LONG_TENURE_WARNING_MONTHS} months"
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-payment amortization (reducing balance, monthly compounding)",
        terms,
        warnings,
        elapsed,
        result,
    ))
}
