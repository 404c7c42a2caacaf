//! Numeric breakdown of a priced loan: principal/interest split, interest
//! burden and a coarse affordability band. Thresholds are quoted in the
//! loan's currency and default to values suited to INR home loans.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::{compute_emi, AmortizationResult};
use crate::time_value::round_money;
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money, Percent};
use crate::EmiResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// EMIs strictly below this are `Manageable`.
    pub manageable_emi: Money,
    /// EMIs strictly below this (and not manageable) are `Moderate`.
    pub moderate_emi: Money,
    /// Annual rates above this are flagged as high.
    pub high_rate_pct: Percent,
    /// Interest above this share of the principal is flagged as interest-heavy.
    pub interest_heavy_pct: Percent,
    /// Monthly income considered comfortable, as a multiple of the EMI.
    pub income_multiple: Decimal,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            manageable_emi: dec!(30_000),
            moderate_emi: dec!(70_000),
            high_rate_pct: dec!(10),
            interest_heavy_pct: dec!(50),
            income_multiple: dec!(3),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightInput {
    pub terms: LoanTerms,
    #[serde(default)]
    pub thresholds: InsightThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityBand {
    Manageable,
    Moderate,
    Significant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInsights {
    pub emi: Money,
    pub total_interest: Money,
    pub total_amount: Money,
    pub principal_share_pct: Percent,
    pub interest_share_pct: Percent,
    pub interest_to_principal_pct: Percent,
    pub tenure_years: Decimal,
    pub affordability: AffordabilityBand,
    pub comfortable_monthly_income: Money,
    pub high_interest_rate: bool,
    pub interest_heavy: bool,
}

pub fn analyze_loan(input: &InsightInput) -> EmiResult<ComputationOutput<LoanInsights>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    let t = &input.thresholds;

    if t.manageable_emi > t.moderate_emi {
        warnings.push(format!(
            "manageable_emi ({}) exceeds moderate_emi ({}); the moderate band is empty",
            t.manageable_emi, t.moderate_emi
        ));
    }

    let tenure_months = input.terms.tenure_months();
    let r = compute_emi(input.terms.principal, input.terms.annual_rate_pct, tenure_months)?;
    let insights = derive_insights(&r, input.terms.principal, input.terms.annual_rate_pct, t);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Principal/interest breakdown and affordability banding",
        input,
        warnings,
        elapsed,
        insights,
    ))
}

fn derive_insights(
    r: &AmortizationResult,
    principal: Money,
    annual_rate_pct: Percent,
    t: &InsightThresholds,
) -> LoanInsights {
    // total_amount >= principal > 0 is guaranteed by compute_emi
    let principal_share = principal / r.total_amount * dec!(100);
    let interest_to_principal = r.total_interest / principal * dec!(100);

    let affordability = if r.emi < t.manageable_emi {
        AffordabilityBand::Manageable
    } else if r.emi < t.moderate_emi {
        AffordabilityBand::Moderate
    } else {
        AffordabilityBand::Significant
    };

    LoanInsights {
        emi: r.emi,
        total_interest: r.total_interest,
        total_amount: r.total_amount,
        principal_share_pct: round_money(principal_share),
        interest_share_pct: round_money(dec!(100) - principal_share),
        interest_to_principal_pct: round_money(interest_to_principal),
        tenure_years: (Decimal::from(r.tenure_months) / dec!(12)).round_dp(1),
        affordability,
        comfortable_monthly_income: round_money(r.emi * t.income_multiple),
        high_interest_rate: annual_rate_pct > t.high_rate_pct,
        interest_heavy: interest_to_principal > t.interest_heavy_pct,
    }
}
