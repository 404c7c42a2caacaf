use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::compute_emi;
use crate::error::EmiError;
use crate::time_value::round_money;
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money, Percent};
use crate::EmiResult;

/// Beyond this many options a warning is attached; the comparison still runs.
const TYPICAL_MAX_OPTIONS: usize = 4;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A named set of loan terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOption {
    pub name: String,
    #[serde(flatten)]
    pub terms: LoanTerms,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub options: Vec<LoanOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    pub principal: Money,
    pub annual_rate_pct: Percent,
    pub tenure_months: u32,
    pub emi: Money,
    pub total_interest: Money,
    pub total_amount: Money,
    pub is_lowest_emi: bool,
    pub is_lowest_interest: bool,
    pub is_lowest_total: bool,
}

/// Interest difference between the cheapest and the most expensive option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInsight {
    pub best_option: String,
    pub worst_option: String,
    pub interest_savings: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub rows: Vec<ComparisonRow>,
    pub lowest_emi: Money,
    pub lowest_interest: Money,
    pub lowest_total: Money,
    /// First option carrying each minimum.
    pub lowest_emi_option: String,
    pub lowest_interest_option: String,
    pub lowest_total_option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_insight: Option<SavingsInsight>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Price every option with the EMI calculator and flag the cheapest ones.
///
/// Ties are flagged on every tied row; the `lowest_*_option` names refer to
/// the first of them in input order.
pub fn compare_loans(input: &ComparisonInput) -> EmiResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.options.is_empty() {
        return Err(EmiError::InsufficientData(
            "Loan comparison requires at least one option".into(),
        ));
    }
    if input.options.len() > TYPICAL_MAX_OPTIONS {
        warnings.push(format!(
            "{} options supplied; comparisons are usually limited to {}",
            input.options.len(),
            TYPICAL_MAX_OPTIONS
        ));
    }

    let mut rows = Vec::with_capacity(input.options.len());
    for option in &input.options {
        let tenure_months = option.terms.tenure_months();
        let r = compute_emi(option.terms.principal, option.terms.annual_rate_pct, tenure_months)
            .map_err(|e| match e {
                EmiError::InvalidLoanTerms { field, reason } => EmiError::InvalidLoanTerms {
                    field: format!("{}.{}", option.name, field),
                    reason,
                },
                other => other,
            })?;
        rows.push(ComparisonRow {
            name: option.name.clone(),
            principal: option.terms.principal,
            annual_rate_pct: option.terms.annual_rate_pct,
            tenure_months,
            emi: r.emi,
            total_interest: r.total_interest,
            total_amount: r.total_amount,
            is_lowest_emi: false,
            is_lowest_interest: false,
            is_lowest_total: false,
        });
    }

    let lowest_emi = min_of(&rows, |r| r.emi);
    let lowest_interest = min_of(&rows, |r| r.total_interest);
    let lowest_total = min_of(&rows, |r| r.total_amount);

    for row in &mut rows {
        row.is_lowest_emi = row.emi == lowest_emi;
        row.is_lowest_interest = row.total_interest == lowest_interest;
        row.is_lowest_total = row.total_amount == lowest_total;
    }

    let first_name = |pred: fn(&ComparisonRow) -> bool| -> String {
        rows.iter()
            .find(|r| pred(r))
            .map(|r| r.name.clone())
            .unwrap_or_default()
    };
    let lowest_emi_option = first_name(|r| r.is_lowest_emi);
    let lowest_interest_option = first_name(|r| r.is_lowest_interest);
    let lowest_total_option = first_name(|r| r.is_lowest_total);

    let savings_insight = if rows.len() >= 2 {
        // First row with the highest interest.
        let worst = rows
            .iter()
            .reduce(|prev, curr| {
                if curr.total_interest > prev.total_interest {
                    curr
                } else {
                    prev
                }
            })
            .map(|r| (r.name.clone(), r.total_interest));
        worst.map(|(worst_option, worst_interest)| SavingsInsight {
            best_option: lowest_interest_option.clone(),
            worst_option,
            interest_savings: round_money(worst_interest - lowest_interest),
        })
    } else {
        None
    };

    let output = ComparisonOutput {
        rows,
        lowest_emi,
        lowest_interest,
        lowest_total,
        lowest_emi_option,
        lowest_interest_option,
        lowest_total_option,
        savings_insight,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Side-by-side level-payment EMI comparison",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn min_of(rows: &[ComparisonRow], field: impl Fn(&ComparisonRow) -> Money) -> Money {
    rows.iter().map(field).min().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn option(name: &str, principal: Decimal, rate: Decimal, years: u32) -> LoanOption {
        LoanOption {
            name: name.into(),
            terms: LoanTerms::years(principal, rate, years),
        }
    }

    #[test]
    fn test_tie_flags_every_row() {
        let input = ComparisonInput {
            options: vec![
                option("A", dec!(1_000_000), dec!(9), 10),
                option("B", dec!(1_000_000), dec!(9), 10),
            ],
        };
        let out = compare_loans(&input).unwrap().result;
        assert!(out.rows.iter().all(|r| r.is_lowest_emi && r.is_lowest_interest));
        assert_eq!(out.lowest_emi_option, "A");
        let insight = out.savings_insight.unwrap();
        assert_eq!(insight.interest_savings, Decimal::ZERO);
        assert_eq!(insight.worst_option, "A");
    }

    #[test]
    fn test_single_option_has_no_insight() {
        let input = ComparisonInput {
            options: vec![option("Only", dec!(500_000), dec!(10), 5)],
        };
        let out = compare_loans(&input).unwrap().result;
        assert!(out.savings_insight.is_none());
        assert!(out.rows[0].is_lowest_total);
    }

    #[test]
    fn test_empty_is_insufficient_data() {
        let err = compare_loans(&ComparisonInput { options: vec![] }).unwrap_err();
        assert!(matches!(err, EmiError::InsufficientData(_)));
    }

    #[test]
    fn test_invalid_option_names_the_option() {
        let input = ComparisonInput {
            options: vec![
                option("A", dec!(1_000_000), dec!(9), 10),
                option("Broken", dec!(0), dec!(9), 10),
            ],
        };
        match compare_loans(&input).unwrap_err() {
            EmiError::InvalidLoanTerms { field, .. } => assert_eq!(field, "Broken.principal"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_more_than_four_options_warns() {
        let options = (0..5)
            .map(|i| option(&format!("O{i}"), dec!(1_000_000), dec!(8) + Decimal::from(i), 10))
            .collect();
        let out = compare_loans(&ComparisonInput { options }).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.result.lowest_interest_option, "O0");
    }
}
