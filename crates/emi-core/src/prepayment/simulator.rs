//! Month-by-month payoff simulation under a prepayment strategy.
//!
//! The loop carries `(balance, month, interest, prepayment)` and stops when
//! the balance reaches zero or after `2 * tenure_months` iterations. The
//! scheduled principal portion is clamped at zero, so an EMI that does not
//! cover the month's interest leaves the balance flat instead of growing it;
//! such plans end at the cap and are reported as [`PayoffStatus::NonConvergent`].
//!
//! The EMI is rounded to cents, so the contracted schedule can leave a small
//! residual after its last installment. That installment settles any balance
//! within the compounded half-cent drift, and savings are measured against the
//! same loop run with no extra payments. Together these keep a plan with any
//! positive extra amount at or under the baseline in both months and interest.
//! All math in `rust_decimal::Decimal`, with checked arithmetic on the
//! accumulating totals.

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::{compute_emi, validate_loan_terms};
use crate::error::EmiError;
use crate::time_value::{accumulation_factor, level_payment, monthly_rate, round_money};
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money, Percent};
use crate::EmiResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The simulation gives up after this multiple of the contracted tenure.
const TENURE_CAP_MULTIPLE: u32 = 2;

/// Yearly prepayments land on every 12th month.
const MONTHS_PER_YEAR: u32 = 12;

/// Most an EMI rounded to cents can differ from the exact level payment.
const HALF_CENT: Decimal = dec!(0.005);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Which extra-payment strategy a plan follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepaymentStrategy {
    Monthly,
    Yearly,
    OneTime,
}

/// Extra principal payments on top of the EMI. Only the amount belonging to
/// the chosen strategy exists, so nothing else can be consulted by mistake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum PrepaymentPlan {
    /// `extra_monthly` is paid after every installment.
    Monthly { extra_monthly: Money },
    /// `extra_yearly` is a monthly-equivalent figure; twelve times it is paid
    /// after every 12th installment.
    Yearly { extra_yearly: Money },
    /// Paid once, before the first installment.
    OneTime { one_time_amount: Money },
}

impl PrepaymentPlan {
    pub fn strategy(&self) -> PrepaymentStrategy {
        match self {
            PrepaymentPlan::Monthly { .. } => PrepaymentStrategy::Monthly,
            PrepaymentPlan::Yearly { .. } => PrepaymentStrategy::Yearly,
            PrepaymentPlan::OneTime { .. } => PrepaymentStrategy::OneTime,
        }
    }

    /// The amount the user entered for the active strategy.
    pub fn amount(&self) -> Money {
        match self {
            PrepaymentPlan::Monthly { extra_monthly } => *extra_monthly,
            PrepaymentPlan::Yearly { extra_yearly } => *extra_yearly,
            PrepaymentPlan::OneTime { one_time_amount } => *one_time_amount,
        }
    }

    fn validate(&self) -> EmiResult<()> {
        if self.amount() < Decimal::ZERO {
            let field = match self.strategy() {
                PrepaymentStrategy::Monthly => "extra_monthly",
                PrepaymentStrategy::Yearly => "extra_yearly",
                PrepaymentStrategy::OneTime => "one_time_amount",
            };
            return Err(EmiError::InvalidInput {
                field: field.into(),
                reason: "Prepayment amount cannot be negative".into(),
            });
        }
        Ok(())
    }
}

/// Top-level prepayment analysis input. The baseline EMI is derived from
/// `terms`, the same way the single-loan calculator derives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepaymentInput {
    pub terms: LoanTerms,
    pub plan: PrepaymentPlan,
    /// Return the month-by-month rows as well as the totals.
    #[serde(default)]
    pub include_schedule: bool,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// How the simulation ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PayoffStatus {
    PaidOff,
    /// The iteration cap was reached with principal still outstanding.
    NonConvergent { remaining_balance: Money },
}

/// One simulated month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffMonth {
    pub month: u32,
    pub interest: Money,
    /// Scheduled principal covered by the EMI.
    pub principal: Money,
    /// Extra principal applied after the installment.
    pub prepayment: Money,
    pub closing_balance: Money,
}

/// Result of a payoff simulation. Monetary figures are rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSchedule {
    pub original_tenure_months: u32,
    pub months_to_payoff: u32,
    pub total_interest_paid: Money,
    pub total_prepayment_applied: Money,
    /// Interest of the same EMI with no extra payments. Equals
    /// `emi * tenure - principal` plus the residual settled in the final
    /// installment.
    pub original_total_interest: Money,
    pub months_saved: u32,
    pub years_saved: Decimal,
    pub interest_saved: Money,
    /// Same as `interest_saved`; kept as its own field for display layers.
    pub total_saved: Money,
    pub total_amount_with_prepayment: Money,
    pub savings_percentage: Percent,
    pub status: PayoffStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<PayoffMonth>,
}

impl PayoffSchedule {
    pub fn is_paid_off(&self) -> bool {
        self.status == PayoffStatus::PaidOff
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate paying off `principal` with a fixed `emi` plus the extra
/// payments described by `plan`.
///
/// # Errors
///
/// `InvalidLoanTerms` for non-positive principal, zero tenure or a negative
/// rate; `InvalidInput` for a negative EMI or prepayment amount;
/// `ArithmeticOverflow` when the accumulated totals leave `Decimal` range.
/// Failing to pay off the loan is not an error: see [`PayoffStatus`].
pub fn simulate_prepayment(
    principal: Money,
    annual_rate_pct: Percent,
    tenure_months: u32,
    emi: Money,
    plan: &PrepaymentPlan,
) -> EmiResult<PayoffSchedule> {
    simulate(principal, annual_rate_pct, tenure_months, emi, plan, false)
}

/// Compute the baseline EMI for `input.terms`, then simulate the plan.
pub fn analyze_prepayment(
    input: &PrepaymentInput,
) -> EmiResult<ComputationOutput<PayoffSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let tenure_months = input.terms.tenure_months();
    let baseline = compute_emi(
        input.terms.principal,
        input.terms.annual_rate_pct,
        tenure_months,
    )?;

    let schedule = simulate(
        input.terms.principal,
        input.terms.annual_rate_pct,
        tenure_months,
        baseline.emi,
        &input.plan,
        input.include_schedule,
    )?;

    if input.plan.amount().is_zero() {
        warnings.push("Prepayment amount is zero; payoff follows the baseline schedule".into());
    }
    if let PayoffStatus::NonConvergent { remaining_balance } = &schedule.status {
        warnings.push(format!(
            "Plan does not pay off the loan within {} months; {} remains outstanding",
            schedule.months_to_payoff, remaining_balance
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Reducing-balance payoff simulation with extra principal payments",
        input,
        warnings,
        elapsed,
        schedule,
    ))
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// One pass of the month loop.
struct Run {
    months: u32,
    balance: Money,
    total_interest: Money,
    total_prepayment: Money,
    rows: Vec<PayoffMonth>,
}

fn overflow(context: &str) -> EmiError {
    EmiError::ArithmeticOverflow {
        context: context.into(),
    }
}

/// Largest balance cent-rounding of the EMI can leave after the last
/// contracted installment: half a cent per installment, compounded.
///
/// `None` when `emi` is short of the level payment by more than half a cent,
/// or the bound is outside `Decimal` range; nothing is settled then.
fn rounding_residual_limit(
    principal: Money,
    rate: Decimal,
    tenure_months: u32,
    emi: Money,
) -> Option<Money> {
    let exact = level_payment(principal, rate, tenure_months).ok()?;
    if emi < exact - HALF_CENT {
        return None;
    }
    accumulation_factor(rate, tenure_months)
        .ok()
        .and_then(|factor| HALF_CENT.checked_mul(factor))
}

fn simulate(
    principal: Money,
    annual_rate_pct: Percent,
    tenure_months: u32,
    emi: Money,
    plan: &PrepaymentPlan,
    record_schedule: bool,
) -> EmiResult<PayoffSchedule> {
    validate_loan_terms(principal, annual_rate_pct, tenure_months)?;
    if emi < Decimal::ZERO {
        return Err(EmiError::InvalidInput {
            field: "emi".into(),
            reason: "EMI cannot be negative".into(),
        });
    }
    plan.validate()?;

    let rate = monthly_rate(annual_rate_pct);
    let settle_limit = rounding_residual_limit(principal, rate, tenure_months, emi);

    let baseline = run(principal, rate, tenure_months, emi, None, settle_limit, false)?;
    let outcome = run(
        principal,
        rate,
        tenure_months,
        emi,
        Some(plan),
        settle_limit,
        record_schedule,
    )?;

    let status = if outcome.balance > Decimal::ZERO {
        warn!(
            "prepayment simulation hit the {}-month cap with {} outstanding",
            outcome.months, outcome.balance
        );
        PayoffStatus::NonConvergent {
            remaining_balance: round_money(outcome.balance),
        }
    } else {
        PayoffStatus::PaidOff
    };

    let original_total_interest = baseline.total_interest;
    let interest_saved = (original_total_interest - outcome.total_interest).max(Decimal::ZERO);
    let months_saved = tenure_months.saturating_sub(outcome.months);
    let savings_percentage = if original_total_interest > Decimal::ZERO {
        interest_saved
            .checked_div(original_total_interest)
            .and_then(|v| v.checked_mul(dec!(100)))
            .ok_or_else(|| overflow("savings percentage"))?
    } else {
        Decimal::ZERO
    };
    let total_amount = emi
        .checked_mul(Decimal::from(outcome.months))
        .and_then(|v| v.checked_add(outcome.total_prepayment))
        .ok_or_else(|| overflow("total amount with prepayment"))?;

    debug!(
        "prepayment simulation: strategy={:?} months={} interest={} prepaid={} baseline_months={}",
        plan.strategy(),
        outcome.months,
        outcome.total_interest,
        outcome.total_prepayment,
        baseline.months
    );

    Ok(PayoffSchedule {
        original_tenure_months: tenure_months,
        months_to_payoff: outcome.months,
        total_interest_paid: round_money(outcome.total_interest),
        total_prepayment_applied: round_money(outcome.total_prepayment),
        original_total_interest: round_money(original_total_interest),
        months_saved,
        years_saved: round_money(Decimal::from(months_saved) / Decimal::from(MONTHS_PER_YEAR)),
        interest_saved: round_money(interest_saved),
        total_saved: round_money(interest_saved),
        total_amount_with_prepayment: round_money(total_amount),
        savings_percentage: round_money(savings_percentage),
        status,
        schedule: outcome.rows,
    })
}

/// Run the month loop. `plan = None` is the baseline with no extra payments.
///
/// Installment `tenure_months` also settles any balance no larger than
/// `settle_limit`, so a cent-rounded EMI ends on the contracted month
/// instead of spilling a residual into one more.
fn run(
    principal: Money,
    rate: Decimal,
    tenure_months: u32,
    emi: Money,
    plan: Option<&PrepaymentPlan>,
    settle_limit: Option<Money>,
    record_schedule: bool,
) -> EmiResult<Run> {
    let cap = tenure_months.saturating_mul(TENURE_CAP_MULTIPLE);

    let mut balance = principal;
    let mut month: u32 = 0;
    let mut total_interest = Decimal::ZERO;
    let mut total_prepayment = Decimal::ZERO;
    let mut rows = Vec::new();

    if let Some(PrepaymentPlan::OneTime { one_time_amount }) = plan {
        let applied = (*one_time_amount).min(balance);
        balance -= applied;
        total_prepayment += applied;
    }

    while balance > Decimal::ZERO && month < cap {
        let interest = balance
            .checked_mul(rate)
            .ok_or_else(|| overflow("monthly interest"))?;
        if month == 0 && plan.is_some() && emi <= interest {
            warn!("emi {emi} does not cover the first month's interest; balance cannot amortise");
        }
        total_interest = total_interest
            .checked_add(interest)
            .ok_or_else(|| overflow("accumulated interest"))?;

        let mut scheduled = (emi - interest).min(balance).max(Decimal::ZERO);
        balance -= scheduled;

        let extra = extra_payment(plan, month, balance)?;
        balance -= extra;
        total_prepayment += extra;

        month += 1;

        if month == tenure_months
            && balance > Decimal::ZERO
            && matches!(settle_limit, Some(limit) if balance <= limit)
        {
            scheduled += balance;
            balance = Decimal::ZERO;
        }

        if record_schedule {
            rows.push(PayoffMonth {
                month,
                interest: round_money(interest),
                principal: round_money(scheduled),
                prepayment: round_money(extra),
                closing_balance: round_money(balance),
            });
        }
    }

    Ok(Run {
        months: month,
        balance,
        total_interest,
        total_prepayment,
        rows,
    })
}

/// Extra principal due after installment `month + 1`, capped at `balance`.
fn extra_payment(plan: Option<&PrepaymentPlan>, month: u32, balance: Money) -> EmiResult<Money> {
    if balance <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let due = match plan {
        Some(PrepaymentPlan::Monthly { extra_monthly }) => *extra_monthly,
        Some(PrepaymentPlan::Yearly { extra_yearly }) if (month + 1) % MONTHS_PER_YEAR == 0 => {
            extra_yearly
                .checked_mul(Decimal::from(MONTHS_PER_YEAR))
                .ok_or_else(|| overflow("yearly prepayment"))?
        }
        _ => Decimal::ZERO,
    };
    Ok(due.min(balance))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TOL: Decimal = dec!(0.01);

    fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tol,
            "{}: expected ~{}, got {} (diff = {})",
            msg,
            expected,
            actual,
            diff
        );
    }

    const HOME_EMI: Decimal = dec!(21695.58);

    fn home_loan(plan: PrepaymentPlan) -> PayoffSchedule {
        simulate_prepayment(dec!(2_500_000), dec!(8.5), 240, HOME_EMI, &plan).unwrap()
    }

    #[test]
    fn test_monthly_extra_shortens_loan() {
        let s = home_loan(PrepaymentPlan::Monthly {
            extra_monthly: dec!(5000),
        });
        assert_eq!(s.months_to_payoff, 155);
        assert_eq!(s.months_saved, 85);
        assert_eq!(s.total_prepayment_applied, dec!(770000.00));
        assert_close(s.total_interest_paid, dec!(1617578.89), TOL, "interest paid");
        assert_close(s.interest_saved, dec!(1089360.83), TOL, "interest saved");
        assert!(s.is_paid_off());
    }

    #[test]
    fn test_yearly_extra_applied_every_twelfth_month() {
        let s = simulate_prepayment(
            dec!(2_500_000),
            dec!(8.5),
            240,
            HOME_EMI,
            &PrepaymentPlan::Yearly {
                extra_yearly: dec!(5000),
            },
        )
        .unwrap();
        assert_eq!(s.months_to_payoff, 157);
        assert_eq!(s.total_prepayment_applied, dec!(780000.00));
        assert_close(s.total_interest_paid, dec!(1671848.89), TOL, "interest paid");
    }

    #[test]
    fn test_one_time_prepayment() {
        let s = home_loan(PrepaymentPlan::OneTime {
            one_time_amount: dec!(100_000),
        });
        assert_eq!(s.months_to_payoff, 217);
        assert_eq!(s.total_prepayment_applied, dec!(100000.00));
        assert_close(s.total_interest_paid, dec!(2304330.16), TOL, "interest paid");
    }

    #[test]
    fn test_one_time_covering_principal_ends_immediately() {
        let s = home_loan(PrepaymentPlan::OneTime {
            one_time_amount: dec!(3_000_000),
        });
        assert_eq!(s.months_to_payoff, 0);
        assert_eq!(s.total_interest_paid, Decimal::ZERO);
        assert_eq!(s.total_prepayment_applied, dec!(2500000.00));
        assert_eq!(s.months_saved, 240);
        assert_eq!(s.years_saved, dec!(20));
        assert_eq!(s.total_amount_with_prepayment, dec!(2500000.00));
    }

    #[test]
    fn test_zero_extra_matches_baseline() {
        // 21,695.58 is rounded down; the 0.52 residual is settled in month 240.
        let s = home_loan(PrepaymentPlan::Monthly {
            extra_monthly: Decimal::ZERO,
        });
        assert_eq!(s.months_to_payoff, 240);
        assert_eq!(s.months_saved, 0);
        assert_eq!(s.total_interest_paid, s.original_total_interest);
        assert_close(s.original_total_interest, dec!(2706939.72), TOL, "baseline interest");
        assert_eq!(s.interest_saved, Decimal::ZERO);
        assert_eq!(s.savings_percentage, Decimal::ZERO);
        assert_eq!(s.total_amount_with_prepayment, dec!(5206939.20));
        assert!(s.is_paid_off());
    }

    #[test]
    fn test_sub_cent_prepayment_never_adds_a_month() {
        for plan in [
            PrepaymentPlan::OneTime {
                one_time_amount: dec!(0.01),
            },
            PrepaymentPlan::Monthly {
                extra_monthly: dec!(0.0001),
            },
        ] {
            let s = home_loan(plan);
            assert_eq!(s.months_to_payoff, 240);
            assert!(s.total_interest_paid <= s.original_total_interest);
            assert_close(s.total_interest_paid, dec!(2706939.68), TOL, "interest paid");
            assert!(s.is_paid_off());
        }
    }

    #[test]
    fn test_last_installment_settles_rounding_residual() {
        // 1,000,000 / 12 rounds to 83,333.33, leaving 0.04 after month 12.
        let out = analyze_prepayment(&PrepaymentInput {
            terms: LoanTerms::months(dec!(1_000_000), Decimal::ZERO, 12),
            plan: PrepaymentPlan::OneTime {
                one_time_amount: Decimal::ZERO,
            },
            include_schedule: true,
        })
        .unwrap();
        let s = &out.result;
        assert_eq!(s.months_to_payoff, 12);
        let last = s.schedule.last().unwrap();
        assert_eq!(last.principal, dec!(83333.37));
        assert_eq!(last.closing_balance, Decimal::ZERO);
        assert_eq!(s.total_interest_paid, Decimal::ZERO);
    }

    #[test]
    fn test_short_emi_is_not_settled_as_residual() {
        // 500 short of the 21,695.58 EMI leaves far more than rounding drift.
        let s = simulate_prepayment(
            dec!(2_500_000),
            dec!(8.5),
            240,
            dec!(21195.58),
            &PrepaymentPlan::Monthly {
                extra_monthly: Decimal::ZERO,
            },
        )
        .unwrap();
        assert!(s.months_to_payoff > 240);
    }

    #[test]
    fn test_flat_balance_under_emi_clamp_is_not_settled() {
        // 100% a month: interest alone is 1,000,000, so an EMI of 0 never
        // touches principal even though the drift bound here is in the millions.
        let s = simulate_prepayment(
            dec!(1_000_000),
            dec!(1200),
            30,
            Decimal::ZERO,
            &PrepaymentPlan::Monthly {
                extra_monthly: Decimal::ZERO,
            },
        )
        .unwrap();
        assert_eq!(s.months_to_payoff, 60);
        assert!(!s.is_paid_off());
    }

    #[test]
    fn test_accumulated_interest_overflow_is_error() {
        // 100% a month on a principal near Decimal::MAX overflows in month two.
        let err = simulate_prepayment(
            dec!(70_000_000_000_000_000_000_000_000_000),
            dec!(1200),
            12,
            Decimal::ZERO,
            &PrepaymentPlan::Monthly {
                extra_monthly: Decimal::ZERO,
            },
        )
        .unwrap_err();
        assert!(matches!(err, EmiError::ArithmeticOverflow { .. }));
    }

    #[test]
    fn test_huge_principal_does_not_panic() {
        let result = simulate_prepayment(
            dec!(70_000_000_000_000_000_000_000_000_000),
            dec!(12),
            12,
            Decimal::ZERO,
            &PrepaymentPlan::Monthly {
                extra_monthly: Decimal::ZERO,
            },
        );
        match result {
            Ok(s) => assert!(!s.is_paid_off()),
            Err(e) => assert!(matches!(e, EmiError::ArithmeticOverflow { .. })),
        }
    }

    #[test]
    fn test_emi_below_interest_hits_cap_without_growing_balance() {
        // 1% monthly interest on 100,000 is 1,000; an EMI of 500 never amortises.
        let s = simulate_prepayment(
            dec!(100_000),
            dec!(12),
            12,
            dec!(500),
            &PrepaymentPlan::Monthly {
                extra_monthly: Decimal::ZERO,
            },
        )
        .unwrap();
        assert_eq!(s.months_to_payoff, 24);
        assert_eq!(
            s.status,
            PayoffStatus::NonConvergent {
                remaining_balance: dec!(100000.00)
            }
        );
        assert_eq!(s.total_interest_paid, dec!(24000.00));
        assert_eq!(s.months_saved, 0);
    }

    #[test]
    fn test_emi_equal_to_interest_is_non_convergent() {
        let s = simulate_prepayment(
            dec!(100_000),
            dec!(12),
            12,
            dec!(1000),
            &PrepaymentPlan::Yearly {
                extra_yearly: Decimal::ZERO,
            },
        )
        .unwrap();
        assert!(!s.is_paid_off());
        assert_eq!(s.months_to_payoff, 24);
    }

    #[test]
    fn test_schedule_rows_recorded() {
        let out = analyze_prepayment(&PrepaymentInput {
            terms: LoanTerms::months(dec!(12000), dec!(12), 12),
            plan: PrepaymentPlan::Monthly {
                extra_monthly: dec!(1000),
            },
            include_schedule: true,
        })
        .unwrap();
        let s = &out.result;
        assert_eq!(s.schedule.len() as u32, s.months_to_payoff);
        let first = &s.schedule[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.interest, dec!(120.00));
        assert_eq!(first.principal, dec!(946.19));
        assert_eq!(first.prepayment, dec!(1000.00));
        assert_eq!(first.closing_balance, dec!(10053.81));
        let last = s.schedule.last().unwrap();
        assert_eq!(last.closing_balance, Decimal::ZERO);
    }

    #[test]
    fn test_schedule_omitted_by_default() {
        let s = home_loan(PrepaymentPlan::Monthly {
            extra_monthly: dec!(5000),
        });
        assert!(s.schedule.is_empty());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = simulate_prepayment(
            dec!(1000),
            dec!(10),
            12,
            dec!(90),
            &PrepaymentPlan::OneTime {
                one_time_amount: dec!(-1),
            },
        )
        .unwrap_err();
        assert!(matches!(err, EmiError::InvalidInput { ref field, .. } if field == "one_time_amount"));
    }

    #[test]
    fn test_negative_emi_rejected() {
        let err = simulate_prepayment(
            dec!(1000),
            dec!(10),
            12,
            dec!(-90),
            &PrepaymentPlan::Monthly {
                extra_monthly: dec!(10),
            },
        )
        .unwrap_err();
        assert!(matches!(err, EmiError::InvalidInput { ref field, .. } if field == "emi"));
    }

    #[test]
    fn test_plan_deserialises_from_tagged_json() {
        let plan: PrepaymentPlan = serde_json::from_value(serde_json::json!({
            "strategy": "one_time",
            "one_time_amount": "100000"
        }))
        .unwrap();
        assert_eq!(plan.strategy(), PrepaymentStrategy::OneTime);
        assert_eq!(plan.amount(), dec!(100000));
    }

    #[test]
    fn test_zero_amount_warns() {
        let out = analyze_prepayment(&PrepaymentInput {
            terms: LoanTerms::years(dec!(2_500_000), dec!(8.5), 20),
            plan: PrepaymentPlan::Monthly {
                extra_monthly: Decimal::ZERO,
            },
            include_schedule: false,
        })
        .unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(out.result.is_paid_off());
    }

    #[test]
    fn test_sub_cent_emi_settled_by_last_installment() {
        // The EMI rounds to 0.00; the whole 0.01 is within rounding drift.
        let out = analyze_prepayment(&PrepaymentInput {
            terms: LoanTerms::months(dec!(0.01), dec!(8.5), 360),
            plan: PrepaymentPlan::Monthly {
                extra_monthly: Decimal::ZERO,
            },
            include_schedule: false,
        })
        .unwrap();
        assert_eq!(out.result.months_to_payoff, 360);
        assert!(out.result.is_paid_off());
        assert_eq!(out.result.total_interest_paid, dec!(0.03));
        assert_eq!(out.warnings.len(), 1);
    }
}
