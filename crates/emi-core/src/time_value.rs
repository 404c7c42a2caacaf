use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::EmiError;
use crate::types::{Money, Percent, Rate};
use crate::EmiResult;

/// Decimal places carried by every reported monetary figure.
pub const MONEY_DP: u32 = 2;

/// Round to cents, half away from zero (2.345 -> 2.35, -2.345 -> -2.35).
pub fn round_money(value: Decimal) -> Money {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Per-month rate from an annual percentage: `annual / 12 / 100`.
pub fn monthly_rate(annual_rate_pct: Percent) -> Rate {
    annual_rate_pct / dec!(12) / dec!(100)
}

/// `(1 + rate)^nper`, erroring instead of panicking on overflow.
pub fn compound_factor(rate: Rate, nper: u32) -> EmiResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(u64::from(nper))
        .ok_or_else(|| EmiError::ArithmeticOverflow {
            context: format!("compound factor (1 + {rate})^{nper}"),
        })
}

/// Future value of one unit paid at the end of each of `nper` periods:
/// `((1 + r)^n - 1) / r`, or `n` when r is zero.
pub fn accumulation_factor(rate: Rate, nper: u32) -> EmiResult<Decimal> {
    if rate.is_zero() {
        return Ok(Decimal::from(nper));
    }
    let factor = compound_factor(rate, nper)?;
    (factor - Decimal::ONE)
        .checked_div(rate)
        .ok_or_else(|| EmiError::ArithmeticOverflow {
            context: "accumulation factor".into(),
        })
}

/// Level payment that amortises `principal` over `nper` periods.
///
/// PMT = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when r is zero.
/// The result is unrounded; callers decide where rounding happens.
pub fn level_payment(principal: Money, rate: Rate, nper: u32) -> EmiResult<Money> {
    if nper == 0 {
        return Err(EmiError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(EmiError::ArithmeticOverflow {
            context: "level payment annuity factor underflowed to zero".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| EmiError::ArithmeticOverflow {
            context: "level payment".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.345)), dec!(2.35));
        assert_eq!(round_money(dec!(2.344)), dec!(2.34));
        assert_eq!(round_money(dec!(-2.345)), dec!(-2.35));
        // Banker's rounding would give 0.12 here.
        assert_eq!(round_money(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn test_monthly_rate() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_level_payment_known_answer() {
        // 12,000 at 1% per month over 12 months
        let pmt = level_payment(dec!(12000), dec!(0.01), 12).unwrap();
        assert_eq!(round_money(pmt), dec!(1066.19));
    }

    #[test]
    fn test_level_payment_zero_rate() {
        let pmt = level_payment(dec!(1200), Decimal::ZERO, 12).unwrap();
        assert_eq!(pmt, dec!(100));
    }

    #[test]
    fn test_level_payment_zero_periods() {
        assert!(level_payment(dec!(1000), dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_accumulation_factor() {
        // 1 + 1.01 + 1.01^2 = 3.0301
        assert_eq!(accumulation_factor(dec!(0.01), 3).unwrap(), dec!(3.0301));
        assert_eq!(accumulation_factor(Decimal::ZERO, 36).unwrap(), dec!(36));
    }

    #[test]
    fn test_compound_factor_overflow_is_error() {
        let result = compound_factor(dec!(1000), 1_000_000);
        assert!(matches!(result, Err(EmiError::ArithmeticOverflow { .. })));
    }
}
