use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Per-period rates expressed as decimals (0.0070833 = 0.70833% per month).
pub type Rate = Decimal;

/// Rates and shares quoted as percentages (8.5 = 8.5%).
pub type Percent = Decimal;

/// Unit in which a loan tenure is quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureUnit {
    #[default]
    Months,
    Years,
}

/// Immutable loan parameters shared by every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed.
    pub principal: Money,
    /// Annual interest rate as a percentage (e.g. 8.5 for 8.5%).
    pub annual_rate_pct: Percent,
    /// Tenure, in `tenure_unit`. Accepts `tenure_months` as an alias.
    #[serde(alias = "tenure_months")]
    pub tenure: u32,
    #[serde(default)]
    pub tenure_unit: TenureUnit,
}

impl LoanTerms {
    pub fn months(principal: Money, annual_rate_pct: Percent, tenure_months: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            tenure: tenure_months,
            tenure_unit: TenureUnit::Months,
        }
    }

    pub fn years(principal: Money, annual_rate_pct: Percent, tenure_years: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            tenure: tenure_years,
            tenure_unit: TenureUnit::Years,
        }
    }

    /// Tenure normalised to a number of monthly installments.
    pub fn tenure_months(&self) -> u32 {
        match self.tenure_unit {
            TenureUnit::Months => self.tenure,
            TenureUnit::Years => self.tenure.saturating_mul(12),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
    pub rounding: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
            rounding: "2dp_half_away_from_zero".to_string(),
        },
    }
}
