pub mod compare;
pub mod emi;
pub mod insights;
pub mod prepayment;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use emi_core::{LoanTerms, TenureUnit};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TenureUnitArg {
    Months,
    Years,
}

impl From<TenureUnitArg> for TenureUnit {
    fn from(arg: TenureUnitArg) -> Self {
        match arg {
            TenureUnitArg::Months => TenureUnit::Months,
            TenureUnitArg::Years => TenureUnit::Years,
        }
    }
}

/// Loan terms given as individual flags
#[derive(Args)]
pub struct LoanTermsArgs {
    /// Loan principal
    #[arg(long, alias = "loan-amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 8.5 for 8.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Loan tenure, in --tenure-unit
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Unit of --tenure
    #[arg(long, value_enum, default_value = "months")]
    pub tenure_unit: TenureUnitArg,
}

impl LoanTermsArgs {
    pub fn to_terms(&self) -> Result<LoanTerms, Box<dyn std::error::Error>> {
        Ok(LoanTerms {
            principal: self
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: self
                .annual_rate_pct
                .ok_or("--annual-rate-pct is required (or provide --input)")?,
            tenure: self
                .tenure
                .ok_or("--tenure is required (or provide --input)")?,
            tenure_unit: self.tenure_unit.into(),
        })
    }
}
