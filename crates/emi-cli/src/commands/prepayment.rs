use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use emi_core::prepayment::{self, PrepaymentInput, PrepaymentPlan};

use super::LoanTermsArgs;
use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Monthly,
    Yearly,
    OneTime,
}

/// Arguments for prepayment simulation
#[derive(Args)]
pub struct PrepaymentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub terms: LoanTermsArgs,

    /// Prepayment strategy
    #[arg(long, value_enum, default_value = "monthly")]
    pub strategy: StrategyArg,

    /// Extra amount: per month (monthly), monthly equivalent paid x12 each
    /// year (yearly), or the lump sum (one-time)
    #[arg(long, alias = "extra")]
    pub amount: Option<Decimal>,

    /// Include the month-by-month schedule
    #[arg(long)]
    pub schedule: bool,
}

pub fn run_prepayment(args: PrepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pp_input: PrepaymentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        let amount = args
            .amount
            .ok_or("--amount is required (or provide --input)")?;
        let plan = match args.strategy {
            StrategyArg::Monthly => PrepaymentPlan::Monthly {
                extra_monthly: amount,
            },
            StrategyArg::Yearly => PrepaymentPlan::Yearly {
                extra_yearly: amount,
            },
            StrategyArg::OneTime => PrepaymentPlan::OneTime {
                one_time_amount: amount,
            },
        };
        PrepaymentInput {
            terms: args.terms.to_terms()?,
            plan,
            include_schedule: args.schedule,
        }
    };
    let result = prepayment::analyze_prepayment(&pp_input)?;
    Ok(serde_json::to_value(result)?)
}
