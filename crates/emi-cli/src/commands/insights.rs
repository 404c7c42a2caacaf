use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_core::insights::{self, InsightInput, InsightThresholds};

use super::LoanTermsArgs;
use crate::input;

/// Arguments for loan insights
#[derive(Args)]
pub struct InsightsArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub terms: LoanTermsArgs,

    /// EMIs below this are considered manageable
    #[arg(long)]
    pub manageable_emi: Option<Decimal>,

    /// EMIs below this are considered moderate
    #[arg(long)]
    pub moderate_emi: Option<Decimal>,
}

pub fn run_insights(args: InsightsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let insight_input: InsightInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        let defaults = InsightThresholds::default();
        InsightInput {
            terms: args.terms.to_terms()?,
            thresholds: InsightThresholds {
                manageable_emi: args.manageable_emi.unwrap_or(defaults.manageable_emi),
                moderate_emi: args.moderate_emi.unwrap_or(defaults.moderate_emi),
                ..defaults
            },
        }
    };
    let result = insights::analyze_loan(&insight_input)?;
    Ok(serde_json::to_value(result)?)
}
