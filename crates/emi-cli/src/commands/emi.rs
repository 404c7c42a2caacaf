use clap::Args;
use serde_json::Value;

use emi_core::emi;
use emi_core::LoanTerms;

use super::LoanTermsArgs;
use crate::input;

/// Arguments for a single-loan EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub terms: LoanTermsArgs,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        args.terms.to_terms()?
    };

    let result = emi::calculate_emi(&terms)?;
    Ok(serde_json::to_value(result)?)
}
