use clap::Args;
use serde_json::Value;

use emi_core::comparison::{self, ComparisonInput};

use crate::input;

/// Arguments for loan comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON input file with an `options` array
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cmp_input: ComparisonInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        return Err("--input <file.json> or stdin required for loan comparison".into());
    };
    let result = comparison::compare_loans(&cmp_input)?;
    Ok(serde_json::to_value(result)?)
}
