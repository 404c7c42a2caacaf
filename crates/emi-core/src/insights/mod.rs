pub mod breakdown;

pub use breakdown::{analyze_loan, AffordabilityBand, InsightInput, InsightThresholds, LoanInsights};
