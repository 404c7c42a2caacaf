pub mod options;

pub use options::{
    compare_loans, ComparisonInput, ComparisonOutput, ComparisonRow, LoanOption, SavingsInsight,
};
