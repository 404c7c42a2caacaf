pub mod calculator;

pub use calculator::{calculate_emi, compute_emi, validate_loan_terms, AmortizationResult};
