pub mod emi;
pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "prepayment")]
pub mod prepayment;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "insights")]
pub mod insights;

pub use error::EmiError;
pub use types::*;

/// Standard result type for all EMI engine operations
pub type EmiResult<T> = Result<T, EmiError>;
