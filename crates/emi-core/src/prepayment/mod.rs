pub mod simulator;

pub use simulator::{
    analyze_prepayment, simulate_prepayment, PayoffMonth, PayoffSchedule, PayoffStatus,
    PrepaymentInput, PrepaymentPlan, PrepaymentStrategy,
};
