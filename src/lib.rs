//! Springpad calculators - personal finance planning math
//!
//! This library provides:
//! - A time-value-of-money engine (compound growth, annuities, loans, step-up SIPs)
//! - Goal calculators (SIP, lumpsum, retirement, education, multi-goal planning, EPF, net worth)
//! - Indian currency formatting (lakh/crore grouping)
//! - Planner defaults from JSON and environment
//! - Parallel scenario sweeps

pub mod error;
pub mod config;
pub mod format;
pub mod tvm;
pub mod calculators;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalcError, CalcResult};
pub use config::PlannerConfig;
pub use calculators::Summary;
pub use tvm::{AnnualRate, AnnuityTiming, Frequency};
pub use scenario::{ScenarioRunner, SipGrid, SweepRow};
