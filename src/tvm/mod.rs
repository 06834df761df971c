//! Time-value-of-money engine shared by every calculator
//!
//! All functions are pure. Rates passed in as `periodic_rate` are decimals per
//! period (`0.01` for 12% a year compounded monthly); use [`AnnualRate`] to get
//! there from a whole-percentage input. A zero rate always takes the linear branch.

mod rate;
mod compound;
mod annuity;
mod loan;
mod discount;
pub mod irr;

pub use rate::{AnnualRate, Frequency};
pub use compound::{compound_growth, growth_factor, inflate};
pub use annuity::{
    annuity_factor, annuity_future_value, annuity_payment_for_target, annuity_periods_to_target,
    contribution_for_gap, step_up_future_value, AnnuityTiming, StepUpProjection, StepUpYear,
};
pub use loan::{amortization_schedule, loan_payment, AmortizationRow, LoanSummary};
pub use discount::{discount_factor, present_value, pv_growing_stream, GrowingStreamValue};
