//! Financial calculators.
//!
//! Two independent pure formulas: loan amortization (EMI) and a linear
//! fuel-cost projection. Both recompute from scratch on every input
//! change; only the divide-by-zero hazards are guarded.

mod emi;
mod fuel;

pub use emi::{EmiBreakdown, LoanTerms};
pub use fuel::{FuelCost, FuelPreset, FuelUsage, CITY_COMMUTE, HIGHWAY_TRAVEL};
