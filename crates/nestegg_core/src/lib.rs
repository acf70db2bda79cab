//! Household financial projection library
//!
//! This crate provides a year-by-year retirement projection engine and its
//! Monte Carlo variant. It supports:
//! - Named income and expense streams with per-stream growth (inflation,
//!   Social Security COLA, rental growth, custom rates)
//! - Required Minimum Distribution (RMD) withdrawals from tax-deferred
//!   accounts, with partner-aware divisor lookup
//! - A cash-flow waterfall: income, taxes, shortfall, RMD offset, savings
//!   drawdown, growth
//! - One-off and recurring goal overlays (extra expense or investment events)
//! - Monte Carlo ensembles with per-year sampled growth, inflation, and home
//!   appreciation rates, aggregated into percentile bands and a per-year
//!   bankruptcy probability
//!
//! The engine is a pure function of its inputs: given a fixed seed, the
//! stochastic variant is exactly reproducible.
//!
//! ```ignore
//! use nestegg_core::model::HouseholdProfile;
//! use nestegg_core::projection::project;
//!
//! let profile: HouseholdProfile = serde_json::from_str(input)?;
//! let table = project(&profile)?;
//! println!("final net worth: {}", table.final_net_worth());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod cashflow;
pub mod error;
pub mod monte_carlo;
pub mod percentiles;
pub mod projection;
pub mod state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ValidationError;
pub use model::{Assumptions, HouseholdProfile, MonteCarloEnsemble, ProjectionTable};
pub use monte_carlo::{McConfig, project_monte_carlo};
pub use projection::project;
