//! Projection results
//!
//! Output types from running projections: the year-by-year table produced by
//! the deterministic projector and the percentile ensemble produced by the
//! Monte Carlo projector. Rows are immutable once produced.

use serde::{Deserialize, Serialize};

use super::goals::{GoalFunding, GoalWarning};
use crate::state::ProjectionState;

/// One simulated year, with every intermediate quantity retained for
/// auditability.
///
/// All `balance_*` fields are the combined savings metric (tax-deferred plus
/// taxable); `balance_open` of row *i+1* always equals `balance_end` of row
/// *i*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: i32,
    pub age: u8,
    pub partner_age: Option<u8>,
    /// Annualized pre-tax income, after per-stream growth.
    pub total_income: f64,
    /// Annualized expenses after inflation, including goal injections.
    pub total_expenses: f64,
    /// Expenses minus after-tax income; negative values denote a surplus.
    pub net_draw: f64,
    pub rmd_primary: f64,
    pub rmd_partner: f64,
    /// After-tax proceeds of the combined RMD.
    pub net_rmd_used: f64,
    /// Residual shortfall drawn from the taxable balance after the RMD
    /// offset. Never negative.
    pub cash_from_savings: f64,
    pub balance_open: f64,
    pub balance_growth: f64,
    pub balance_before_draw: f64,
    pub balance_end: f64,
    pub primary_home_value: f64,
    pub secondary_home_value: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
}

/// Complete results from one deterministic projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionTable {
    /// One row per simulated year, in order.
    pub rows: Vec<ProjectionRow>,
    /// Post-run funding report, one entry per goal that fired in-horizon.
    pub goal_funding: Vec<GoalFunding>,
    /// Per-goal validation warnings for entries that were skipped.
    pub warnings: Vec<GoalWarning>,
    /// State after the final year, retained for callers that chain runs.
    pub ending_state: ProjectionState,
}

impl ProjectionTable {
    /// The final simulated year.
    #[must_use]
    pub fn final_row(&self) -> &ProjectionRow {
        self.rows
            .last()
            .expect("a projection table always has at least one row")
    }

    /// Combined savings balance at the end of the final year.
    #[must_use]
    pub fn final_balance(&self) -> f64 {
        self.final_row().balance_end
    }

    #[must_use]
    pub fn final_net_worth(&self) -> f64 {
        self.final_row().net_worth
    }
}

/// Distribution of ending combined balance across trials for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyDistribution {
    pub year: i32,
    pub p10: f64,
    pub median: f64,
    pub p90: f64,
    /// Percentage of trials whose ending balance is negative, in `0..=100`.
    pub bankruptcy_probability: f64,
}

/// Aggregated results from a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloEnsemble {
    pub trials: usize,
    /// The master seed actually used; replaying with this seed reproduces
    /// the ensemble bit for bit.
    pub seed: u64,
    /// One distribution per simulated year, in order.
    pub yearly: Vec<YearlyDistribution>,
    /// Final-net-worth percentiles as (percentile, value) pairs
    /// (0.10 / 0.50 / 0.90).
    pub final_net_worth_percentiles: Vec<(f64, f64)>,
    /// The full table of the trial whose final balance sits closest to the
    /// ensemble median, for downstream reporting.
    pub representative: ProjectionTable,
}

impl MonteCarloEnsemble {
    /// Bankruptcy probability at the final simulated year.
    #[must_use]
    pub fn final_bankruptcy_probability(&self) -> f64 {
        self.yearly
            .last()
            .map_or(0.0, |d| d.bankruptcy_probability)
    }
}

/// Find a final-net-worth percentile value from the (percentile, value)
/// pairs, tolerating floating-point drift in the key.
#[must_use]
pub fn final_percentile(pairs: &[(f64, f64)], target: f64) -> Option<f64> {
    pairs
        .iter()
        .find(|(p, _)| (*p - target).abs() < 0.001)
        .map(|(_, v)| *v)
}
