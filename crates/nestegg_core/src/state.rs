//! Runtime state threaded through a projection
//!
//! One `ProjectionState` is created from the household profile at year zero,
//! mutated in place by each year's cash-flow step, and surfaced to the caller
//! as the ending state after the final year.

use serde::{Deserialize, Serialize};

/// Mutable balances carried across simulated years.
///
/// `taxable_balance` may go negative: a negative liquid balance is the
/// engine's representation of projected insolvency (implicit debt), surfaced
/// as data rather than an error. The tax-deferred balance never goes
/// negative; RMDs are a strict fraction of it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionState {
    pub tax_deferred_balance: f64,
    pub taxable_balance: f64,
    pub primary_home_value: f64,
    pub secondary_home_value: f64,
    pub other_assets_value: f64,
    pub liabilities_balance: f64,
    /// Liabilities at year zero, retained for straight-line amortization.
    pub original_liabilities: f64,
}

impl ProjectionState {
    /// The combined savings metric used for reporting and goal-funding
    /// checks: tax-deferred and taxable balances surfaced together.
    #[must_use]
    pub fn combined_balance(&self) -> f64 {
        self.tax_deferred_balance + self.taxable_balance
    }

    #[must_use]
    pub fn total_assets(&self) -> f64 {
        self.combined_balance()
            + self.primary_home_value
            + self.secondary_home_value
            + self.other_assets_value
    }

    #[must_use]
    pub fn net_worth(&self) -> f64 {
        self.total_assets() - self.liabilities_balance
    }
}
