//! Account aggregation
//!
//! Folds a household's many named balances into the small set of projection
//! primitives the cash-flow step operates on. Missing account kinds simply
//! contribute zero; aggregation never fails.

use rustc_hash::FxHashMap;

use crate::model::{AccountKind, HouseholdProfile};
use crate::state::ProjectionState;

/// Build the year-zero projection state from a household profile.
#[must_use]
pub fn initial_state(profile: &HouseholdProfile) -> ProjectionState {
    let mut by_kind: FxHashMap<AccountKind, f64> = FxHashMap::default();
    for account in &profile.accounts {
        *by_kind.entry(account.kind).or_insert(0.0) += account.balance;
    }
    let balance = |kind: AccountKind| by_kind.get(&kind).copied().unwrap_or(0.0);

    let liabilities: f64 = profile.liabilities.iter().map(|l| l.balance).sum();

    ProjectionState {
        tax_deferred_balance: balance(AccountKind::TaxDeferred),
        taxable_balance: balance(AccountKind::TaxableLiquid),
        primary_home_value: balance(AccountKind::PrimaryResidence),
        secondary_home_value: balance(AccountKind::SecondaryResidence),
        other_assets_value: balance(AccountKind::IlliquidOther),
        liabilities_balance: liabilities,
        original_liabilities: liabilities,
    }
}
