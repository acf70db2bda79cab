//! Account aggregation tests

use crate::aggregate::initial_state;
use crate::model::{AccountBalance, AccountKind, HouseholdProfile, Liability};

fn account(name: &str, kind: AccountKind, balance: f64) -> AccountBalance {
    AccountBalance {
        name: name.to_string(),
        kind,
        balance,
    }
}

#[test]
fn test_empty_profile_aggregates_to_zeros() {
    let state = initial_state(&HouseholdProfile::for_person(40));
    assert_eq!(state.tax_deferred_balance, 0.0);
    assert_eq!(state.taxable_balance, 0.0);
    assert_eq!(state.primary_home_value, 0.0);
    assert_eq!(state.secondary_home_value, 0.0);
    assert_eq!(state.other_assets_value, 0.0);
    assert_eq!(state.liabilities_balance, 0.0);
    assert_eq!(state.net_worth(), 0.0);
}

#[test]
fn test_balances_fold_by_kind() {
    let mut profile = HouseholdProfile::for_person(68);
    profile.accounts = vec![
        account("IRA", AccountKind::TaxDeferred, 800_000.0),
        account("Work 401k", AccountKind::TaxDeferred, 250_000.0),
        account("Brokerage", AccountKind::TaxableLiquid, 120_000.0),
        account("HSA", AccountKind::TaxableLiquid, 30_000.0),
        account("Pension Cash Value", AccountKind::TaxableLiquid, 50_000.0),
        account("Home", AccountKind::PrimaryResidence, 500_000.0),
        account("Lake House", AccountKind::SecondaryResidence, 200_000.0),
        account("Cars", AccountKind::IlliquidOther, 40_000.0),
        account("Collectibles", AccountKind::IlliquidOther, 10_000.0),
    ];
    profile.liabilities = vec![
        Liability {
            name: "Mortgage".to_string(),
            balance: 180_000.0,
        },
        Liability {
            name: "Credit Card".to_string(),
            balance: 5_000.0,
        },
    ];

    let state = initial_state(&profile);
    assert_eq!(state.tax_deferred_balance, 1_050_000.0);
    assert_eq!(state.taxable_balance, 200_000.0);
    assert_eq!(state.primary_home_value, 500_000.0);
    assert_eq!(state.secondary_home_value, 200_000.0);
    assert_eq!(state.other_assets_value, 50_000.0);
    assert_eq!(state.liabilities_balance, 185_000.0);
    assert_eq!(state.original_liabilities, 185_000.0);
    assert_eq!(state.combined_balance(), 1_250_000.0);
    assert_eq!(state.total_assets(), 2_000_000.0);
    assert_eq!(state.net_worth(), 1_815_000.0);
}
