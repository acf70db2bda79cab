//! Goal overlay tests
//!
//! Recurrence parsing, firing years, investment deposits, funding reports,
//! and per-goal warning localization.

use super::{monthly_expense, quiet_profile, savings};
use crate::model::{FUNDED_PERCENT_CAP, Goal, GoalCategory, Recurrence};
use crate::projection::project;

fn goal(name: &str, target: f64, range: &str, recurrence: &str, category: GoalCategory) -> Goal {
    Goal {
        name: name.to_string(),
        target_amount: target,
        year_range: range.to_string(),
        recurrence: recurrence.to_string(),
        category,
    }
}

// ============================================================================
// Recurrence Parsing
// ============================================================================

#[test]
fn test_parse_single_year_range() {
    let scheduled = goal("Roof", 15_000.0, "2027", "none", GoalCategory::Expense)
        .schedule()
        .unwrap();
    assert_eq!((scheduled.start_year, scheduled.end_year), (2027, 2027));
    assert_eq!(scheduled.recurrence, Recurrence::Once);
}

#[test]
fn test_parse_every_n_years() {
    let scheduled = goal("Car", 30_000.0, "2026-2040", "every 5 years", GoalCategory::Expense)
        .schedule()
        .unwrap();
    assert_eq!(scheduled.recurrence, Recurrence::EveryYears(5));
    assert!(scheduled.fires_in(2026));
    assert!(!scheduled.fires_in(2027));
    assert!(scheduled.fires_in(2031));
    assert!(scheduled.fires_in(2036));
    assert!(!scheduled.fires_in(2041), "Out of range even on cadence");
}

#[test]
fn test_parse_malformed_year_range() {
    for range in ["20x6", "2030-2026", "", "2026-2030-2031"] {
        let result = goal("Broken", 1_000.0, range, "yearly", GoalCategory::Expense).schedule();
        assert!(result.is_err(), "Range {range:?} should be rejected");
    }
}

#[test]
fn test_parse_malformed_recurrence_and_target() {
    assert!(
        goal("Broken", 1_000.0, "2026", "sometimes", GoalCategory::Expense)
            .schedule()
            .is_err()
    );
    assert!(
        goal("Broken", 1_000.0, "2026", "every 0 years", GoalCategory::Expense)
            .schedule()
            .is_err()
    );
    assert!(
        goal("Broken", f64::NAN, "2026", "none", GoalCategory::Expense)
            .schedule()
            .is_err()
    );
    assert!(
        goal("Broken", -5.0, "2026", "none", GoalCategory::Expense)
            .schedule()
            .is_err()
    );
}

// ============================================================================
// Firing Inside a Projection
// ============================================================================

#[test]
fn test_yearly_goal_fires_exactly_within_range() {
    // 10-year simulation starting 2025; the goal covers 2026-2030 inclusive.
    let mut profile = quiet_profile(40, 10);
    profile.accounts = vec![savings(1_000_000.0)];
    profile.goals = vec![goal(
        "Travel",
        5_000.0,
        "2026-2030",
        "yearly",
        GoalCategory::Expense,
    )];

    let table = project(&profile).unwrap();
    for row in &table.rows {
        let expected = if (2026..=2030).contains(&row.year) {
            5_000.0
        } else {
            0.0
        };
        assert_eq!(
            row.total_expenses, expected,
            "Year {}: goal amount is injected un-inflated",
            row.year
        );
    }
}

#[test]
fn test_one_off_goal_fires_in_start_year_only() {
    let mut profile = quiet_profile(40, 5);
    profile.accounts = vec![savings(100_000.0)];
    profile.goals = vec![goal("Roof", 15_000.0, "2026-2029", "no", GoalCategory::Expense)];

    let table = project(&profile).unwrap();
    let fired: Vec<i32> = table
        .rows
        .iter()
        .filter(|row| row.total_expenses > 0.0)
        .map(|row| row.year)
        .collect();
    assert_eq!(fired, vec![2026]);
}

#[test]
fn test_investment_goal_deposits_back_into_savings() {
    // The purchase is an expense and a deposit at once: with no growth the
    // combined balance is unchanged, but the expense is visible.
    let mut profile = quiet_profile(40, 1);
    profile.accounts = vec![savings(50_000.0)];
    profile.goals = vec![goal(
        "Rental Unit",
        10_000.0,
        "2025",
        "none",
        GoalCategory::Investment,
    )];

    let table = project(&profile).unwrap();
    let row = table.final_row();
    assert_eq!(row.total_expenses, 10_000.0);
    assert_eq!(row.cash_from_savings, 10_000.0);
    assert_eq!(row.balance_end, 50_000.0, "Expense and deposit cancel out");
}

// ============================================================================
// Funding Reports and Warnings
// ============================================================================

#[test]
fn test_funded_percent_is_capped() {
    let mut profile = quiet_profile(40, 3);
    profile.accounts = vec![savings(1_000_000.0)];
    profile.goals = vec![goal("Small", 1_000.0, "2025", "none", GoalCategory::Expense)];

    let table = project(&profile).unwrap();
    assert_eq!(table.goal_funding.len(), 1);
    assert_eq!(table.goal_funding[0].funded_percent, FUNDED_PERCENT_CAP);
}

#[test]
fn test_funded_percent_partial() {
    let mut profile = quiet_profile(40, 1);
    profile.accounts = vec![savings(150_000.0)];
    profile.goals = vec![goal(
        "College",
        100_000.0,
        "2025",
        "none",
        GoalCategory::Expense,
    )];

    let table = project(&profile).unwrap();
    let funding = &table.goal_funding[0];
    assert_eq!(funding.total_cost, 100_000.0);
    // 50k remains against a 100k cumulative cost.
    assert!((funding.funded_percent - 50.0).abs() < 1e-9);
}

#[test]
fn test_goal_outside_horizon_reports_no_funding() {
    let mut profile = quiet_profile(40, 2);
    profile.accounts = vec![savings(10_000.0)];
    profile.goals = vec![goal("Later", 5_000.0, "2040", "none", GoalCategory::Expense)];

    let table = project(&profile).unwrap();
    assert!(table.goal_funding.is_empty(), "Goal never fired in-horizon");
}

#[test]
fn test_malformed_goal_warns_but_projection_runs() {
    let mut profile = quiet_profile(40, 3);
    profile.accounts = vec![savings(10_000.0)];
    profile.expense_streams = vec![monthly_expense("Living", 100.0)];
    profile.goals = vec![
        goal("Broken", 5_000.0, "not-a-year", "yearly", GoalCategory::Expense),
        goal("Valid", 2_000.0, "2026", "none", GoalCategory::Expense),
    ];

    let table = project(&profile).unwrap();
    assert_eq!(table.rows.len(), 3, "Base projection still executes");
    assert_eq!(table.warnings.len(), 1);
    assert_eq!(table.warnings[0].goal, "Broken");
    assert_eq!(
        table.rows[1].total_expenses,
        1_200.0 + 2_000.0,
        "The remaining valid goal still fires"
    );
}
