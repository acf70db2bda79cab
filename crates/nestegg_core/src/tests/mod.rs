//! Integration tests for the nestegg projection engine
//!
//! Tests are organized by topic:
//! - `aggregate` - Account aggregation into projection primitives
//! - `profile` - Profile JSON shape and defaults
//! - `rmd` - Divisor lookup and required minimum withdrawals
//! - `projection` - Deterministic projector and cash-flow ordering
//! - `goals` - Goal overlay parsing, firing, and funding reports
//! - `monte_carlo` - Ensemble reproducibility and aggregation

mod aggregate;
mod goals;
mod monte_carlo;

use crate::model::{
    AccountBalance, AccountKind, ExpenseStream, HouseholdProfile, IncomeGrowth, IncomeStream,
};

/// A profile with flat streams and rates zeroed out, so tests can reason
/// about single effects in isolation.
pub(crate) fn quiet_profile(age: u8, years: usize) -> HouseholdProfile {
    let mut profile = HouseholdProfile::for_person(age);
    profile.assumptions.simulation_years = years;
    profile.assumptions.income_tax_rate = 0.0;
    profile.assumptions.rmd_tax_rate = 0.0;
    profile.assumptions.inflation_rate = 0.0;
    profile.assumptions.investment_return_rate = 0.0;
    profile.assumptions.home_appreciation_rate = 0.0;
    profile.assumptions.ss_cola_rate = 0.0;
    profile.assumptions.rental_growth_rate = 0.0;
    profile
}

pub(crate) fn savings(balance: f64) -> AccountBalance {
    AccountBalance {
        name: "Savings".to_string(),
        kind: AccountKind::TaxableLiquid,
        balance,
    }
}

pub(crate) fn ira(balance: f64) -> AccountBalance {
    AccountBalance {
        name: "IRA".to_string(),
        kind: AccountKind::TaxDeferred,
        balance,
    }
}

pub(crate) fn monthly_income(name: &str, amount: f64) -> IncomeStream {
    IncomeStream {
        name: name.to_string(),
        monthly_amount: amount,
        growth: IncomeGrowth::Custom(0.0),
        starts_at_age: None,
    }
}

pub(crate) fn monthly_expense(name: &str, amount: f64) -> ExpenseStream {
    ExpenseStream {
        name: name.to_string(),
        monthly_amount: amount,
    }
}
