//! Single-year cash-flow transition
//!
//! The waterfall runs in a fixed order: income, tax, shortfall, RMD offset,
//! savings drawdown, growth, asset appreciation, amortization. The order is
//! load-bearing; reordering changes numeric results.

use crate::model::{Assumptions, DivisorSource, ProjectionRow, RMD_START_AGE};
use crate::state::ProjectionState;

/// Rates in effect for one simulated year. The deterministic projector uses
/// the fixed assumption values every year; the Monte Carlo projector samples
/// a fresh set per trial per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRates {
    pub growth: f64,
    pub inflation: f64,
    pub home_appreciation: f64,
}

impl YearRates {
    /// The fixed rates from the base assumptions.
    #[must_use]
    pub fn fixed(assumptions: &Assumptions) -> Self {
        Self {
            growth: assumptions.investment_return_rate,
            inflation: assumptions.inflation_rate,
            home_appreciation: assumptions.home_appreciation_rate,
        }
    }
}

/// Inputs to one year's transition. Stream totals arrive already inflated
/// and annualized; goal injections for the year are folded into
/// `total_expenses`, with investment-category deposits carried separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearInput {
    pub year: i32,
    pub age: u8,
    pub partner_age: Option<u8>,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Investment-category goal amounts deposited into savings at year end.
    pub goal_deposits: f64,
    pub rates: YearRates,
}

/// RMDs owed this year against the shared tax-deferred balance.
///
/// With a partner present the balance is split 50/50 purely for divisor
/// lookup; both halves are deducted from the shared balance afterwards.
/// Members under the threshold age owe exactly zero without consulting the
/// divisor table.
#[must_use]
pub fn required_minimum(
    tax_deferred_balance: f64,
    age: u8,
    partner_age: Option<u8>,
    source: DivisorSource,
) -> (f64, f64) {
    if tax_deferred_balance <= 0.0 {
        return (0.0, 0.0);
    }
    let share = match partner_age {
        Some(_) => tax_deferred_balance / 2.0,
        None => tax_deferred_balance,
    };
    let owed = |member_age: u8| -> f64 {
        if member_age < RMD_START_AGE {
            return 0.0;
        }
        source.divisor(member_age).map_or(0.0, |d| share / d)
    };
    let primary = owed(age);
    let partner = partner_age.map_or(0.0, owed);
    (primary, partner)
}

/// Advance the projection state by one year, returning the observable row.
///
/// Never fails: negative balances are valid (if alarming) terminal states
/// signaling projected insolvency, surfaced to the caller as data.
pub fn advance_year(
    state: &mut ProjectionState,
    input: &YearInput,
    assumptions: &Assumptions,
) -> ProjectionRow {
    let balance_open = state.combined_balance();
    let taxable_open = state.taxable_balance;

    // Income tax, then the shortfall the year must fund.
    let net_income = input.total_income * (1.0 - assumptions.income_tax_rate);
    let net_draw = input.total_expenses - net_income;

    // RMD comes out of the tax-deferred balance immediately; the withdrawn
    // slice earns nothing this year.
    let (rmd_primary, rmd_partner) = required_minimum(
        state.tax_deferred_balance,
        input.age,
        input.partner_age,
        assumptions.divisor_source,
    );
    let rmd_total = rmd_primary + rmd_partner;
    state.tax_deferred_balance -= rmd_total;
    let net_rmd = rmd_total * (1.0 - assumptions.rmd_tax_rate);

    // After-tax RMD proceeds cover the shortfall first; only the residual is
    // drawn from the taxable balance. Unused RMD proceeds and any income
    // surplus are deposited back into savings at year end rather than
    // dropped.
    let cash_from_savings = (net_draw - net_rmd).max(0.0);
    let unused_rmd = (net_rmd - net_draw.max(0.0)).max(0.0);
    let surplus = (-net_draw).max(0.0);
    let deposits = unused_rmd + surplus + input.goal_deposits;

    // Growth applies to the opening balances before the draw; year-end
    // deposits earn nothing until next year.
    let tax_deferred_after_rmd = state.tax_deferred_balance;
    state.tax_deferred_balance = tax_deferred_after_rmd * (1.0 + input.rates.growth);
    let taxable_growth = taxable_open * input.rates.growth;
    let taxable_before_draw = taxable_open + taxable_growth;
    state.taxable_balance = taxable_before_draw - cash_from_savings + deposits;

    let balance_growth = tax_deferred_after_rmd * input.rates.growth + taxable_growth;
    let balance_before_draw = state.tax_deferred_balance + taxable_before_draw;
    let balance_end = state.combined_balance();

    state.primary_home_value *= 1.0 + input.rates.home_appreciation;
    state.secondary_home_value *= 1.0 + input.rates.home_appreciation;

    // Straight-line amortization of the original debt across the horizon.
    let amortization = state.original_liabilities / assumptions.simulation_years as f64;
    state.liabilities_balance = (state.liabilities_balance - amortization).max(0.0);

    ProjectionRow {
        year: input.year,
        age: input.age,
        partner_age: input.partner_age,
        total_income: input.total_income,
        total_expenses: input.total_expenses,
        net_draw,
        rmd_primary,
        rmd_partner,
        net_rmd_used: net_rmd,
        cash_from_savings,
        balance_open,
        balance_growth,
        balance_before_draw,
        balance_end,
        primary_home_value: state.primary_home_value,
        secondary_home_value: state.secondary_home_value,
        total_assets: state.total_assets(),
        total_liabilities: state.liabilities_balance,
        net_worth: state.net_worth(),
    }
}
