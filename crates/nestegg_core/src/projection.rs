//! Deterministic projector
//!
//! Drives the cash-flow step across the simulation horizon with fixed
//! assumptions, producing one projection table. Pure: no randomness, no I/O.

use crate::aggregate::initial_state;
use crate::cashflow::{YearInput, YearRates, advance_year};
use crate::error::Result;
use crate::model::{
    FUNDED_PERCENT_CAP, GoalCategory, GoalFunding, HouseholdProfile, IncomeGrowth, ProjectionTable,
    parse_goals,
};

/// Per-stream cumulative growth factors.
///
/// Year zero uses a factor of 1.0 (streams are quoted in first-year
/// dollars); each subsequent year multiplies in that year's rate. With fixed
/// rates this reduces to `(1 + r)^i`; with per-year sampled rates the
/// factors compose the sampled path.
struct StreamLedger {
    income_factors: Vec<f64>,
    expense_factors: Vec<f64>,
}

impl StreamLedger {
    fn new(profile: &HouseholdProfile) -> Self {
        Self {
            income_factors: vec![1.0; profile.income_streams.len()],
            expense_factors: vec![1.0; profile.expense_streams.len()],
        }
    }

    /// Annualized totals for the current year. Streams gated on an age
    /// threshold contribute only once the primary member has reached it.
    fn totals(&self, profile: &HouseholdProfile, age: u8) -> (f64, f64) {
        let income: f64 = profile
            .income_streams
            .iter()
            .zip(&self.income_factors)
            .filter(|(stream, _)| stream.starts_at_age.is_none_or(|start| age >= start))
            .map(|(stream, factor)| stream.monthly_amount * 12.0 * factor)
            .sum();
        let expenses: f64 = profile
            .expense_streams
            .iter()
            .zip(&self.expense_factors)
            .map(|(stream, factor)| stream.monthly_amount * 12.0 * factor)
            .sum();
        (income, expenses)
    }

    /// Compound every factor by one year at the given rates.
    fn advance(&mut self, profile: &HouseholdProfile, rates: &YearRates) {
        let assumptions = &profile.assumptions;
        for (stream, factor) in profile.income_streams.iter().zip(&mut self.income_factors) {
            let rate = match stream.growth {
                IncomeGrowth::Inflation => rates.inflation,
                IncomeGrowth::SocialSecurity => assumptions.ss_cola_rate,
                IncomeGrowth::Rental => assumptions.rental_growth_rate,
                IncomeGrowth::Custom(rate) => rate,
            };
            *factor *= 1.0 + rate;
        }
        for factor in &mut self.expense_factors {
            *factor *= 1.0 + rates.inflation;
        }
    }
}

/// Run a deterministic projection over the profile's horizon.
///
/// Fails only on invalid input; the projection itself never raises for
/// numeric edge cases.
pub fn project(profile: &HouseholdProfile) -> Result<ProjectionTable> {
    profile.validate()?;
    let rates = vec![
        YearRates::fixed(&profile.assumptions);
        profile.assumptions.simulation_years
    ];
    Ok(project_with_rates(profile, &rates))
}

/// Shared driver for the deterministic and Monte Carlo projectors: one
/// already-validated profile, one rate per simulated year.
pub(crate) fn project_with_rates(profile: &HouseholdProfile, rates: &[YearRates]) -> ProjectionTable {
    debug_assert_eq!(rates.len(), profile.assumptions.simulation_years);

    let assumptions = &profile.assumptions;
    let (goals, warnings) = parse_goals(&profile.goals);
    let mut goal_costs = vec![0.0_f64; goals.len()];

    let mut state = initial_state(profile);
    let mut ledger = StreamLedger::new(profile);
    let mut rows = Vec::with_capacity(assumptions.simulation_years);

    for (index, year_rates) in rates.iter().enumerate() {
        let year = assumptions.start_year + index as i32;
        let age_offset = u8::try_from(index).unwrap_or(u8::MAX);
        let age = profile.primary.age.saturating_add(age_offset);
        let partner_age = profile
            .partner
            .map(|p| p.age.saturating_add(age_offset));

        let (total_income, mut total_expenses) = ledger.totals(profile, age);

        // Goal overlay: injected amounts are not inflated.
        let mut goal_deposits = 0.0;
        for (goal, cost) in goals.iter().zip(&mut goal_costs) {
            if goal.fires_in(year) {
                total_expenses += goal.target_amount;
                *cost += goal.target_amount;
                if goal.category == GoalCategory::Investment {
                    goal_deposits += goal.target_amount;
                }
            }
        }

        let input = YearInput {
            year,
            age,
            partner_age,
            total_income,
            total_expenses,
            goal_deposits,
            rates: *year_rates,
        };
        rows.push(advance_year(&mut state, &input, assumptions));
        ledger.advance(profile, year_rates);
    }

    let final_balance = state.combined_balance();
    let goal_funding = goals
        .iter()
        .zip(&goal_costs)
        .filter(|(_, cost)| **cost > 0.0)
        .map(|(goal, cost)| GoalFunding {
            name: goal.name.clone(),
            total_cost: *cost,
            funded_percent: (final_balance / cost * 100.0).clamp(0.0, FUNDED_PERCENT_CAP),
        })
        .collect();

    ProjectionTable {
        rows,
        goal_funding,
        warnings,
        ending_state: state,
    }
}
