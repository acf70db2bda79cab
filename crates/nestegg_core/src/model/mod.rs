mod goals;
mod profile;
mod results;
mod rmd;

pub use goals::{
    FUNDED_PERCENT_CAP, Goal, GoalCategory, GoalFunding, GoalWarning, Recurrence, ScheduledGoal,
    parse_goals,
};
pub use profile::{
    AccountBalance, AccountKind, Assumptions, ExpenseStream, HouseholdProfile, IncomeGrowth,
    IncomeStream, Liability, Person,
};
pub use results::{
    MonteCarloEnsemble, ProjectionRow, ProjectionTable, YearlyDistribution, final_percentile,
};
pub use rmd::{DivisorSource, RMD_START_AGE};
