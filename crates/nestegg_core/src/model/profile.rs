//! Household profile: the immutable input to a projection run
//!
//! The profile is fully typed with explicit optional fields and documented
//! defaults, validated once at the engine boundary. Detailed-breakdown and
//! gross-totals input styles are the same shape here: a gross-totals
//! household is simply one income stream plus one expense stream.

use serde::{Deserialize, Serialize};

use super::goals::Goal;
use super::rmd::DivisorSource;
use crate::error::ValidationError;

/// One member of the household. Only the age matters to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub age: u8,
}

/// How an income stream grows year over year.
///
/// Streams without an explicit override track general inflation. Social
/// Security-like streams track the COLA assumption, rental income tracks the
/// rental growth assumption, and `Custom` pins an explicit annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IncomeGrowth {
    #[default]
    Inflation,
    SocialSecurity,
    Rental,
    Custom(f64),
}

/// A named monthly pre-tax income stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStream {
    pub name: String,
    pub monthly_amount: f64,
    #[serde(default)]
    pub growth: IncomeGrowth,
    /// The stream contributes only once the primary member reaches this age
    /// (e.g. Social Security claimed at 62). Growth still compounds from the
    /// first simulated year.
    #[serde(default)]
    pub starts_at_age: Option<u8>,
}

/// A named monthly expense stream. All expenses grow at the inflation rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStream {
    pub name: String,
    pub monthly_amount: f64,
}

/// Classification used by the account aggregator to fold named balances
/// into the projection primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// RMD-eligible retirement balances (IRA, 401k, 403b).
    TaxDeferred,
    /// Liquid non-RMD balances (brokerage, HSA, savings, insurance cash
    /// value, crypto, 529, pension fund cash value).
    TaxableLiquid,
    /// Vehicles, collectibles, business equity, miscellaneous.
    IlliquidOther,
    PrimaryResidence,
    SecondaryResidence,
}

/// A named account balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub name: String,
    pub kind: AccountKind,
    pub balance: f64,
}

/// A named liability line item (mortgage, loan, credit card debt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    pub name: String,
    pub balance: f64,
}

fn default_income_tax_rate() -> f64 {
    0.25
}
fn default_rmd_tax_rate() -> f64 {
    0.25
}
fn default_inflation_rate() -> f64 {
    0.025
}
fn default_investment_return_rate() -> f64 {
    0.05
}
fn default_home_appreciation_rate() -> f64 {
    0.03
}
fn default_ss_cola_rate() -> f64 {
    0.025
}
fn default_rental_growth_rate() -> f64 {
    0.02
}
fn default_simulation_years() -> usize {
    14
}
fn default_start_year() -> i32 {
    2025
}

/// Economic assumptions for a projection run. All rates are fractional
/// annual rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    #[serde(default = "default_income_tax_rate")]
    pub income_tax_rate: f64,
    #[serde(default = "default_rmd_tax_rate")]
    pub rmd_tax_rate: f64,
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,
    #[serde(default = "default_investment_return_rate")]
    pub investment_return_rate: f64,
    #[serde(default = "default_home_appreciation_rate")]
    pub home_appreciation_rate: f64,
    #[serde(default = "default_ss_cola_rate")]
    pub ss_cola_rate: f64,
    #[serde(default = "default_rental_growth_rate")]
    pub rental_growth_rate: f64,
    #[serde(default = "default_simulation_years")]
    pub simulation_years: usize,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    /// Which RMD divisor source to consult (literal IRS table or the linear
    /// closed form).
    #[serde(default)]
    pub divisor_source: DivisorSource,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            income_tax_rate: default_income_tax_rate(),
            rmd_tax_rate: default_rmd_tax_rate(),
            inflation_rate: default_inflation_rate(),
            investment_return_rate: default_investment_return_rate(),
            home_appreciation_rate: default_home_appreciation_rate(),
            ss_cola_rate: default_ss_cola_rate(),
            rental_growth_rate: default_rental_growth_rate(),
            simulation_years: default_simulation_years(),
            start_year: default_start_year(),
            divisor_source: DivisorSource::default(),
        }
    }
}

/// Complete input to a projection run, immutable for the duration of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub primary: Person,
    /// Optional partner. When absent, all partner-scoped computations are
    /// zero.
    #[serde(default)]
    pub partner: Option<Person>,
    #[serde(default)]
    pub income_streams: Vec<IncomeStream>,
    #[serde(default)]
    pub expense_streams: Vec<ExpenseStream>,
    #[serde(default)]
    pub accounts: Vec<AccountBalance>,
    #[serde(default)]
    pub liabilities: Vec<Liability>,
    #[serde(default)]
    pub assumptions: Assumptions,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl HouseholdProfile {
    /// Minimal profile for a single person with no streams or balances.
    #[must_use]
    pub fn for_person(age: u8) -> Self {
        Self {
            primary: Person { age },
            partner: None,
            income_streams: Vec::new(),
            expense_streams: Vec::new(),
            accounts: Vec::new(),
            liabilities: Vec::new(),
            assumptions: Assumptions::default(),
            goals: Vec::new(),
        }
    }

    /// Validate the profile before any simulation year executes.
    ///
    /// Goal entries are intentionally not validated here: malformed goals are
    /// localized to per-goal warnings carried in the output.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.assumptions.simulation_years == 0 {
            return Err(ValidationError::NoYears);
        }

        let a = &self.assumptions;
        let fractions = [
            ("income_tax_rate", a.income_tax_rate),
            ("rmd_tax_rate", a.rmd_tax_rate),
        ];
        for (field, value) in fractions {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::InvalidRate { field, value });
            }
        }
        let rates = [
            ("inflation_rate", a.inflation_rate),
            ("investment_return_rate", a.investment_return_rate),
            ("home_appreciation_rate", a.home_appreciation_rate),
            ("ss_cola_rate", a.ss_cola_rate),
            ("rental_growth_rate", a.rental_growth_rate),
        ];
        for (field, value) in rates {
            if !value.is_finite() {
                return Err(ValidationError::InvalidRate { field, value });
            }
        }

        for account in &self.accounts {
            if !account.balance.is_finite() {
                return Err(ValidationError::InvalidBalance {
                    name: account.name.clone(),
                    value: account.balance,
                });
            }
        }
        for liability in &self.liabilities {
            if !liability.balance.is_finite() {
                return Err(ValidationError::InvalidBalance {
                    name: liability.name.clone(),
                    value: liability.balance,
                });
            }
        }

        for stream in &self.income_streams {
            if !stream.monthly_amount.is_finite() || stream.monthly_amount < 0.0 {
                return Err(ValidationError::InvalidStreamAmount {
                    name: stream.name.clone(),
                    value: stream.monthly_amount,
                });
            }
            if let IncomeGrowth::Custom(rate) = stream.growth
                && !rate.is_finite()
            {
                return Err(ValidationError::InvalidRate {
                    field: "income stream custom growth",
                    value: rate,
                });
            }
        }
        for stream in &self.expense_streams {
            if !stream.monthly_amount.is_finite() || stream.monthly_amount < 0.0 {
                return Err(ValidationError::InvalidStreamAmount {
                    name: stream.name.clone(),
                    value: stream.monthly_amount,
                });
            }
        }

        Ok(())
    }
}
