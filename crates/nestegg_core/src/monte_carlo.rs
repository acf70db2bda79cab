//! Monte Carlo projector
//!
//! Runs many independent projections, each with per-year rates sampled from
//! normal distributions around the base assumptions, and aggregates them
//! into percentile bands and a per-year bankruptcy probability.
//!
//! Randomness is injected per trial: every trial derives its own `SmallRng`
//! sub-stream from the master seed, so a seeded ensemble is bit-identical no
//! matter how trials are scheduled across threads. Trials are grouped into
//! fixed-size batches; the `parallel` feature fans batches across rayon.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::cashflow::YearRates;
use crate::error::{Result, ValidationError};
use crate::model::{HouseholdProfile, MonteCarloEnsemble, YearlyDistribution};
use crate::percentiles::{percentile, standard};
use crate::projection::project_with_rates;

const MAX_BATCH_SIZE: usize = 100;

fn default_trials() -> usize {
    1000
}
fn default_sigma_growth() -> f64 {
    0.02
}
fn default_sigma_inflation() -> f64 {
    0.01
}
fn default_sigma_home() -> f64 {
    0.01
}

/// Monte Carlo run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct McConfig {
    /// Number of independent trials. Must be at least 1.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Master seed. `None` draws a fresh seed; the seed actually used is
    /// reported on the ensemble either way.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Standard deviation of the sampled investment return rate.
    #[serde(default = "default_sigma_growth")]
    pub sigma_growth: f64,
    /// Standard deviation of the sampled inflation rate.
    #[serde(default = "default_sigma_inflation")]
    pub sigma_inflation: f64,
    /// Standard deviation of the sampled home appreciation rate.
    #[serde(default = "default_sigma_home")]
    pub sigma_home: f64,
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            seed: None,
            sigma_growth: default_sigma_growth(),
            sigma_inflation: default_sigma_inflation(),
            sigma_home: default_sigma_home(),
        }
    }
}

/// The three rate distributions shared by every trial.
#[derive(Debug, Clone, Copy)]
struct RateDistributions {
    growth: Normal<f64>,
    inflation: Normal<f64>,
    home: Normal<f64>,
}

impl RateDistributions {
    fn new(profile: &HouseholdProfile, config: &McConfig) -> Result<Self> {
        let assumptions = &profile.assumptions;
        let normal = |field, mean: f64, sigma: f64| {
            Normal::new(mean, sigma).map_err(|_| ValidationError::InvalidRate {
                field,
                value: sigma,
            })
        };
        Ok(Self {
            growth: normal(
                "sigma_growth",
                assumptions.investment_return_rate,
                config.sigma_growth,
            )?,
            inflation: normal("sigma_inflation", assumptions.inflation_rate, config.sigma_inflation)?,
            home: normal(
                "sigma_home",
                assumptions.home_appreciation_rate,
                config.sigma_home,
            )?,
        })
    }

    /// Sample one trial's per-year rate path from its sub-stream seed.
    fn sample_path(&self, years: usize, trial_seed: u64) -> Vec<YearRates> {
        let mut rng = SmallRng::seed_from_u64(trial_seed);
        (0..years)
            .map(|_| YearRates {
                growth: self.growth.sample(&mut rng),
                inflation: self.inflation.sample(&mut rng),
                home_appreciation: self.home.sample(&mut rng),
            })
            .collect()
    }
}

/// The scalar outcomes retained per trial; the representative trial's full
/// table is replayed from its seed after aggregation.
struct TrialOutcome {
    trial_seed: u64,
    /// Ending combined balance per simulated year, in order.
    balances: Vec<f64>,
    final_net_worth: f64,
}

fn run_trial(
    profile: &HouseholdProfile,
    distributions: &RateDistributions,
    trial_seed: u64,
) -> TrialOutcome {
    let years = profile.assumptions.simulation_years;
    let rates = distributions.sample_path(years, trial_seed);
    let table = project_with_rates(profile, &rates);
    TrialOutcome {
        trial_seed,
        balances: table.rows.iter().map(|row| row.balance_end).collect(),
        final_net_worth: table.final_net_worth(),
    }
}

/// Run a Monte Carlo projection.
///
/// Trials are independent and embarrassingly parallel; batches derive
/// deterministic sub-stream seeds from the master seed, so two calls with
/// the same profile, config, and seed produce bit-identical ensembles.
pub fn project_monte_carlo(
    profile: &HouseholdProfile,
    config: &McConfig,
) -> Result<MonteCarloEnsemble> {
    profile.validate()?;
    if config.trials == 0 {
        return Err(ValidationError::NoTrials);
    }
    let distributions = RateDistributions::new(profile, config)?;
    let master_seed = config.seed.unwrap_or_else(rand::random);

    let num_batches = config.trials.div_ceil(MAX_BATCH_SIZE);
    let run_batch = |batch: usize| {
        let mut rng = SmallRng::seed_from_u64(master_seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            config.trials - batch * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };
        (0..batch_size)
            .map(|_| {
                let trial_seed = rng.next_u64();
                run_trial(profile, &distributions, trial_seed)
            })
            .collect::<Vec<_>>()
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<TrialOutcome> = (0..num_batches).into_par_iter().flat_map(run_batch).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<TrialOutcome> = (0..num_batches).flat_map(run_batch).collect();

    Ok(aggregate(profile, config, master_seed, &outcomes, &distributions))
}

fn aggregate(
    profile: &HouseholdProfile,
    config: &McConfig,
    master_seed: u64,
    outcomes: &[TrialOutcome],
    distributions: &RateDistributions,
) -> MonteCarloEnsemble {
    let years = profile.assumptions.simulation_years;
    let start_year = profile.assumptions.start_year;
    let trials = outcomes.len();

    let mut yearly = Vec::with_capacity(years);
    let mut median_final_balance = 0.0;
    for year_index in 0..years {
        let mut column: Vec<f64> = outcomes
            .iter()
            .map(|outcome| outcome.balances[year_index])
            .collect();
        column.sort_unstable_by(f64::total_cmp);
        let bankrupt = column.iter().filter(|balance| **balance < 0.0).count();
        let median = percentile(&column, standard::P50);
        if year_index == years - 1 {
            median_final_balance = median;
        }
        yearly.push(YearlyDistribution {
            year: start_year + year_index as i32,
            p10: percentile(&column, standard::P10),
            median,
            p90: percentile(&column, standard::P90),
            bankruptcy_probability: bankrupt as f64 / trials as f64 * 100.0,
        });
    }

    let mut final_net_worths: Vec<f64> =
        outcomes.iter().map(|outcome| outcome.final_net_worth).collect();
    final_net_worths.sort_unstable_by(f64::total_cmp);
    let final_net_worth_percentiles = vec![
        (standard::P10, percentile(&final_net_worths, standard::P10)),
        (standard::P50, percentile(&final_net_worths, standard::P50)),
        (standard::P90, percentile(&final_net_worths, standard::P90)),
    ];

    // Replay the trial closest to the ensemble median for a full table.
    let representative_seed = outcomes
        .iter()
        .min_by(|a, b| {
            let da = (a.balances[years - 1] - median_final_balance).abs();
            let db = (b.balances[years - 1] - median_final_balance).abs();
            da.total_cmp(&db)
        })
        .map_or(master_seed, |outcome| outcome.trial_seed);
    let representative =
        project_with_rates(profile, &distributions.sample_path(years, representative_seed));

    MonteCarloEnsemble {
        trials: config.trials,
        seed: master_seed,
        yearly,
        final_net_worth_percentiles,
        representative,
    }
}
