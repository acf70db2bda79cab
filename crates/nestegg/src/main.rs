mod export;
mod format;
mod logging;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use nestegg_core::model::HouseholdProfile;
use nestegg_core::monte_carlo::{McConfig, project_monte_carlo};
use nestegg_core::projection::project;

#[derive(Parser, Debug)]
#[command(name = "nestegg")]
#[command(about = "A household retirement projection simulator")]
struct Args {
    /// Path to a household profile JSON file
    #[arg(short, long)]
    profile: PathBuf,

    /// Run a Monte Carlo ensemble instead of a single deterministic projection
    #[arg(long)]
    monte_carlo: bool,

    /// Number of Monte Carlo trials
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// Master seed for a reproducible ensemble
    #[arg(long)]
    seed: Option<u64>,

    /// Write the projection table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    let raw = fs::read_to_string(&args.profile)
        .wrap_err_with(|| format!("failed to read profile {}", args.profile.display()))?;
    let profile: HouseholdProfile =
        serde_json::from_str(&raw).wrap_err("profile JSON did not match the expected shape")?;
    tracing::info!(
        path = %args.profile.display(),
        years = profile.assumptions.simulation_years,
        "loaded household profile"
    );

    let table = if args.monte_carlo {
        let config = McConfig {
            trials: args.trials,
            seed: args.seed,
            ..McConfig::default()
        };
        let ensemble = project_monte_carlo(&profile, &config)?;
        format::print_ensemble(&ensemble);
        ensemble.representative
    } else {
        project(&profile)?
    };

    for warning in &table.warnings {
        tracing::warn!(goal = %warning.goal, "skipped goal: {}", warning.message);
    }

    format::print_table(&table);
    format::print_goal_funding(&table);

    if let Some(path) = &args.csv {
        export::write_csv(path, &table)
            .wrap_err_with(|| format!("failed to write CSV to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote projection CSV");
    }

    Ok(())
}
