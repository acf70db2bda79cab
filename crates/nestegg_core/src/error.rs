use std::fmt;

/// Errors raised by input validation, before any simulation year executes.
///
/// Modeling edge cases (negative balances, bankruptcy, 0%- or 150%-funded
/// goals) are deliberately NOT errors: they are valid terminal states
/// surfaced as data. Per-goal problems are localized to [`GoalWarning`]s
/// carried in the output instead of aborting the projection.
///
/// [`GoalWarning`]: crate::model::GoalWarning
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `simulation_years` was zero; a zero-length table is never produced.
    NoYears,
    /// Monte Carlo trial count was zero.
    NoTrials,
    /// An assumption rate was NaN or infinite, or a tax rate fell outside [0, 1].
    InvalidRate { field: &'static str, value: f64 },
    /// An account or liability balance was NaN or infinite.
    InvalidBalance { name: String, value: f64 },
    /// A stream's monthly amount was NaN, infinite, or negative.
    InvalidStreamAmount { name: String, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoYears => {
                write!(f, "simulation_years must be at least 1")
            }
            ValidationError::NoTrials => {
                write!(f, "trial count must be at least 1")
            }
            ValidationError::InvalidRate { field, value } => {
                write!(f, "assumption {field} has invalid value {value}")
            }
            ValidationError::InvalidBalance { name, value } => {
                write!(f, "balance {name:?} has invalid value {value}")
            }
            ValidationError::InvalidStreamAmount { name, value } => {
                write!(f, "stream {name:?} has invalid monthly amount {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
