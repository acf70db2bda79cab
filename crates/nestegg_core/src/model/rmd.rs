//! Required Minimum Distribution (RMD) divisor lookup
//!
//! The IRS requires minimum withdrawals from tax-deferred accounts starting
//! at age 73 (as of 2024), computed as balance divided by an age-indexed
//! life-expectancy divisor. Two divisor sources are supported: the literal
//! IRS Uniform Lifetime Table (2024) and a linear closed-form approximation.
//! The two diverge by a few tenths at several ages; the table is the default
//! source of truth.

use serde::{Deserialize, Serialize};

/// No RMD is owed below this age; the cash-flow step must not consult the
/// divisor at all for younger members.
pub const RMD_START_AGE: u8 = 73;

/// IRS Uniform Lifetime Table (2024), ages 73 through 120.
const UNIFORM_LIFETIME_2024: [(u8, f64); 48] = [
    (73, 26.5),
    (74, 25.5),
    (75, 24.6),
    (76, 23.7),
    (77, 22.9),
    (78, 22.0),
    (79, 21.1),
    (80, 20.2),
    (81, 19.4),
    (82, 18.5),
    (83, 17.7),
    (84, 16.8),
    (85, 16.0),
    (86, 15.2),
    (87, 14.4),
    (88, 13.7),
    (89, 12.9),
    (90, 12.2),
    (91, 11.5),
    (92, 10.8),
    (93, 10.1),
    (94, 9.5),
    (95, 8.9),
    (96, 8.4),
    (97, 7.8),
    (98, 7.3),
    (99, 6.8),
    (100, 6.4),
    (101, 6.0),
    (102, 5.6),
    (103, 5.2),
    (104, 4.9),
    (105, 4.6),
    (106, 4.3),
    (107, 4.1),
    (108, 3.9),
    (109, 3.7),
    (110, 3.5),
    (111, 3.4),
    (112, 3.3),
    (113, 3.1),
    (114, 3.0),
    (115, 2.9),
    (116, 2.8),
    (117, 2.7),
    (118, 2.5),
    (119, 2.3),
    (120, 2.0),
];

/// Which divisor source the projection consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DivisorSource {
    /// The literal IRS Uniform Lifetime Table (2024). Ages beyond 120 reuse
    /// the age-120 divisor.
    #[default]
    UniformLifetime2024,
    /// `divisor(age) = 27.0 − 0.9·(age − 72)` for ages 73 through 100; ages
    /// beyond 100 reuse the age-100 value so the divisor stays positive.
    ClosedForm,
}

impl DivisorSource {
    /// Life-expectancy divisor for `age`.
    ///
    /// Returns `None` below [`RMD_START_AGE`]. For any age at or above the
    /// threshold the lookup never fails: ages past the end of the table (or
    /// past 100 for the closed form) clamp to the last defined value.
    #[must_use]
    pub fn divisor(self, age: u8) -> Option<f64> {
        if age < RMD_START_AGE {
            return None;
        }
        let divisor = match self {
            DivisorSource::UniformLifetime2024 => UNIFORM_LIFETIME_2024
                .iter()
                .find(|(table_age, _)| *table_age == age)
                .map_or_else(|| UNIFORM_LIFETIME_2024[UNIFORM_LIFETIME_2024.len() - 1].1, |(_, d)| *d),
            DivisorSource::ClosedForm => {
                let capped = age.min(100);
                27.0 - 0.9 * f64::from(capped - 72)
            }
        };
        // An out-of-domain divisor must never reach the balance division.
        (divisor > 0.0).then_some(divisor)
    }
}
