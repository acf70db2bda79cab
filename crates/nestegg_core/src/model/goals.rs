//! Goal overlay schedule
//!
//! Goals are extra one-off or recurring cash events layered on top of the
//! base projection. They arrive from the caller in loosely-structured form
//! (string year ranges and recurrence descriptions); parsing happens once,
//! and malformed entries become per-goal warnings rather than aborting the
//! projection.

use serde::{Deserialize, Serialize};

/// Funded percentages are reporting-only and capped here.
pub const FUNDED_PERCENT_CAP: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    /// Adds to that year's expenses.
    Expense,
    /// Adds to expenses and earmarks an equal deposit into savings,
    /// modeling a simultaneous expense-and-purchase.
    Investment,
}

/// A goal as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: f64,
    /// `"2026"` or `"2026-2030"`.
    pub year_range: String,
    /// `"none"`/`"no"`, `"yearly"`, or `"every N years"`.
    #[serde(default = "default_recurrence")]
    pub recurrence: String,
    pub category: GoalCategory,
}

fn default_recurrence() -> String {
    "none".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// Fires exactly once, in the range's start year.
    Once,
    /// Fires every year within the range.
    Yearly,
    /// Fires when `(year - start_year) % n == 0`, within the range.
    EveryYears(u32),
}

/// A goal that survived parsing and participates in the projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledGoal {
    pub name: String,
    pub target_amount: f64,
    pub start_year: i32,
    pub end_year: i32,
    pub recurrence: Recurrence,
    pub category: GoalCategory,
}

impl ScheduledGoal {
    /// Whether this goal injects its target amount in `year`.
    #[must_use]
    pub fn fires_in(&self, year: i32) -> bool {
        if year < self.start_year || year > self.end_year {
            return false;
        }
        match self.recurrence {
            Recurrence::Once => year == self.start_year,
            Recurrence::Yearly => true,
            Recurrence::EveryYears(n) => (year - self.start_year) % n as i32 == 0,
        }
    }
}

/// A localized problem with one goal entry. The remaining goals and the base
/// projection still execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalWarning {
    pub goal: String,
    pub message: String,
}

/// Post-run funding report for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFunding {
    pub name: String,
    /// Cumulative cost of the goal across all firings within the horizon.
    pub total_cost: f64,
    /// `final combined savings / total_cost`, as a percentage clamped to
    /// `[0, FUNDED_PERCENT_CAP]`. Reporting only; never fed back into the
    /// projection.
    pub funded_percent: f64,
}

fn parse_year_range(range: &str) -> Option<(i32, i32)> {
    let trimmed = range.trim();
    let (start, end) = match trimmed.split_once('-') {
        Some((start, end)) => (start.trim().parse().ok()?, end.trim().parse().ok()?),
        None => {
            let year = trimmed.parse().ok()?;
            (year, year)
        }
    };
    (start <= end).then_some((start, end))
}

fn parse_recurrence(recurrence: &str) -> Option<Recurrence> {
    let lowered = recurrence.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "" | "none" | "no" | "once" => return Some(Recurrence::Once),
        "yearly" => return Some(Recurrence::Yearly),
        _ => {}
    }
    // "every N years" (also accepts "every 1 year")
    let mut words = lowered.split_whitespace();
    if words.next() != Some("every") {
        return None;
    }
    let n: u32 = words.next()?.parse().ok()?;
    if n == 0 || !matches!(words.next(), Some("year" | "years")) || words.next().is_some() {
        return None;
    }
    Some(Recurrence::EveryYears(n))
}

impl Goal {
    /// Parse one goal entry, turning any malformed field into a warning.
    pub fn schedule(&self) -> Result<ScheduledGoal, GoalWarning> {
        let warn = |message: String| GoalWarning {
            goal: self.name.clone(),
            message,
        };

        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(warn(format!(
                "target amount {} is not a positive number",
                self.target_amount
            )));
        }
        let (start_year, end_year) = parse_year_range(&self.year_range)
            .ok_or_else(|| warn(format!("year range {:?} is malformed", self.year_range)))?;
        let recurrence = parse_recurrence(&self.recurrence)
            .ok_or_else(|| warn(format!("recurrence {:?} is malformed", self.recurrence)))?;

        Ok(ScheduledGoal {
            name: self.name.clone(),
            target_amount: self.target_amount,
            start_year,
            end_year,
            recurrence,
            category: self.category,
        })
    }
}

/// Parse every goal, splitting the schedule from the per-goal warnings.
pub fn parse_goals(goals: &[Goal]) -> (Vec<ScheduledGoal>, Vec<GoalWarning>) {
    let mut scheduled = Vec::new();
    let mut warnings = Vec::new();
    for goal in goals {
        match goal.schedule() {
            Ok(s) => scheduled.push(s),
            Err(w) => warnings.push(w),
        }
    }
    (scheduled, warnings)
}
