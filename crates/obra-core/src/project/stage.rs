//! Execution stages

use super::StageId;
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(100);

    /// Build a progress value, rejecting anything outside 0..=100
    pub fn new(percent: i64) -> Result<Self, CoreError> {
        if (0..=100).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(CoreError::ProgressOutOfRange { value: percent })
        }
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<i64> for Progress {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Progress::new(value)
    }
}

impl From<Progress> for i64 {
    fn from(progress: Progress) -> Self {
        i64::from(progress.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A phase of execution with its own progress and cost tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStage {
    pub id: StageId,
    pub name: String,
    pub progress: Progress,
    pub estimated_cost: Decimal,
    pub actual_cost: Decimal,
}

impl ProjectStage {
    /// Cost variance: `actual - estimated`.
    ///
    /// Not clamped. A negative value means the stage is under budget.
    /// Saturates at the `Decimal` bounds.
    pub fn variance(&self) -> Decimal {
        self.actual_cost.saturating_sub(self.estimated_cost)
    }

    pub fn is_over_budget(&self) -> bool {
        self.variance() > Decimal::ZERO
    }
}

#[cfg(test)]
#[path = "stage_test.rs"]
mod tests;
