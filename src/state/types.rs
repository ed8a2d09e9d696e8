use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted streak record
///
/// Invariants maintained by the check-in transition:
/// - `longest >= streak` after every transition
/// - `last_date`, when set, is the most recent entry in `history`
/// - `history` holds each date at most once, in append order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive check-in days ending at `last_date`
    pub streak: u32,

    /// Historical maximum of `streak`
    pub longest: u32,

    /// Most recent check-in date, absent before the first check-in
    pub last_date: Option<NaiveDate>,

    /// Every date a check-in occurred, in append order
    pub history: Vec<NaiveDate>,
}

impl Default for StreakState {
    fn default() -> Self {
        Self {
            streak: 0,
            longest: 0,
            last_date: None,
            history: Vec::new(),
        }
    }
}

impl StreakState {
    /// Whether a check-in was ever recorded on the given date
    pub fn checked_in_on(&self, date: NaiveDate) -> bool {
        self.history.contains(&date)
    }
}
