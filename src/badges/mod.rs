//! Badge detection
//!
//! Maps a streak count to a one-time badge. A badge fires only on the day
//! the streak exactly hits its threshold, never on the days past it.

/// Milestone badges, in ascending threshold order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Bronze,
    Silver,
    Gold,
    Champion,
}

impl Badge {
    /// Announcement line printed when the badge unlocks
    pub fn announcement(&self) -> &'static str {
        match self {
            Badge::Bronze => "🥉 7-day streak badge unlocked!",
            Badge::Silver => "🥈 30-day streak badge unlocked!",
            Badge::Gold => "🥇 100-day streak badge unlocked!",
            Badge::Champion => "🏆 1-year streak badge unlocked!",
        }
    }
}

/// Threshold-to-badge mapping
///
/// Carried as a value rather than a process-wide table so tests can supply
/// their own thresholds.
#[derive(Debug, Clone)]
pub struct BadgeTable {
    thresholds: Vec<(u32, Badge)>,
}

impl Default for BadgeTable {
    fn default() -> Self {
        Self {
            thresholds: vec![
                (7, Badge::Bronze),
                (30, Badge::Silver),
                (100, Badge::Gold),
                (365, Badge::Champion),
            ],
        }
    }
}

impl BadgeTable {
    /// Badge unlocked by reaching exactly this streak count, if any
    pub fn unlocked(&self, streak: u32) -> Option<Badge> {
        self.thresholds
            .iter()
            .find(|(threshold, _)| *threshold == streak)
            .map(|(_, badge)| *badge)
    }
}
