//! View rendering
//!
//! Pure formatting of state into display strings. Nothing here reads the
//! clock or touches the state file; "today" is always passed in.

use chrono::{Datelike, Days, NaiveDate};

use crate::state::StreakState;

/// Weekday initials, Monday first
const WEEKDAY_INITIALS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// The tracker banner
pub fn banner() -> String {
    [
        "=========================",
        "   Coding Streak Tracker ",
        "=========================",
    ]
    .join("\n")
}

/// Render the trailing week as a two-line strip
///
/// Covers the 7 days ending at `today`, oldest first. The first line marks
/// each day as checked in (`●`) or missed (`○`); the second carries the
/// matching weekday initials.
pub fn weekly_strip(history: &[NaiveDate], today: NaiveDate) -> String {
    let mut markers = Vec::with_capacity(7);
    let mut labels = Vec::with_capacity(7);

    for offset in (0..7u64).rev() {
        let day = today - Days::new(offset);

        markers.push(if history.contains(&day) { "●" } else { "○" });
        labels.push(WEEKDAY_INITIALS[day.weekday().num_days_from_monday() as usize]);
    }

    format!("{}\n{}", markers.join(" "), labels.join(" "))
}

/// Render the status view: banner, streak counters, weekly strip
pub fn status(state: &StreakState, today: NaiveDate) -> String {
    format!(
        "{}\n🔥 Current streak: {} days\n🏆 Longest streak: {} days\n\n📅 This week’s streak:\n{}",
        banner(),
        state.streak,
        state.longest,
        weekly_strip(&state.history, today)
    )
}

/// Render the history view: banner and one check-in date per line
pub fn history(state: &StreakState) -> String {
    let mut out = format!("{}\n📜 Check-in history:", banner());

    if state.history.is_empty() {
        out.push_str("\nNo check-ins yet.");
    } else {
        for date in &state.history {
            out.push('\n');
            out.push_str(&date.to_string());
        }
    }

    out
}
