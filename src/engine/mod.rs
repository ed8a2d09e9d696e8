//! Check-in transition logic
//!
//! Pure over an injected "today" so day-boundary behavior is testable
//! without touching the system clock.

use chrono::{Days, NaiveDate};

use crate::state::StreakState;

/// Outcome of a check-in attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkin {
    /// A new check-in was recorded; the caller should persist the state
    Recorded { streak: u32, longest: u32 },

    /// Already checked in today; the state was left untouched
    AlreadyToday,
}

/// Apply a check-in for `today` to the state
///
/// At most one check-in per calendar day takes effect: a repeat on the same
/// day returns [`Checkin::AlreadyToday`] without mutating anything. A
/// check-in the day after `last_date` extends the streak; any other gap
/// (including a future-dated `last_date` from a skewed clock or an edited
/// file) resets it to 1.
pub fn check_in(state: &mut StreakState, today: NaiveDate) -> Checkin {
    if state.last_date == Some(today) {
        return Checkin::AlreadyToday;
    }

    let yesterday = today.checked_sub_days(Days::new(1));
    if state.last_date.is_some() && state.last_date == yesterday {
        state.streak += 1;
    } else {
        state.streak = 1;
    }

    state.last_date = Some(today);
    state.longest = state.longest.max(state.streak);

    if !state.checked_in_on(today) {
        state.history.push(today);
    }

    Checkin::Recorded {
        streak: state.streak,
        longest: state.longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_checkin_starts_streak() {
        let mut state = StreakState::default();
        let today = day(2024, 5, 15);

        let result = check_in(&mut state, today);

        assert_eq!(
            result,
            Checkin::Recorded {
                streak: 1,
                longest: 1
            }
        );
        assert_eq!(state.last_date, Some(today));
        assert_eq!(state.history, vec![today]);
    }

    #[test]
    fn test_same_day_is_noop() {
        let mut state = StreakState::default();
        let today = day(2024, 5, 15);

        check_in(&mut state, today);
        let before = state.clone();

        let result = check_in(&mut state, today);

        assert_eq!(result, Checkin::AlreadyToday);
        assert_eq!(state, before);
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let mut state = StreakState::default();
        check_in(&mut state, day(2024, 5, 14));

        let result = check_in(&mut state, day(2024, 5, 15));

        assert_eq!(
            result,
            Checkin::Recorded {
                streak: 2,
                longest: 2
            }
        );
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut state = StreakState::default();
        check_in(&mut state, day(2024, 5, 10));
        check_in(&mut state, day(2024, 5, 11));
        check_in(&mut state, day(2024, 5, 12));

        let result = check_in(&mut state, day(2024, 5, 15));

        assert_eq!(
            result,
            Checkin::Recorded {
                streak: 1,
                longest: 3
            }
        );
    }

    #[test]
    fn test_reset_keeps_longest() {
        let mut state = StreakState {
            streak: 5,
            longest: 9,
            last_date: Some(day(2024, 5, 1)),
            history: vec![day(2024, 5, 1)],
        };

        check_in(&mut state, day(2024, 5, 15));

        assert_eq!(state.streak, 1);
        assert_eq!(state.longest, 9);
    }

    #[test]
    fn test_future_last_date_resets() {
        // Clock skew or a hand-edited file; treated like any other gap
        let mut state = StreakState {
            streak: 4,
            longest: 4,
            last_date: Some(day(2024, 5, 20)),
            history: vec![day(2024, 5, 20)],
        };

        let result = check_in(&mut state, day(2024, 5, 15));

        assert_eq!(
            result,
            Checkin::Recorded {
                streak: 1,
                longest: 4
            }
        );
    }

    #[test]
    fn test_longest_never_below_streak() {
        let mut state = StreakState::default();
        let mut date = day(2024, 5, 1);
        for _ in 0..10 {
            check_in(&mut state, date);
            assert!(state.longest >= state.streak);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_history_stays_unique_and_ordered() {
        let mut state = StreakState::default();
        check_in(&mut state, day(2024, 5, 14));
        check_in(&mut state, day(2024, 5, 15));
        check_in(&mut state, day(2024, 5, 15));

        assert_eq!(state.history, vec![day(2024, 5, 14), day(2024, 5, 15)]);
    }

    #[test]
    fn test_last_date_matches_history_tail() {
        let mut state = StreakState::default();
        check_in(&mut state, day(2024, 5, 14));
        check_in(&mut state, day(2024, 5, 15));

        assert_eq!(state.last_date, state.history.last().copied());
    }
}
