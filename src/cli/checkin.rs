use chrono::Local;

use crate::badges::BadgeTable;
use crate::config::Config;
use crate::engine::{self, Checkin};
use crate::error::Result;
use crate::render;
use crate::state;

/// Record today's check-in and show the updated streak
pub fn run() -> Result<()> {
    let config = Config::default();
    let today = Local::now().date_naive();

    let mut streak_state = state::load(&config.state_file)?;

    match engine::check_in(&mut streak_state, today) {
        Checkin::AlreadyToday => {
            println!("You already checked in today!");
        }
        Checkin::Recorded { streak, longest } => {
            // Persist before announcing; a failed write must not print success
            state::save(&streak_state, &config.state_file)?;

            println!("{}", render::banner());
            println!("✅ Checked in for {}", today);
            println!("🔥 Current streak: {} days", streak);
            println!("🏆 Longest streak: {} days", longest);

            if let Some(badge) = BadgeTable::default().unlocked(streak) {
                println!("{}", badge.announcement());
            }

            println!("\n📅 This week’s streak:");
            println!("{}", render::weekly_strip(&streak_state.history, today));
        }
    }

    Ok(())
}
