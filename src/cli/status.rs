use chrono::Local;

use crate::config::Config;
use crate::error::Result;
use crate::render;
use crate::state;

/// Show the current streak without checking in
pub fn run() -> Result<()> {
    let config = Config::default();
    let today = Local::now().date_naive();

    let streak_state = state::load(&config.state_file)?;

    println!("{}", render::status(&streak_state, today));

    Ok(())
}
