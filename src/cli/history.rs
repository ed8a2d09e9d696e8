use crate::config::Config;
use crate::error::Result;
use crate::render;
use crate::state;

/// List every check-in date in chronological order
pub fn run() -> Result<()> {
    let config = Config::default();

    let streak_state = state::load(&config.state_file)?;

    println!("{}", render::history(&streak_state));

    Ok(())
}
