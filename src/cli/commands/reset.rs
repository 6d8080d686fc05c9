use crate::cli::commands::parse_shift;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::Engine;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time;

/// Clear the active day's ledger, in memory and in storage.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { shift } = cmd {
        let shift = match shift {
            Some(s) => Some(parse_shift(s)?),
            None => None,
        };

        let engine = Engine::new(cfg)?;
        let now = time::now_in(engine.calendar().tz);
        let day = engine.reset(shift, now)?;

        match shift {
            Some(s) => messages::success(format!("Cleared {} shift for {}", s.name(), day)),
            None => messages::success(format!("Cleared all shifts for {}", day)),
        }
    }
    Ok(())
}
