use crate::cli::commands::parse_shift;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::Engine;
use crate::errors::AppResult;
use crate::report;
use crate::utils::time;

/// Render the late clock-in report for one shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Late { shift } = cmd {
        let shift = parse_shift(shift)?;
        let engine = Engine::new(cfg)?;
        let now = time::now_in(engine.calendar().tz);

        let (day, entries) = engine.entries(shift, now)?;
        let cutoff = engine.shifts().late_cutoff(shift);

        println!("{}", report::late_report(&entries, shift, day, cutoff));
    }
    Ok(())
}
