use crate::cli::commands::parse_shift;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::Engine;
use crate::errors::AppResult;
use crate::report;
use crate::utils::time;

/// Render the clocked-in / missing table for one shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        shift,
        page,
        page_size,
        missing,
    } = cmd
    {
        let shift = parse_shift(shift)?;
        let engine = Engine::new(cfg)?;
        let now = time::now_in(engine.calendar().tz);

        let (day, snapshot) = engine.snapshot(shift, now)?;

        let chunks = report::status_table(
            &snapshot,
            shift,
            day,
            *page,
            page_size.unwrap_or(report::DEFAULT_PAGE_SIZE),
            *missing,
        );

        for chunk in chunks {
            println!("{}", chunk);
        }
    }
    Ok(())
}
