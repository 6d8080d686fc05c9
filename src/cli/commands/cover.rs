use crate::cli::commands::parse_shift;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::Engine;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::time;

/// Record a cover clock-in explicitly (no message parsing involved).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cover {
        shift,
        page,
        name,
        at,
    } = cmd
    {
        let shift = parse_shift(shift)?;
        let engine = Engine::new(cfg)?;

        let ts = match at {
            Some(s) => time::parse_timestamp(s, engine.calendar().tz)?,
            None => time::now_in(engine.calendar().tz),
        };

        match engine.record_cover(shift, page, name, ts) {
            Ok(label) => {
                messages::success(format!(
                    "Cover recorded for {} — {} shift — by {}",
                    label,
                    shift.name(),
                    name
                ));
            }
            Err(AppError::UnknownPage(tag)) => {
                let key = crate::core::normalize::normalize_tag(&tag);
                match engine.registry().suggest(&key) {
                    Some(hint) => messages::error(format!(
                        "Page '#{}' not recognized. Did you mean #{}?",
                        tag, hint
                    )),
                    None => messages::error(format!("Page '#{}' not recognized.", tag)),
                }
                return Err(AppError::UnknownPage(tag));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
