use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::{Engine, IngestReply};
use crate::errors::AppResult;
use crate::utils::time;

/// Feed one raw chat message through the engine and print the reply the
/// chat transport would deliver. Non-attendance and malformed messages
/// produce no output at all.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ingest { text, sender, at } = cmd {
        let engine = Engine::new(cfg)?;

        //
        // 1. Resolve the message timestamp
        //
        let ts = match at {
            Some(s) => time::parse_timestamp(s, engine.calendar().tz)?,
            None => time::now_in(engine.calendar().tz),
        };

        //
        // 2. Parse + record
        //
        match engine.ingest(text, sender, ts)? {
            IngestReply::Recorded {
                label,
                shift,
                is_cover,
                day,
            } => {
                let kind = if is_cover { "Cover" } else { "Clock-in" };
                println!(
                    "✅ {} recorded for {} — {} shift, {} — by {}",
                    kind,
                    label,
                    shift.name(),
                    day,
                    sender
                );
            }
            IngestReply::Ignored => {
                // Unrelated chatter: stay silent, like the bot would.
            }
            IngestReply::UnknownPage { tag, suggestion } => match suggestion {
                Some(hint) => println!("❓ Page '#{}' not recognized. Did you mean #{}?", tag, hint),
                None => println!("❓ Page '#{}' not recognized.", tag),
            },
        }
    }
    Ok(())
}
