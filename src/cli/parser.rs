use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftledger.
/// Tracks shift attendance from free-form clock-in messages with SQLite.
#[derive(Parser)]
#[command(
    name = "shiftledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shift attendance ledger: parse clock-in messages and report who clocked in, who is missing, and who was late",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Feed one raw chat message through the clock-in parser
    Ingest {
        /// Raw message text ("CLOCK IN" line plus hashtags)
        text: String,

        /// Sender display name
        #[arg(long = "from")]
        sender: String,

        /// Message timestamp (RFC 3339 or "YYYY-MM-DD HH:MM[:SS]" local time).
        /// Defaults to now.
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Show the clocked-in / missing table for a shift
    Status {
        /// Shift name (prime, mid, night)
        #[arg(long = "shift")]
        shift: String,

        /// Page number (clamped into the valid range)
        #[arg(long = "page", default_value_t = 1)]
        page: usize,

        #[arg(long = "page-size", help = "Rows per page")]
        page_size: Option<usize>,

        /// Show only pages with no clock-in
        #[arg(long = "missing")]
        missing: bool,
    },

    /// Show late clock-ins for a shift
    Late {
        /// Shift name (prime, mid, night)
        #[arg(long = "shift")]
        shift: String,
    },

    /// Record a cover clock-in explicitly
    Cover {
        /// Shift name (prime, mid, night)
        #[arg(long = "shift")]
        shift: String,

        /// Page tag (normalized like a hashtag)
        #[arg(long = "page")]
        page: String,

        /// Name of the person covering
        #[arg(long = "name")]
        name: String,

        /// Timestamp (RFC 3339 or "YYYY-MM-DD HH:MM[:SS]"). Defaults to now.
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Clear the active day's ledger (one shift or everything)
    Reset {
        /// Only clear this shift
        #[arg(long = "shift")]
        shift: Option<String>,
    },
}
