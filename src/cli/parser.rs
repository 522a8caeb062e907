use crate::config::parse_rate;
use crate::export::ExportFormat;
use crate::models::date_range::RangePreset;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser, Debug)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: punch in and out, review entries, compute hours and earnings",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Hourly pay rate for this run (overrides the configured one)
    #[arg(global = true, long = "rate", value_parser = rate_arg)]
    pub rate: Option<f64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is this instant (RFC 3339)
    #[arg(global = true, long = "now", hide = true, value_parser = timestamp_arg)]
    pub now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Punch in (start a new entry)
    #[command(name = "in")]
    PunchIn,

    /// Punch out (close the open entry)
    #[command(name = "out")]
    PunchOut,

    /// Show whether you are clocked in and for how long
    Status {
        #[arg(long, help = "Keep refreshing the status until interrupted")]
        watch: bool,

        #[arg(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Refresh interval in seconds (with --watch)"
        )]
        interval: u64,
    },

    /// List time entries in a date range
    List {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Hours and earnings for a date range, plus today's figure
    Summary {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Change the punch-in and/or punch-out time of an entry
    Edit {
        /// Entry number as shown by `list`
        index: usize,

        #[arg(
            long = "in",
            value_name = "TIMESTAMP",
            required_unless_present = "punch_out",
            help = "New punch-in time (RFC 3339 or YYYY-MM-DDTHH:MM, UTC)"
        )]
        punch_in: Option<String>,

        #[arg(
            long = "out",
            value_name = "TIMESTAMP",
            help = "New punch-out time (RFC 3339 or YYYY-MM-DDTHH:MM, UTC)"
        )]
        punch_out: Option<String>,
    },

    /// Delete an entry
    Del {
        /// Entry number as shown by `list`
        index: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export entries to a file
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, short = 'f', help = "Overwrite the file without asking")]
        force: bool,
    },

    /// Append entries from a JSON export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(long = "set-rate", value_parser = rate_arg, help = "Store a new hourly pay rate")]
        set_rate: Option<f64>,

        #[arg(long = "set-currency", help = "Store a new currency symbol")]
        set_currency: Option<String>,
    },
}

/// Date range selection shared by `list`, `summary` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    #[arg(long, value_name = "YYYY-MM-DD", help = "First day (inclusive)")]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Last day (inclusive)")]
    pub to: Option<String>,

    #[arg(long, conflicts_with_all = ["week", "month", "all"], help = "Only today")]
    pub today: bool,

    #[arg(long, conflicts_with_all = ["month", "all"], help = "Since Sunday")]
    pub week: bool,

    #[arg(long, conflicts_with = "all", help = "Since the first of the month")]
    pub month: bool,

    #[arg(long, help = "No date limits")]
    pub all: bool,
}

impl RangeArgs {
    pub fn preset(&self) -> Option<RangePreset> {
        if self.today {
            Some(RangePreset::Today)
        } else if self.week {
            Some(RangePreset::Week)
        } else if self.month {
            Some(RangePreset::Month)
        } else if self.all {
            Some(RangePreset::All)
        } else {
            None
        }
    }
}

fn rate_arg(s: &str) -> Result<f64, String> {
    parse_rate(s).map_err(|e| e.to_string())
}

fn timestamp_arg(s: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(s).ok_or_else(|| format!("invalid timestamp '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn edit_needs_a_field() {
        assert!(Cli::try_parse_from(["punchclock", "edit", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["punchclock", "edit", "1", "--out", "2024-01-01T10:00"]).is_ok()
        );
    }

    #[test]
    fn presets_are_exclusive() {
        assert!(Cli::try_parse_from(["punchclock", "list", "--today", "--all"]).is_err());
        let cli = Cli::try_parse_from(["punchclock", "summary", "--week"]).unwrap();
        match cli.command {
            Commands::Summary { range } => assert_eq!(range.preset(), Some(RangePreset::Week)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_rate_is_rejected() {
        assert!(Cli::try_parse_from(["punchclock", "--rate", "-3", "summary"]).is_err());
    }
}
