use crate::cli::parser::{Cli, RangeArgs};
use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::ledger::TimeLedger;
use crate::core::range::resolve_range;
use crate::db;
use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Everything a command handler needs, resolved once per invocation.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub rate: f64,
    pub now: Option<DateTime<Utc>>,
    pub test: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        let mut cfg = Config::load_or_default(&config_path);

        if let Some(custom_db) = &cli.db {
            cfg.database = custom_db.clone();
        }

        Ok(Self {
            rate: cli.rate.unwrap_or(cfg.pay_rate),
            cfg,
            config_path,
            now: cli.now,
            test: cli.test,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.cfg.database_path()
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.now {
            Some(ts) => Box::new(FixedClock(ts)),
            None => Box::new(SystemClock),
        }
    }

    pub fn open_ledger(&self) -> TimeLedger {
        TimeLedger::load(db::open_store(&self.db_path()), self.clock(), self.rate)
    }

    pub fn range(&self, args: &RangeArgs) -> AppResult<DateRange> {
        resolve_range(
            args.from.as_ref(),
            args.to.as_ref(),
            args.preset(),
            self.cfg.default_range,
            self.clock().now().date_naive(),
        )
    }
}
