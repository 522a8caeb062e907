use crate::errors::{AppError, AppResult};
use crate::models::date_range::RangePreset;
use crate::utils::path::{ensure_parent, expand_tilde};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod check;

pub const KNOWN_FIELDS: [&str; 4] = ["database", "pay_rate", "currency", "default_range"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub pay_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub default_range: RangePreset,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            pay_rate: 0.0,
            currency: default_currency(),
            default_range: RangePreset::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.punchclock`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchclock.sqlite")
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let cfg = Self::read(path)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse the file without validating values, so a bad value can still
    /// be overwritten with `config --set-rate`.
    pub fn read(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load for everyday commands: an unreadable file falls back to
    /// defaults and an invalid pay rate to 0, both with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        let mut cfg = match Self::read(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(error = %e, "config unreadable, using defaults");
                return Self::default();
            }
        };

        if let Err(e) = cfg.validate() {
            warn!(error = %e, "ignoring configured pay rate");
            cfg.pay_rate = 0.0;
        }
        cfg
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        ensure_parent(path).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.pay_rate.is_finite() || self.pay_rate < 0.0 {
            return Err(AppError::InvalidRate(self.pay_rate.to_string()));
        }
        Ok(())
    }

    /// Create the config file (unless `is_test`) and the database directory.
    /// Returns the database path that ended up configured.
    pub fn init_all(config_path: &Path, db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let mut cfg = Self::load(config_path)?;
        if let Some(custom) = db {
            cfg.database = custom.to_string();
        }

        let db_path = cfg.database_path();
        ensure_parent(&db_path)?;

        if !is_test {
            cfg.save(config_path)?;
        }

        Ok(db_path)
    }
}

/// Parse a user-supplied pay rate: finite and non-negative.
pub fn parse_rate(s: &str) -> AppResult<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(AppError::InvalidRate(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("pay_rate: 12.5\n").unwrap();
        assert_eq!(cfg.pay_rate, 12.5);
        assert_eq!(cfg.currency, "$");
        assert_eq!(cfg.default_range, RangePreset::Today);
        assert!(cfg.database.ends_with("punchclock.sqlite"));
    }

    #[test]
    fn default_range_reads_lowercase_names() {
        let cfg: Config = serde_yaml::from_str("default_range: month\n").unwrap();
        assert_eq!(cfg.default_range, RangePreset::Month);
    }

    #[test]
    fn rate_must_be_non_negative() {
        assert_eq!(parse_rate("20").unwrap(), 20.0);
        assert!(parse_rate("-1").is_err());
        assert!(parse_rate("abc").is_err());
        assert!(parse_rate("NaN").is_err());
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join("punchclock_cfg_unit/punchclock.conf");
        let _ = fs::remove_file(&path);

        let cfg = Config {
            pay_rate: 42.0,
            currency: "€".into(),
            ..Config::default()
        };
        cfg.save(&path).unwrap();

        let back = Config::load(&path).unwrap();
        assert_eq!(back.pay_rate, 42.0);
        assert_eq!(back.currency, "€");
    }

    #[test]
    fn invalid_rate_falls_back_to_zero() {
        let path = std::env::temp_dir().join("punchclock_cfg_unit/negative_rate.conf");
        ensure_parent(&path).unwrap();
        fs::write(&path, "pay_rate: -3\ncurrency: \"EUR \"\n").unwrap();

        assert!(Config::load(&path).is_err());
        assert_eq!(Config::read(&path).unwrap().pay_rate, -3.0);

        let cfg = Config::load_or_default(&path);
        assert_eq!(cfg.pay_rate, 0.0);
        assert_eq!(cfg.currency, "EUR ");
    }
}
