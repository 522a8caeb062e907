#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bin() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Config path that does not exist yet, so defaults apply
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Isolated environment: own DB, own (absent) config file
pub struct Env {
    pub db: String,
    pub config: String,
}

impl Env {
    pub fn new(name: &str) -> Self {
        Self {
            db: setup_test_db(name),
            config: temp_config(name),
        }
    }

    /// Command preloaded with `--db`, `--config` and `--test`
    pub fn cmd(&self) -> Command {
        let mut c = bin();
        c.args(["--db", &self.db, "--config", &self.config, "--test"]);
        c
    }

    /// Same as `cmd` but with a fixed clock
    pub fn at(&self, now: &str) -> Command {
        let mut c = self.cmd();
        c.args(["--now", now]);
        c
    }

    /// Record one closed entry through `in` / `out`
    pub fn punch(&self, punch_in: &str, punch_out: &str) {
        self.at(punch_in).arg("in").assert().success();
        self.at(punch_out).arg("out").assert().success();
    }
}
