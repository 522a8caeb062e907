use predicates::str::contains;
use std::path::Path;

mod common;
use common::{Env, bin, setup_test_db, temp_config};

#[test]
fn test_init_creates_database() {
    let env = Env::new("init_db");

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&env.db).exists());
    // --test never writes the config file
    assert!(!Path::new(&env.config).exists());
}

#[test]
fn test_set_rate_is_used_by_punch_out() {
    let db = setup_test_db("config_rate");
    let cfg = temp_config("config_rate");

    bin()
        .args(["--db", &db, "--config", &cfg, "config", "--set-rate", "25"])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    bin()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("pay_rate: 25.0"));

    bin()
        .args(["--db", &db, "--config", &cfg, "--now", "2024-01-01T09:00:00Z", "in"])
        .assert()
        .success();

    bin()
        .args(["--db", &db, "--config", &cfg, "--now", "2024-01-01T10:00:00Z", "out"])
        .assert()
        .success()
        .stdout(contains("$25.00"));
}

#[test]
fn test_negative_rate_is_rejected() {
    let env = Env::new("config_negative_rate");

    env.cmd()
        .args(["config", "--set-rate", "-4"])
        .assert()
        .failure();
}

#[test]
fn test_check_reports_missing_fields() {
    let cfg = temp_config("config_check");
    std::fs::write(&cfg, "pay_rate: 12\n").expect("write config");

    bin()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("database"))
        .stdout(contains("currency"));
}

#[test]
fn test_currency_symbol_from_config() {
    let db = setup_test_db("config_currency");
    let cfg = temp_config("config_currency");
    std::fs::write(&cfg, "pay_rate: 10\ncurrency: \"EUR \"\n").expect("write config");

    bin()
        .args(["--db", &db, "--config", &cfg, "--now", "2024-01-01T09:00:00Z", "in"])
        .assert()
        .success();
    bin()
        .args(["--db", &db, "--config", &cfg, "--now", "2024-01-01T12:00:00Z", "out"])
        .assert()
        .success()
        .stdout(contains("EUR 30.00"));
}

#[test]
fn test_invalid_rate_still_allows_check_and_status() {
    let db = setup_test_db("config_invalid_rate");
    let cfg = temp_config("config_invalid_rate");
    std::fs::write(&cfg, "pay_rate: -3\n").expect("write config");

    bin()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stderr(contains("Invalid pay rate: -3"));

    bin()
        .args(["--db", &db, "--config", &cfg, "status"])
        .assert()
        .success();

    bin()
        .args(["--config", &cfg, "config", "--set-rate", "15"])
        .assert()
        .success();

    bin()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("pay_rate: 15.0"));
}
