#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftledger::config::Config;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("shiftledger")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Library-level config pointing at a fresh temp DB, default catalog.
pub fn test_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        ..Config::default()
    }
}

/// Library-level config with a tiny two-page catalog (the end-to-end
/// scenario: Page A present, Page B missing).
pub fn small_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        pages: BTreeMap::from([
            ("a".to_string(), "Page A".to_string()),
            ("b".to_string(), "Page B".to_string()),
        ]),
        ..Config::default()
    }
}
