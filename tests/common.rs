#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("ticktrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ticktrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema for a test DB (creates store + log tables)
pub fn init_test_db(db_path: &str) {
    tt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Test config pointing at a test DB, bypassing the user's real config
pub fn test_config(db_path: &str) -> ticktrack::config::Config {
    ticktrack::config::Config {
        database: db_path.to_string(),
        show_weekday: "none".to_string(),
    }
}
