#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sts() -> Command {
    cargo_bin_cmd!("standup-timesheet")
}

/// Create a config file inside the system temp dir with the given content
pub fn setup_test_config(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_standup-timesheet.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write test config");
    p
}

/// Path of a config file that is guaranteed not to exist
pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_standup-timesheet.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
