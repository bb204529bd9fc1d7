use crate::common::PINNED_DATE;
use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::PathBuf;

#[fixture]
pub fn script_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_histlog_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("histlog").expect("Failed to find histlog binary");
    cmd.envs(vec![("HISTLOG_DATE", PINNED_DATE), ("HISTLOG_STEP_SECS", "1")]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Write `content` to `<dir>/<name>` and return the full path
pub fn write_script(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let script = dir.child(name);
    script.write_str(content).expect("Failed to write script");
    script.path().to_path_buf()
}

pub fn run_script(dir: &TempDir, content: &str) -> Command {
    let script = write_script(dir, "session.hl", content);
    let script = script.to_str().expect("Script path is not valid UTF-8");
    run_histlog_command(&["run", script])
}
