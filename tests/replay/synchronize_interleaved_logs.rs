use crate::common::command::{run_histlog_command, run_script, script_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn synchronize_interleaved_logs(script_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    // a: 12:00:00, 12:00:02, 12:00:04 / b: 12:00:01, 12:00:03
    let output = run_script(
        &script_dir,
        "new a\n\
         new b\n\
         commit a a0\n\
         commit b b1\n\
         commit a a2\n\
         commit b b3\n\
         commit a a4\n\
         sync a b\n\
         size a\n\
         size b\n\
         head b\n\
         show b\n\
         history a 10\n",
    )
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let lines: Vec<&str> = stdout.lines().skip(7).collect();

    pretty_assertions::assert_eq!(
        lines,
        vec![
            "a - Current head: 4 at 2023-01-01 at 12:00:04 UTC: a4",
            "5",
            "0",
            "none",
            "b - No commits",
            "4 at 2023-01-01 at 12:00:04 UTC: a4",
            "3 at 2023-01-01 at 12:00:03 UTC: b3",
            "2 at 2023-01-01 at 12:00:02 UTC: a2",
            "1 at 2023-01-01 at 12:00:01 UTC: b1",
            "0 at 2023-01-01 at 12:00:00 UTC: a0",
        ]
    );

    Ok(())
}

#[rstest]
fn synchronize_equal_timestamps_prefers_receiver(
    script_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = "new a\nnew b\ncommit b b0\ncommit a a1\ncommit b b2\ncommit a a3\nsync a b\nhistory a 10\n";
    let output = run_script(&script_dir, script)
        .env("HISTLOG_STEP_SECS", "0")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let order: Vec<&str> = stdout
        .lines()
        .skip(7)
        .filter_map(|line| line.rsplit(": ").next())
        .collect();

    pretty_assertions::assert_eq!(order, vec!["a3", "a1", "b2", "b0"]);

    Ok(())
}

#[test]
fn synchronize_unknown_log_fails() -> Result<(), Box<dyn std::error::Error>> {
    run_histlog_command(&["run"])
        .write_stdin("new a\nsync a b\n")
        .assert()
        .failure();

    Ok(())
}
