use crate::common::command::run_histlog_command;
use predicates::prelude::predicate;

#[test]
fn replay_demo_script() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_histlog_command(&["demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created alice"))
        .stdout(predicate::str::contains(
            "alice - Current head: 4 at 2023-01-01 at 12:00:04 UTC: document storage",
        ));

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let history: Vec<&str> = stdout
        .lines()
        .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .filter(|line| line.contains(" UTC: "))
        .collect();

    pretty_assertions::assert_eq!(
        history,
        vec![
            "4 at 2023-01-01 at 12:00:04 UTC: document storage",
            "3 at 2023-01-01 at 12:00:03 UTC: fix parser edge case",
            "2 at 2023-01-01 at 12:00:02 UTC: wire up storage",
            "1 at 2023-01-01 at 12:00:01 UTC: add parser",
            "0 at 2023-01-01 at 12:00:00 UTC: initial layout",
        ]
    );
    assert!(stdout.ends_with("\n0\n"));

    Ok(())
}
