use crate::common::command::{run_script, script_dir};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use rstest::rstest;

#[rstest]
fn history_is_bounded_and_newest_first(
    script_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let messages: Vec<String> = (0..3)
        .map(|_| Words(2..5).fake::<Vec<String>>().join(" "))
        .collect();
    let mut script = String::from("new main\n");
    for message in &messages {
        script.push_str(&format!("commit main {message}\n"));
    }
    script.push_str("history main 1000\nhistory main 2\n");

    let output = run_script(&script_dir, &script).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let history: Vec<&str> = stdout.lines().skip(4).collect();

    pretty_assertions::assert_eq!(
        history,
        vec![
            format!("2 at 2023-01-01 at 12:00:02 UTC: {}", messages[2]),
            format!("1 at 2023-01-01 at 12:00:01 UTC: {}", messages[1]),
            format!("0 at 2023-01-01 at 12:00:00 UTC: {}", messages[0]),
            format!("2 at 2023-01-01 at 12:00:02 UTC: {}", messages[2]),
            format!("1 at 2023-01-01 at 12:00:01 UTC: {}", messages[1]),
        ]
    );

    Ok(())
}
