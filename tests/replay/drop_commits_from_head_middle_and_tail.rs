use crate::common::command::{run_script, script_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn drop_commits_from_head_middle_and_tail(
    script_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_script(
        &script_dir,
        "new main\n\
         commit main zero\n\
         commit main one\n\
         commit main two\n\
         commit main three\n\
         drop main 2\n\
         drop main 3\n\
         drop main 0\n\
         drop main 0\n\
         drop main 42\n\
         size main\n\
         history main 10\n",
    )
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let lines: Vec<&str> = stdout.lines().skip(5).collect();

    pretty_assertions::assert_eq!(
        lines,
        vec![
            "true",
            "true",
            "true",
            "false",
            "false",
            "1",
            "1 at 2023-01-01 at 12:00:01 UTC: one",
        ]
    );

    Ok(())
}
