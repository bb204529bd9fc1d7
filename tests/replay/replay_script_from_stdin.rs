use crate::common::command::run_histlog_command;
use predicates::prelude::predicate;

#[test]
fn replay_script_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    run_histlog_command(&["run"])
        .write_stdin("# piped session\nnew main\ncommit main hello\nshow main\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "created main\n0\nmain - Current head: 0 at 2023-01-01 at 12:00:00 UTC: hello\n",
        ));

    Ok(())
}
