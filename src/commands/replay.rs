use crate::areas::session::Session;
use crate::commands::operation::Operation;
use anyhow::Context;

/// Script replayed by `histlog demo`: two logs committing in alternation,
/// then merged.
pub const DEMO_SCRIPT: &str = "\
new alice
new bob
commit alice initial layout
commit bob add parser
commit alice wire up storage
commit bob fix parser edge case
commit alice document storage
show alice
show bob
sync alice bob
history alice 10
size bob
";

impl Session {
    /// Replay every operation of a script, stopping at the first failure
    pub fn run(&mut self, script: &str) -> anyhow::Result<()> {
        for (index, line) in script.lines().enumerate() {
            let line_number = index + 1;
            let operation = Operation::parse(line)
                .with_context(|| format!("Line {line_number}: cannot parse `{}`", line.trim()))?;

            if let Some(operation) = operation {
                self.apply(operation)
                    .with_context(|| format!("Line {line_number}: `{}` failed", line.trim()))?;
            }
        }

        self.writer().flush()?;
        Ok(())
    }

    pub fn apply(&mut self, operation: Operation) -> anyhow::Result<()> {
        match operation {
            Operation::New { log } => {
                self.create_log(&log)?;
                writeln!(self.writer(), "created {log}")?;
            }
            Operation::Commit { log, message } => {
                let id = self.log_mut(&log)?.commit(message);
                writeln!(self.writer(), "{id}")?;
            }
            Operation::Drop { log, id } => {
                let dropped = self.log_mut(&log)?.drop_commit(&id);
                writeln!(self.writer(), "{dropped}")?;
            }
            Operation::Contains { log, id } => {
                let found = self.log(&log)?.contains(&id);
                writeln!(self.writer(), "{found}")?;
            }
            Operation::Head { log } => {
                let head = self
                    .log(&log)?
                    .head_id()
                    .map_or_else(|| "none".to_string(), ToString::to_string);
                writeln!(self.writer(), "{head}")?;
            }
            Operation::Size { log } => {
                let size = self.log(&log)?.len();
                writeln!(self.writer(), "{size}")?;
            }
            Operation::Show { log } => {
                let description = self.log(&log)?.describe();
                writeln!(self.writer(), "{description}")?;
            }
            Operation::History { log, n } => {
                let history = self.log(&log)?.history(n)?;
                write!(self.writer(), "{history}")?;
            }
            Operation::Sync { log, other } => {
                if log == other {
                    anyhow::bail!("Cannot synchronize {log} with itself");
                }
                // Receiver must exist before the other log is detached
                self.log(&log)?;

                let mut other_log = self.take_log(&other)?;
                let description = self.log_mut(&log).map(|receiver| {
                    receiver.synchronize(&mut other_log);
                    receiver.describe()
                });
                self.restore_log(other_log);
                writeln!(self.writer(), "{}", description?)?;
            }
        }

        Ok(())
    }
}
