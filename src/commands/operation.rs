//! Script line parsing
//!
//! One operation per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! new <log>
//! commit <log> [message...]
//! drop <log> <id>
//! contains <log> <id>
//! head <log>
//! size <log>
//! show <log>
//! history <log> <n>
//! sync <log> <other>
//! ```

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    New { log: String },
    Commit { log: String, message: String },
    Drop { log: String, id: String },
    Contains { log: String, id: String },
    Head { log: String },
    Size { log: String },
    Show { log: String },
    History { log: String, n: usize },
    Sync { log: String, other: String },
}

/// Split off the first whitespace-delimited word, returning it and the remainder
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn required<'a>(input: &'a str, what: &str) -> anyhow::Result<(&'a str, &'a str)> {
    let (word, rest) = split_word(input);
    if word.is_empty() {
        anyhow::bail!("Missing {what}");
    }
    Ok((word, rest))
}

fn no_trailing(rest: &str) -> anyhow::Result<()> {
    if !rest.is_empty() {
        anyhow::bail!("Unexpected trailing input: {rest}");
    }
    Ok(())
}

impl Operation {
    /// Parse a script line, returning `None` for blank lines and comments
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = split_word(line);
        let (log, rest) = required(rest, "log name")?;
        let log = log.to_string();

        let operation = match verb {
            "commit" => Operation::Commit {
                log,
                message: rest.to_string(),
            },
            "drop" | "contains" => {
                let (id, rest) = required(rest, "commit id")?;
                no_trailing(rest)?;
                let id = id.to_string();
                if verb == "drop" {
                    Operation::Drop { log, id }
                } else {
                    Operation::Contains { log, id }
                }
            }
            "history" => {
                let (n, rest) = required(rest, "history length")?;
                no_trailing(rest)?;
                let n = n
                    .parse::<usize>()
                    .with_context(|| format!("Invalid history length: {n}"))?;
                Operation::History { log, n }
            }
            "sync" => {
                let (other, rest) = required(rest, "other log name")?;
                no_trailing(rest)?;
                Operation::Sync {
                    log,
                    other: other.to_string(),
                }
            }
            "new" | "head" | "size" | "show" => {
                no_trailing(rest)?;
                match verb {
                    "new" => Operation::New { log },
                    "head" => Operation::Head { log },
                    "size" => Operation::Size { log },
                    _ => Operation::Show { log },
                }
            }
            _ => anyhow::bail!("Unknown operation: {verb}"),
        };

        Ok(Some(operation))
    }
}
