use crate::areas::history_log::HistoryLog;
use crate::artifacts::core::context::LogContext;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::Write;

/// A set of named logs sharing one context, plus the writer their output goes to
#[derive(new)]
pub struct Session {
    context: LogContext,
    writer: Box<dyn Write>,
    #[new(default)]
    logs: BTreeMap<String, HistoryLog>,
}

impl Session {
    pub fn writer(&mut self) -> &mut dyn Write {
        self.writer.as_mut()
    }

    pub fn log(&self, name: &str) -> anyhow::Result<&HistoryLog> {
        self.logs
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown log: {name}"))
    }

    pub fn log_mut(&mut self, name: &str) -> anyhow::Result<&mut HistoryLog> {
        self.logs
            .get_mut(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown log: {name}"))
    }

    pub fn create_log(&mut self, name: &str) -> anyhow::Result<&HistoryLog> {
        if self.logs.contains_key(name) {
            anyhow::bail!("Log already exists: {name}");
        }

        let log = HistoryLog::with_context(name, self.context.clone())?;
        Ok(self.logs.entry(name.to_string()).or_insert(log))
    }

    /// Take a log out of the session; [`restore_log`](Self::restore_log) puts it back
    pub fn take_log(&mut self, name: &str) -> anyhow::Result<HistoryLog> {
        self.logs
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown log: {name}"))
    }

    pub fn restore_log(&mut self, log: HistoryLog) {
        self.logs.insert(log.name().to_string(), log);
    }
}
