//! `sysinfo` — a snapshot of the host system.

use async_trait::async_trait;
use chrono::Local;

use adjutant_core::{Command, CommandResult, EngineError};

use crate::render::banner;

pub struct SystemInfoCommand;

#[async_trait]
impl Command for SystemInfoCommand {
    fn name(&self) -> &str {
        "sysinfo"
    }

    fn description(&self) -> &str {
        "Display system information"
    }

    async fn execute(&self, _input: &str) -> Result<CommandResult, EngineError> {
        let processors = std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1);
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown".into());
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".into());

        let body = format!(
            "💻 Operating system: {}\n\
             🏗️ Architecture:     {}\n\
             📊 Processors:       {}\n\
             🖥️ Hostname:         {}\n\
             👤 Username:         {}\n\
             🕐 Current time:     {}",
            std::env::consts::OS,
            std::env::consts::ARCH,
            processors,
            host,
            user,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
        );
        CommandResult::success(banner("SYSTEM INFORMATION", &body))
    }
}
