//! `time` — current date and time.

use async_trait::async_trait;
use chrono::Local;

use adjutant_core::{Command, CommandResult, EngineError};

use crate::render::banner;

pub struct ClockCommand;

#[async_trait]
impl Command for ClockCommand {
    fn name(&self) -> &str {
        "time"
    }

    fn description(&self) -> &str {
        "Display current date and time"
    }

    async fn execute(&self, _input: &str) -> Result<CommandResult, EngineError> {
        let now = Local::now();
        let body = format!(
            "📅 Date:     {}\n🕐 Time:     {}\n📍 Offset:   {}",
            now.format("%A, %B %d, %Y"),
            now.format("%H:%M:%S"),
            now.format("%:z"),
        );
        CommandResult::success(banner("CURRENT DATE & TIME", &body))
    }
}
