//! `lookup` — open a web search in the default browser.
//!
//! The natural-language prefix aliases ("what is …", "search for …",
//! "tell me about …") all resolve to this command with the query inline.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command as ProcessCommand;
use tracing::info;

use adjutant_core::{argument, Command, CommandResult, EngineError};

use crate::render::banner;

const USAGE: &str = "Usage: lookup <search term>\nExample: lookup rust async await";

pub struct LookupCommand;

/// Percent-encoded Google search URL for a query.
pub(crate) fn search_url(query: &str) -> String {
    format!("https://www.google.com/search?q={}", urlencoding::encode(query))
}

async fn open_in_browser(url: &str) -> Result<()> {
    let mut launcher = if cfg!(target_os = "windows") {
        let mut c = ProcessCommand::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = ProcessCommand::new("open");
        c.arg(url);
        c
    } else {
        let mut c = ProcessCommand::new("xdg-open");
        c.arg(url);
        c
    };

    launcher.spawn().context("failed to launch the browser")?;
    Ok(())
}

#[async_trait]
impl Command for LookupCommand {
    fn name(&self) -> &str {
        "lookup"
    }

    fn description(&self) -> &str {
        "Search the web for information"
    }

    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
        let query = argument(input, self.name());
        if query.is_empty() {
            return CommandResult::failure(USAGE);
        }

        let url = search_url(query);
        match open_in_browser(&url).await {
            Ok(()) => {
                info!(query = %query, "lookup opened in browser");
                let body = format!(
                    "🔍 Query:    {query}\n🌐 URL:      {url}\n✓  Opening in default browser..."
                );
                CommandResult::success(banner("WEB LOOKUP", &body))
            }
            Err(err) => CommandResult::failure(format!("Lookup error: {err:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_percent_encoded() {
        assert_eq!(
            search_url("rust async await"),
            "https://www.google.com/search?q=rust%20async%20await"
        );
        assert_eq!(
            search_url("c++ & more"),
            "https://www.google.com/search?q=c%2B%2B%20%26%20more"
        );
    }

    #[tokio::test]
    async fn missing_query_returns_usage() {
        let result = LookupCommand.execute("lookup").await.unwrap();
        assert!(!result.is_success());
        assert!(result.render().contains("Usage: lookup"));
    }
}
