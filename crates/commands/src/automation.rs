//! `automate` — named task bookkeeping with simulated execution.
//!
//! No timer or scheduler exists; "running" a task stamps it, bumps its
//! counter, and returns a textual transcript of the simulated steps.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use adjutant_core::{argument, Command, CommandResult, EngineError};

use crate::render::banner;

const USAGE: &str = "Usage: automate <list|add|run|info|enable|disable>";

#[derive(Debug, Clone)]
pub struct AutomatedTask {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub created: DateTime<Utc>,
    pub last_run: Option<DateTime<Utc>>,
    pub run_count: u32,
}

pub struct AutomationCommand {
    tasks: RwLock<BTreeMap<String, AutomatedTask>>,
}

impl AutomationCommand {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(BTreeMap::new()),
        }
    }

    async fn add(&self, rest: &str) -> Result<CommandResult, EngineError> {
        let Some((name, description)) = rest.split_once(char::is_whitespace) else {
            return CommandResult::failure("Usage: automate add <name> <description>");
        };
        let name = name.trim().to_string();
        let description = description.trim().to_string();

        let task = AutomatedTask {
            id: Uuid::new_v4(),
            name: name.clone(),
            description: description.clone(),
            enabled: true,
            created: Utc::now(),
            last_run: None,
            run_count: 0,
        };
        // Re-adding an existing name silently replaces the record.
        self.tasks.write().await.insert(name.clone(), task);

        info!(task = %name, "automation task created");
        CommandResult::success(format!(
            "✓ Automated task '{name}' created!\n  Description: {description}"
        ))
    }

    async fn run(&self, name: &str) -> Result<CommandResult, EngineError> {
        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.get_mut(name) else {
            return Err(EngineError::NotFound(format!(
                "task '{name}' (use 'automate list' to see available tasks)"
            )));
        };
        if !task.enabled {
            return Err(EngineError::Disabled(format!(
                "task '{name}' (enable it with 'automate enable {name}')"
            )));
        }

        let started = Utc::now();
        task.last_run = Some(started);
        task.run_count += 1;

        info!(task = %name, runs = task.run_count, "automation task run");
        let body = format!(
            "▶ Running automation task: {name}\n\
             📝 Description: {}\n\
             ⏱️ Started at:  {}\n\n\
             [Checking dependencies...]\n\
             [Executing main process...]\n\
             [Collecting results...]\n\n\
             ✓ Task completed!\n\
             📊 Total runs:  {}",
            task.description,
            started.format("%H:%M:%S"),
            task.run_count,
        );
        CommandResult::success(banner("AUTOMATION EXECUTION", &body))
    }

    async fn info(&self, name: &str) -> Result<CommandResult, EngineError> {
        let tasks = self.tasks.read().await;
        let Some(task) = tasks.get(name) else {
            return Err(EngineError::NotFound(format!("task '{name}'")));
        };

        let last_run = task
            .last_run
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "Never".into());
        let body = format!(
            "📌 Name:        {}\n\
             🆔 Id:          {}\n\
             📝 Description: {}\n\
             ✓  Status:      {}\n\
             📅 Created:     {}\n\
             🕐 Last run:    {}\n\
             🔢 Total runs:  {}",
            task.name,
            task.id,
            task.description,
            if task.enabled { "Enabled" } else { "Disabled" },
            task.created.format("%Y-%m-%d %H:%M:%S UTC"),
            last_run,
            task.run_count,
        );
        CommandResult::success(banner("TASK INFORMATION", &body))
    }

    async fn list(&self) -> Result<CommandResult, EngineError> {
        let tasks = self.tasks.read().await;
        if tasks.is_empty() {
            return CommandResult::success(banner(
                "AUTOMATED TASKS",
                "No automated tasks created yet. Create one with: automate add <name> <description>",
            ));
        }

        let body = tasks
            .values()
            .enumerate()
            .map(|(index, task)| {
                format!(
                    "{}. 🤖 {}\n   Status:  {}\n   Created: {}",
                    index + 1,
                    task.name,
                    if task.enabled { "✓ Enabled" } else { "✗ Disabled" },
                    task.created.format("%Y-%m-%d %H:%M:%S UTC"),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        CommandResult::success(banner("AUTOMATED TASKS", &body))
    }

    async fn set_enabled(&self, name: &str, enabled: bool) -> Result<CommandResult, EngineError> {
        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.get_mut(name) else {
            return Err(EngineError::NotFound(format!("task '{name}'")));
        };
        task.enabled = enabled;
        let state = if enabled { "enabled" } else { "disabled" };
        CommandResult::success(format!("✓ Task '{name}' {state}."))
    }
}

impl Default for AutomationCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for AutomationCommand {
    fn name(&self) -> &str {
        "automate"
    }

    fn description(&self) -> &str {
        "Create and run automated tasks"
    }

    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
        let rest = argument(input, self.name());
        let (action, remainder) = match rest.split_once(char::is_whitespace) {
            Some((action, remainder)) => (action, remainder.trim()),
            None => (rest, ""),
        };

        match action.to_lowercase().as_str() {
            "" => CommandResult::failure(USAGE),
            "list" => self.list().await,
            "add" => {
                if remainder.is_empty() {
                    CommandResult::failure("Usage: automate add <name> <description>")
                } else {
                    self.add(remainder).await
                }
            }
            "run" => {
                if remainder.is_empty() {
                    CommandResult::failure("Usage: automate run <task name>")
                } else {
                    self.run(remainder).await
                }
            }
            "info" => {
                if remainder.is_empty() {
                    CommandResult::failure("Usage: automate info <task name>")
                } else {
                    self.info(remainder).await
                }
            }
            "enable" => {
                if remainder.is_empty() {
                    CommandResult::failure("Usage: automate enable <task name>")
                } else {
                    self.set_enabled(remainder, true).await
                }
            }
            "disable" => {
                if remainder.is_empty() {
                    CommandResult::failure("Usage: automate disable <task name>")
                } else {
                    self.set_enabled(remainder, false).await
                }
            }
            other => CommandResult::failure(format!(
                "Unknown automation action '{other}'. Use: list, add, run, info, enable, or disable"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_count(cmd: &AutomationCommand, name: &str) -> u32 {
        cmd.tasks.read().await.get(name).unwrap().run_count
    }

    #[tokio::test]
    async fn add_creates_an_enabled_task_with_zero_runs() {
        let cmd = AutomationCommand::new();
        cmd.execute("automate add backup nightly backup job")
            .await
            .unwrap();

        let tasks = cmd.tasks.read().await;
        let task = tasks.get("backup").unwrap();
        assert!(task.enabled);
        assert_eq!(task.run_count, 0);
        assert!(task.last_run.is_none());
        assert_eq!(task.description, "nightly backup job");
    }

    #[tokio::test]
    async fn running_stamps_and_counts() {
        let cmd = AutomationCommand::new();
        cmd.execute("automate add t1 demo task").await.unwrap();

        cmd.execute("automate run t1").await.unwrap();
        assert_eq!(run_count(&cmd, "t1").await, 1);
        assert!(cmd.tasks.read().await.get("t1").unwrap().last_run.is_some());

        let second = cmd.execute("automate run t1").await.unwrap();
        assert_eq!(run_count(&cmd, "t1").await, 2);
        assert!(second.render().contains("Total runs:  2"));
    }

    #[tokio::test]
    async fn disabled_tasks_refuse_to_run() {
        let cmd = AutomationCommand::new();
        cmd.execute("automate add t1 demo task").await.unwrap();
        cmd.execute("automate run t1").await.unwrap();
        cmd.execute("automate disable t1").await.unwrap();

        let err = cmd.execute("automate run t1").await.unwrap_err();
        assert!(matches!(err, EngineError::Disabled(_)));
        assert_eq!(run_count(&cmd, "t1").await, 1);

        cmd.execute("automate enable t1").await.unwrap();
        cmd.execute("automate run t1").await.unwrap();
        assert_eq!(run_count(&cmd, "t1").await, 2);
    }

    #[tokio::test]
    async fn unknown_task_is_not_found() {
        let cmd = AutomationCommand::new();
        let err = cmd.execute("automate run ghost").await.unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
        let err = cmd.execute("automate info ghost").await.unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[tokio::test]
    async fn info_shows_never_before_first_run() {
        let cmd = AutomationCommand::new();
        cmd.execute("automate add t1 demo task").await.unwrap();
        let rendered = cmd.execute("automate info t1").await.unwrap().render();
        assert!(rendered.contains("Last run:    Never"));
        assert!(rendered.contains("Enabled"));
    }

    #[tokio::test]
    async fn re_adding_replaces_the_record() {
        let cmd = AutomationCommand::new();
        cmd.execute("automate add t1 first").await.unwrap();
        cmd.execute("automate run t1").await.unwrap();
        cmd.execute("automate add t1 second").await.unwrap();

        let tasks = cmd.tasks.read().await;
        let task = tasks.get("t1").unwrap();
        assert_eq!(task.description, "second");
        assert_eq!(task.run_count, 0);
    }

    #[tokio::test]
    async fn empty_list_is_a_friendly_success() {
        let cmd = AutomationCommand::new();
        let result = cmd.execute("automate list").await.unwrap();
        assert!(result.is_success());
        assert!(result.render().contains("No automated tasks created yet"));
    }
}
