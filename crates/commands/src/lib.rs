//! `adjutant-commands` — the built-in command set and engine wiring.
//!
//! `build_engine` constructs every built-in in its fixed registration order
//! (dispatch scans the list first-match-wins, so the order is a priority
//! contract), registers metadata and aliases, and performs the one-time
//! executor-injection pass for the chaining commands.

pub mod apps;
pub mod automation;
pub mod clock;
pub mod exit;
pub mod files;
pub mod help;
pub mod lookup;
pub mod macros;
pub mod math;
mod render;
pub mod sysinfo;
pub mod weather;

pub use apps::OpenAppCommand;
pub use automation::{AutomatedTask, AutomationCommand};
pub use clock::ClockCommand;
pub use exit::ExitCommand;
pub use files::CreateFileCommand;
pub use help::HelpCommand;
pub use lookup::LookupCommand;
pub use macros::MacroCommand;
pub use math::MathCommand;
pub use sysinfo::SystemInfoCommand;
pub use weather::WeatherCommand;

use std::sync::Arc;

use adjutant_config::{default_apps, AssistantConfig};
use adjutant_core::{Command, CommandExecutor, CommandMetadata, CommandRegistry, EngineError};
use adjutant_engine::{AliasResolver, CommandEngine};

/// Metadata for every built-in command.
pub fn builtin_metadata() -> Vec<CommandMetadata> {
    vec![
        CommandMetadata::new("time", "Display current date and time", "time", "System")
            .with_aliases(&["what time is it", "tell me the time", "current time"]),
        CommandMetadata::new(
            "weather",
            "Get current weather information for a city",
            "weather <city>",
            "Web",
        )
        .with_aliases(&["how is the weather", "what's the weather", "weather report"]),
        CommandMetadata::new("exit", "Exit the application", "exit", "General")
            .with_aliases(&["quit"]),
        CommandMetadata::new(
            "math",
            "Evaluate a mathematical expression",
            "math <expression>",
            "Utilities",
        ),
        CommandMetadata::new(
            "createfile",
            "Create a new file with content",
            "createfile <filename> <content>",
            "Productivity",
        ),
        CommandMetadata::new("open", "Open an application", "open <app>", "Productivity"),
        CommandMetadata::new("sysinfo", "Display system information", "sysinfo", "System")
            .with_aliases(&["system info", "cpu", "system status"]),
        CommandMetadata::new("help", "Show available commands", "help", "General")
            .with_aliases(&["?", "commands", "show commands"]),
        CommandMetadata::new(
            "macro",
            "Create and replay command chains",
            "macro <list|run|save> [name] [commands]",
            "Automation",
        ),
        CommandMetadata::new(
            "automate",
            "Create and run automated tasks",
            "automate <list|add|run|info|enable|disable>",
            "Automation",
        ),
        CommandMetadata::new(
            "lookup",
            "Search the web for information",
            "lookup <search term>",
            "Web",
        )
        .with_aliases(&["search", "google", "find", "what is", "who is", "tell me about"]),
    ]
}

/// Build a fully wired engine over the built-in command set.
///
/// Expects a prepared config (see `adjutant_config::load_and_prepare`);
/// unset sections fall back to the same defaults.
pub fn build_engine(config: &AssistantConfig) -> Result<Arc<CommandEngine>, EngineError> {
    let weather_config = config.weather.clone().unwrap_or_default();
    let apps = config.apps.clone().unwrap_or_else(default_apps);

    let help = Arc::new(HelpCommand::new());
    let macro_command = Arc::new(MacroCommand::new());

    let commands: Vec<Arc<dyn Command>> = vec![
        Arc::new(ClockCommand),
        Arc::new(WeatherCommand::new(&weather_config)),
        Arc::new(ExitCommand),
        Arc::new(MathCommand),
        Arc::new(CreateFileCommand),
        Arc::new(OpenAppCommand::new(apps)),
        Arc::new(SystemInfoCommand),
        help.clone(),
        macro_command.clone(),
        Arc::new(AutomationCommand::new()),
        Arc::new(LookupCommand),
    ];

    let mut registry = CommandRegistry::new();
    for metadata in builtin_metadata() {
        registry.register(metadata)?;
    }

    let mut aliases = AliasResolver::with_defaults();
    if let Some(extra) = &config.aliases {
        let mut pairs: Vec<(&String, &String)> = extra.iter().collect();
        pairs.sort();
        for (phrase, token) in pairs {
            aliases.register(phrase, token);
        }
    }

    let engine = Arc::new(CommandEngine::new(commands, registry, aliases)?);

    // One-time dependency injection: chaining commands get the executor
    // contract, never the concrete engine type.
    let executor: Arc<dyn CommandExecutor> = engine.clone();
    help.executor.bind(Arc::downgrade(&executor));
    macro_command.executor.bind(Arc::downgrade(&executor));

    Ok(engine)
}
