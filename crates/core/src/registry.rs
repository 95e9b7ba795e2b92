//! Command metadata records and the descriptive registry.
//!
//! The registry holds only descriptive data — no behavior coupling to
//! command implementations — so help text can be rendered without invoking
//! any command.

use std::collections::{BTreeMap, HashMap};

use crate::error::EngineError;

/// Descriptive record for one registered command.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub category: String,
    /// Natural-language phrases that resolve to this command.
    pub aliases: Vec<String>,
}

impl CommandMetadata {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: description.into(),
            usage: usage.into(),
            category: category.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Central registry of command metadata, keyed by canonical name.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    entries: HashMap<String, CommandMetadata>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata under its canonical name.
    ///
    /// A second registration under the same name is a configuration error
    /// and fails with `DuplicateRegistration`.
    pub fn register(&mut self, metadata: CommandMetadata) -> Result<(), EngineError> {
        let name = metadata.name.clone();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidArgument(
                "metadata name cannot be empty".into(),
            ));
        }
        if self.entries.contains_key(&name) {
            return Err(EngineError::DuplicateRegistration(name));
        }
        self.entries.insert(name, metadata);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandMetadata> {
        self.entries.get(&name.trim().to_lowercase())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All metadata grouped by category, categories sorted by label and
    /// commands sorted by name within each — deterministic help rendering.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&CommandMetadata>> {
        let mut grouped: BTreeMap<&str, Vec<&CommandMetadata>> = BTreeMap::new();
        for metadata in self.entries.values() {
            grouped.entry(&metadata.category).or_default().push(metadata);
        }
        for commands in grouped.values_mut() {
            commands.sort_by(|a, b| a.name.cmp(&b.name));
        }
        grouped
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, category: &str) -> CommandMetadata {
        CommandMetadata::new(name, format!("{name} description"), name, category)
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = CommandRegistry::new();
        registry.register(meta("time", "System")).unwrap();
        assert!(registry.is_registered("time"));
        assert!(registry.is_registered("TIME"));
        assert_eq!(registry.lookup("time").unwrap().category, "System");
        assert!(registry.lookup("weather").is_none());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = CommandRegistry::new();
        registry.register(meta("time", "System")).unwrap();
        let err = registry.register(meta("time", "Other")).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateRegistration(name) if name == "time"));
    }

    #[test]
    fn grouping_is_sorted_by_category_then_name() {
        let mut registry = CommandRegistry::new();
        registry.register(meta("weather", "Web")).unwrap();
        registry.register(meta("time", "System")).unwrap();
        registry.register(meta("lookup", "Web")).unwrap();

        let grouped = registry.by_category();
        let categories: Vec<&str> = grouped.keys().copied().collect();
        assert_eq!(categories, vec!["System", "Web"]);

        let web: Vec<&str> = grouped["Web"].iter().map(|m| m.name.as_str()).collect();
        assert_eq!(web, vec!["lookup", "weather"]);
    }

    #[test]
    fn names_are_stored_lowercase() {
        let mut registry = CommandRegistry::new();
        registry.register(meta("SysInfo", "System")).unwrap();
        assert!(registry.is_registered("sysinfo"));
    }
}
