//! Natural-language alias resolution.
//!
//! Maps free-form phrases ("what time is it", "tell me about rust") to
//! canonical command tokens before dispatch. Resolution is total: anything
//! unrecognized passes through unchanged and dispatch falls back to direct
//! command-name matching.

use tracing::debug;

/// Token of the lookup-style command family. Prefix aliases ("what is …",
/// "search for …") resolve only into this token, carrying the trailing text
/// as an inline argument.
pub const LOOKUP_TOKEN: &str = "lookup";

/// Ordered phrase → token table.
///
/// Entries are scanned in registration order; for overlapping prefixes the
/// first registered phrase wins (no longest-match preference). Exact matches
/// always take priority over prefix matches.
pub struct AliasResolver {
    entries: Vec<(String, String)>,
}

impl AliasResolver {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in phrase table.
    pub fn with_defaults() -> Self {
        let mut resolver = Self::new();
        let defaults: &[(&str, &str)] = &[
            // Time
            ("what time is it", "time"),
            ("tell me the time", "time"),
            ("current time", "time"),
            // Weather
            ("how is the weather", "weather"),
            ("what's the weather", "weather"),
            ("weather report", "weather"),
            // System info
            ("system info", "sysinfo"),
            ("cpu", "sysinfo"),
            ("system status", "sysinfo"),
            // Help
            ("?", "help"),
            ("commands", "help"),
            ("show commands", "help"),
            // Lookup family — also usable as "<phrase> <query>" prefixes
            ("lookup", LOOKUP_TOKEN),
            ("look up", LOOKUP_TOKEN),
            ("search", LOOKUP_TOKEN),
            ("search for", LOOKUP_TOKEN),
            ("google", LOOKUP_TOKEN),
            ("google for", LOOKUP_TOKEN),
            ("find", LOOKUP_TOKEN),
            ("find me", LOOKUP_TOKEN),
            ("what is", LOOKUP_TOKEN),
            ("what are", LOOKUP_TOKEN),
            ("who is", LOOKUP_TOKEN),
            ("tell me about", LOOKUP_TOKEN),
            ("explain", LOOKUP_TOKEN),
            ("definition of", LOOKUP_TOKEN),
            ("how to", LOOKUP_TOKEN),
            ("how do i", LOOKUP_TOKEN),
            ("how does", LOOKUP_TOKEN),
            // Exit
            ("quit", "exit"),
        ];
        for (phrase, token) in defaults {
            resolver.register(phrase, token);
        }
        resolver
    }

    /// Add an alias phrase. Re-registering a phrase overwrites its token in
    /// place, keeping the original scan position. There is no removal.
    pub fn register(&mut self, phrase: &str, token: &str) {
        let phrase = phrase.trim().to_lowercase();
        let token = token.trim().to_lowercase();
        if phrase.is_empty() || token.is_empty() {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == phrase) {
            entry.1 = token;
        } else {
            self.entries.push((phrase, token));
        }
    }

    /// Resolve an input line to its canonical form.
    ///
    /// 1. Exact (case-insensitive) phrase match → the mapped token.
    /// 2. `"<phrase> <rest>"` where the phrase maps to the lookup token →
    ///    `"lookup <rest>"`, with the rest case-preserved from the input.
    /// 3. Otherwise the trimmed input, unchanged.
    pub fn resolve(&self, input: &str) -> String {
        let trimmed = input.trim();

        for (phrase, token) in &self.entries {
            if trimmed.eq_ignore_ascii_case(phrase) {
                debug!(phrase = %phrase, token = %token, "alias exact match");
                return token.clone();
            }
        }

        for (phrase, token) in &self.entries {
            if token == LOOKUP_TOKEN && starts_with_phrase(trimmed, phrase) {
                let rest = trimmed[phrase.len() + 1..].trim();
                debug!(phrase = %phrase, "alias prefix match");
                return format!("{LOOKUP_TOKEN} {rest}");
            }
        }

        trimmed.to_string()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Case-insensitive `"<phrase> "` prefix test. Phrases are ASCII, so byte
/// comparison keeps slice offsets valid on the original input.
fn starts_with_phrase(input: &str, phrase: &str) -> bool {
    let input = input.as_bytes();
    let phrase = phrase.as_bytes();
    input.len() > phrase.len()
        && input[..phrase.len()].eq_ignore_ascii_case(phrase)
        && input[phrase.len()] == b' '
}
