//! `${ENV_VAR}` substitution in config values.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
});

#[derive(Debug, Error)]
#[error("missing environment variable: {name}")]
pub struct MissingEnvVarError {
    pub name: String,
}

/// Substitute `${VAR}` references in every string of the value tree using
/// the process environment.
pub fn resolve_env_vars(value: &Value) -> Result<Value, MissingEnvVarError> {
    let env: HashMap<String, String> = std::env::vars().collect();
    resolve_env_vars_with(value, &env)
}

/// Substitution against an explicit variable map (testable variant).
pub fn resolve_env_vars_with(
    value: &Value,
    env: &HashMap<String, String>,
) -> Result<Value, MissingEnvVarError> {
    match value {
        Value::String(s) => Ok(Value::String(substitute(s, env)?)),
        Value::Array(items) => items
            .iter()
            .map(|item| resolve_env_vars_with(item, env))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut resolved = serde_json::Map::with_capacity(map.len());
            for (key, item) in map {
                resolved.insert(key.clone(), resolve_env_vars_with(item, env)?);
            }
            Ok(Value::Object(resolved))
        }
        other => Ok(other.clone()),
    }
}

fn substitute(input: &str, env: &HashMap<String, String>) -> Result<String, MissingEnvVarError> {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for caps in ENV_VAR_RE.captures_iter(input) {
        let whole = caps.get(0).expect("capture 0 always present");
        let name = &caps[1];
        let replacement = env.get(name).ok_or_else(|| MissingEnvVarError {
            name: name.to_string(),
        })?;
        out.push_str(&input[last..whole.start()]);
        out.push_str(replacement);
        last = whole.end();
    }
    out.push_str(&input[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_simple_var() {
        let v = json!({"dir": "${HOME_DIR}/logs"});
        let env = env(&[("HOME_DIR", "/home/demo")]);
        let result = resolve_env_vars_with(&v, &env).unwrap();
        assert_eq!(result["dir"], "/home/demo/logs");
    }

    #[test]
    fn error_on_missing_var() {
        let v = json!({"key": "${MISSING_VAR}"});
        let result = resolve_env_vars_with(&v, &HashMap::new());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("MISSING_VAR"));
    }

    #[test]
    fn passthrough_non_var_strings() {
        let v = json!({"key": "plain-string", "n": 3});
        let result = resolve_env_vars_with(&v, &HashMap::new()).unwrap();
        assert_eq!(result["key"], "plain-string");
        assert_eq!(result["n"], 3);
    }

    #[test]
    fn substitutes_nested() {
        let v = json!({"weather": {"geocodingUrl": "${GEO_URL}"}});
        let env = env(&[("GEO_URL", "https://example.test")]);
        let result = resolve_env_vars_with(&v, &env).unwrap();
        assert_eq!(result["weather"]["geocodingUrl"], "https://example.test");
    }
}
