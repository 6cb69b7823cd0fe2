// Configuration module
// Token bindings and typed session settings

use std::collections::HashMap;

/// Filename used when the user does not name one at the save prompt
pub const DEFAULT_FILENAME: &str = "default_filename";
/// Save destination that skips the filename prompt
pub const OUTPUT_PATH: &str = "output_path";
/// Undo stack bound (0 = unbounded)
pub const MAX_UNDO_DEPTH: &str = "max_undo_depth";
/// Suppress banner and prompts
pub const QUIET: &str = "quiet";
/// Colored status lines
pub const COLOR: &str = "color";
/// Log verbosity (0 = warn, 1 = info, 2 = debug, 3+ = trace)
pub const VERBOSITY: &str = "verbosity";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input token -> command name
    pub bindings: HashMap<String, String>,
    pub settings: HashMap<String, ConfigValue>,
}

/// A setting value; reading it as the wrong kind yields `None`
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl ConfigValue {
    fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Config {
    /// Bind an input token to a command
    pub fn bind(&mut self, token: &str, command: &str) {
        self.bindings.insert(token.to_string(), command.to_string());
    }

    /// Set a configuration value, replacing any earlier one
    pub fn set<V: Into<ConfigValue>>(&mut self, key: &str, value: V) {
        self.settings.insert(key.to_string(), value.into());
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.settings.get(key).and_then(ConfigValue::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.settings.get(key).and_then(ConfigValue::as_int)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(ConfigValue::as_str)
    }

    /// Token bound to `command`, for the banner.
    ///
    /// With several aliases the lexically smallest wins, so the banner does
    /// not depend on map iteration order.
    pub fn token_for(&self, command: &str) -> Option<&str> {
        self.bindings
            .iter()
            .filter(|(_, bound)| bound.as_str() == command)
            .map(|(token, _)| token.as_str())
            .min()
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}
