//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/jlogfmt/config.toml` or
//!    `$XDG_CONFIG_HOME/jlogfmt/config.toml`)
//! 3. Built-in defaults
//!
//! The resolved [`Config`] is immutable for the rest of the run and is
//! passed explicitly to the decoder, formatter, and pipeline; nothing in
//! the core reads ambient global state.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::JlogfmtError;
use crate::fields;
use crate::highlight::Highlighter;
use crate::level::Level;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Minimum log level to display; records below this are suppressed.
    /// Records with no level or an unknown level always pass.
    pub min_level: Option<Level>,
    /// Alias lists per canonical field, in priority order.
    pub timestamp_fields: Vec<String>,
    pub level_fields: Vec<String>,
    pub message_fields: Vec<String>,
    pub logger_fields: Vec<String>,
    /// Attributes to omit from output entirely.
    pub suppress_fields: Vec<String>,
    /// Attributes to render first, in this order; the rest follow in input order.
    pub field_order: Vec<String>,
    /// Output raw JSON instead of formatted text (for piping to other tools).
    pub json_output: bool,
    /// Echo malformed lines verbatim (true) or summarize them (false).
    pub raw_on_error: bool,
    /// Append the decoder's error detail to malformed-line notices.
    pub verbose: bool,
    /// Maximum character length for attribute values before truncation. 0 = no limit.
    pub max_field_length: usize,
    /// Timestamp display format string (strftime-compatible).
    pub timestamp_format: String,
    /// Custom level name aliases mapping string → [`Level`].
    pub level_aliases: Option<HashMap<String, Level>>,
    /// `color:regex` highlight rules.
    pub highlight: Highlighter,
    /// Only print lines matching at least one highlight rule.
    pub filter_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            min_level: None,
            timestamp_fields: fields::default_list(fields::TIMESTAMP_FIELDS),
            level_fields: fields::default_list(fields::LEVEL_FIELDS),
            message_fields: fields::default_list(fields::MESSAGE_FIELDS),
            logger_fields: fields::default_list(fields::LOGGER_FIELDS),
            suppress_fields: Vec::new(),
            field_order: Vec::new(),
            json_output: false,
            raw_on_error: true,
            verbose: false,
            max_field_length: 120,
            timestamp_format: "%H:%M:%S%.3f".to_string(),
            level_aliases: None,
            highlight: Highlighter::default(),
            filter_only: false,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, JlogfmtError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        }

        config.color_mode = cli.color;

        if let Some(ref level_str) = cli.level {
            config.min_level = Level::from_str_loose(level_str);
        }

        // A single-key override replaces the whole alias list.
        if let Some(ref key) = cli.timestamp_key {
            config.timestamp_fields = vec![key.clone()];
        }
        if let Some(ref key) = cli.level_key {
            config.level_fields = vec![key.clone()];
        }
        if let Some(ref key) = cli.message_key {
            config.message_fields = vec![key.clone()];
        }
        if let Some(ref key) = cli.logger_key {
            config.logger_fields = vec![key.clone()];
        }

        if let Some(ref suppress) = cli.suppress_fields {
            config.suppress_fields.clone_from(suppress);
        }
        if let Some(ref order) = cli.field_order {
            config.field_order.clone_from(order);
        }
        if let Some(ref format) = cli.timestamp_format {
            config.timestamp_format.clone_from(format);
        }
        if let Some(max_len) = cli.max_field_length {
            config.max_field_length = max_len;
        }

        config.json_output = cli.json;
        config.verbose = cli.verbose;
        if cli.summarize_errors {
            config.raw_on_error = false;
        }

        if !cli.patterns.is_empty() {
            config.highlight = Highlighter::from_specs(&cli.patterns)?;
        }
        config.filter_only = cli.filter;
        if config.filter_only && config.highlight.is_empty() {
            return Err(JlogfmtError::Config(
                "--filter requires at least one -p/--pattern".to_string(),
            ));
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/jlogfmt/config.toml` or
    /// `~/.config/jlogfmt/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("jlogfmt").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("jlogfmt")
                .join("config.toml")
        } else {
            PathBuf::from(".config/jlogfmt/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(level) = file.level {
            self.min_level = Level::from_str_loose(&level);
        }

        if let Some(format) = file.timestamp_format {
            self.timestamp_format = format;
        }

        if let Some(max_len) = file.max_field_length {
            self.max_field_length = max_len;
        }

        if let Some(raw) = file.raw_on_error {
            self.raw_on_error = raw;
        }

        if let Some(suppress) = file.suppress {
            self.suppress_fields = suppress;
        }

        if let Some(order) = file.field_order {
            self.field_order = order;
        }

        if let Some(field_aliases) = file.fields {
            if let Some(ts) = field_aliases.timestamp {
                self.timestamp_fields = ts;
            }
            if let Some(lvl) = field_aliases.level {
                self.level_fields = lvl;
            }
            if let Some(msg) = field_aliases.message {
                self.message_fields = msg;
            }
            if let Some(logger) = field_aliases.logger {
                self.logger_fields = logger;
            }
        }

        if let Some(levels) = file.levels {
            let mut aliases = HashMap::new();
            for (key, value) in levels {
                if let Some(level) = Level::from_str_loose(&value) {
                    aliases.insert(key.to_lowercase(), level);
                }
            }
            if !aliases.is_empty() {
                self.level_aliases = Some(aliases);
            }
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    level: Option<String>,
    timestamp_format: Option<String>,
    max_field_length: Option<usize>,
    raw_on_error: Option<bool>,
    suppress: Option<Vec<String>>,
    field_order: Option<Vec<String>>,
    fields: Option<FieldAliases>,
    levels: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct FieldAliases {
    timestamp: Option<Vec<String>>,
    level: Option<Vec<String>>,
    message: Option<Vec<String>>,
    logger: Option<Vec<String>>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, JlogfmtError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JlogfmtError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
