//! Configuration loading from environment variables.

use crate::constants::{ENV_ACTIVE_LINE_COLOR, ENV_DOCUMENT, ENV_EDITOR_HEIGHT, ENV_LOG_EVENTS};
use crate::error::AppError;
use crate::palette::Rgba;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the playground.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File whose contents seed the editor instead of the built-in example.
    pub document_path: Option<PathBuf>,
    /// Fixed viewport height in pixels; `None` tracks the available panel height.
    pub editor_height: Option<f32>,
    /// Override for the palette's active-line color.
    pub active_line_color: Option<Rgba>,
    /// Trace every editor event at debug level.
    pub log_events: bool,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    None
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

/// Parse a pixel height. Any float is accepted, including negative and
/// non-finite values; the editor does not correct them.
fn parse_editor_height(value: &str) -> Result<f32, AppError> {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f32>()
        .map_err(|err| AppError::InvalidConfig {
            key: ENV_EDITOR_HEIGHT,
            reason: err.to_string(),
        })
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`]; unset variables keep their defaults.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidConfig`] for an unparsable height and
    /// [`AppError::InvalidColor`] for a malformed color override.
    pub fn from_env() -> Result<Self, AppError> {
        let editor_height = non_empty_var(ENV_EDITOR_HEIGHT)
            .map(|value| parse_editor_height(&value))
            .transpose()?;
        let active_line_color = non_empty_var(ENV_ACTIVE_LINE_COLOR)
            .map(|value| Rgba::from_hex(&value))
            .transpose()?;

        Ok(Self {
            document_path: non_empty_var(ENV_DOCUMENT).map(|path| expand_tilde(path.trim())),
            editor_height,
            active_line_color,
            log_events: env_flag_enabled(ENV_LOG_EVENTS),
        })
    }
}
