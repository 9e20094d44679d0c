//! Shared constants used across playground crates.

/// Environment variable naming a file whose contents replace the built-in document.
pub const ENV_DOCUMENT: &str = "PLAYGROUND_DOCUMENT";

/// Environment variable pinning the editor viewport height in pixels.
pub const ENV_EDITOR_HEIGHT: &str = "PLAYGROUND_EDITOR_HEIGHT";

/// Environment variable overriding the palette's active-line color (`#rrggbb[aa]`).
pub const ENV_ACTIVE_LINE_COLOR: &str = "PLAYGROUND_ACTIVE_LINE_COLOR";

/// Environment variable enabling per-event editor tracing.
pub const ENV_LOG_EVENTS: &str = "PLAYGROUND_LOG_EVENTS";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "playground=info,playground_gui=info";
