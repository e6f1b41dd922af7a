//! Configuration struct definitions.

use serde::Deserialize;

/// Settings that apply whichever sink is chosen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Sink kind: console, timestamped, file, composite, null.
    pub sink: String,
    /// Level for tierlog's own diagnostics on stderr, or "off".
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            sink: "timestamped".to_string(),
            diagnostics: "off".to_string(),
        }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable colors.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Log file path; `~` is expanded. Without it the file sink stays closed.
    pub path: Option<String>,
}
