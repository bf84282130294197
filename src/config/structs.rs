//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default logger threshold.
    pub level: String,
    /// Threshold for lingolog's own diagnostics (unset = silent).
    pub internal_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            internal_level: None,
        }
    }
}

/// Console pair configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Attach the console pair.
    pub enabled: bool,
    /// Enable ANSI colors.
    pub colors: bool,
    /// Stream for DEBUG and INFO (stdout, stderr).
    pub info_stream: String,
    /// Stream for WARNING and above (stdout, stderr).
    pub error_stream: String,
    /// Line template.
    pub structure: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            info_stream: "stderr".to_string(),
            error_stream: "stderr".to_string(),
            structure: "{tag} {msg}".to_string(),
        }
    }
}

/// Rotating file sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Open a file sink.
    pub enabled: bool,
    /// Log file path (`~` is expanded).
    pub path: String,
    /// Size threshold for rotation (e.g. "10M", "512K").
    pub max_size: String,
    /// Number of backups to keep.
    pub backups: usize,
    /// Timestamp format (strftime).
    pub timestamp_format: String,
    /// Line template.
    pub structure: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "lingolog").map_or_else(
            || "lingolog.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("lingolog.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            path,
            max_size: "10M".to_string(),
            backups: 10,
            timestamp_format: "%Y-%m-%d %H:%M:%S,%3f".to_string(),
            structure: "{timestamp} [{level}] {msg}".to_string(),
        }
    }
}
