// LineSmith - platform/config.rs
//
// Platform config-directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LineSmith configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/linesmith/ or %APPDATA%\LineSmith\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
            }
        } else {
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[output]` section.
    pub output: OutputSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Source size in bytes above which a warning is logged before reading.
    pub large_file_warning_bytes: Option<u64>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults; a
/// bad config never prevents the application from starting.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging level string (consumed by logging init before tracing exists).
    pub log_level: Option<String>,

    /// Large-file warning threshold in bytes.
    pub large_file_warning_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            large_file_warning_bytes: constants::DEFAULT_LARGE_FILE_WARNING_BYTES,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). Warnings are returned rather than logged because this runs
/// before the logging subsystem is initialised.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    if !config_path.exists() {
        return (config, warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (config, warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (config, warnings);
        }
    };

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lowered = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lowered.as_str()) {
            config.log_level = Some(lowered);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. Expected one of {:?}. \
                 Using default ({}).",
                constants::VALID_LOG_LEVELS,
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    // -- Output: large_file_warning_bytes --
    if let Some(bytes) = raw.output.large_file_warning_bytes {
        if (constants::MIN_LARGE_FILE_WARNING_BYTES..=constants::MAX_LARGE_FILE_WARNING_BYTES)
            .contains(&bytes)
        {
            config.large_file_warning_bytes = bytes;
        } else {
            warnings.push(format!(
                "[output] large_file_warning_bytes = {bytes} is out of range ({}-{}). \
                 Using default ({}).",
                constants::MIN_LARGE_FILE_WARNING_BYTES,
                constants::MAX_LARGE_FILE_WARNING_BYTES,
                constants::DEFAULT_LARGE_FILE_WARNING_BYTES,
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(content: &str) -> (AppConfig, Vec<String>) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), content).unwrap();
        load_config(dir.path())
    }

    #[test]
    fn missing_config_is_first_run_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert!(config.log_level.is_none());
        assert_eq!(
            config.large_file_warning_bytes,
            constants::DEFAULT_LARGE_FILE_WARNING_BYTES
        );
    }

    #[test]
    fn valid_values_are_accepted() {
        let (config, warnings) = load_from(
            "[logging]\nlevel = \"debug\"\n\n[output]\nlarge_file_warning_bytes = 2048\n",
        );
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.large_file_warning_bytes, 2048);
    }

    #[test]
    fn unrecognised_level_warns_and_defaults() {
        let (config, warnings) = load_from("[logging]\nlevel = \"verbose\"\n");
        assert_eq!(warnings.len(), 1);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn out_of_range_threshold_warns_and_defaults() {
        let (config, warnings) = load_from("[output]\nlarge_file_warning_bytes = 7\n");
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            config.large_file_warning_bytes,
            constants::DEFAULT_LARGE_FILE_WARNING_BYTES
        );
    }

    #[test]
    fn unparseable_toml_warns_and_defaults() {
        let (config, warnings) = load_from("[logging\nlevel =");
        assert_eq!(warnings.len(), 1);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (_, warnings) = load_from("[future]\nshiny = true\n");
        assert!(warnings.is_empty());
    }
}
