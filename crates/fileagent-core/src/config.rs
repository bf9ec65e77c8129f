/// Analyzer settings: text decoding, report language, and where
/// imported copies are kept.
///
/// Loaded from an optional JSON file, then overridden from environment
/// variables. Every field has a default so an empty `{}` is valid.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "FILEAGENT_CONFIG";
const ENCODING_ENV: &str = "FILEAGENT_ENCODING";
const LOCALE_ENV: &str = "FILEAGENT_LOCALE";
const WORKSPACE_ENV: &str = "FILEAGENT_WORKSPACE";
const LOG_LEVEL_ENV: &str = "FILEAGENT_LOG";

/// How text-category files are decoded before counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// Strict UTF-8; invalid sequences make the statistics unavailable.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
    /// ISO-8859-1; every byte is one character.
    Latin1,
}

impl FromStr for TextEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf8_lossy" | "utf-8-lossy" => Ok(Self::Utf8Lossy),
            "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            _ => Err(ConfigError::InvalidValue {
                key: ENCODING_ENV,
                value: s.to_string(),
            }),
        }
    }
}

/// Language of the report labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLocale {
    #[default]
    English,
    Arabic,
}

impl FromStr for ReportLocale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            _ => Err(ConfigError::InvalidValue {
                key: LOCALE_ENV,
                value: s.to_string(),
            }),
        }
    }
}

/// All analyzer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub encoding: TextEncoding,
    pub locale: ReportLocale,
    /// App-private directory files are copied into before analysis.
    /// `None` analyses files where they are.
    pub workspace_dir: Option<PathBuf>,
    /// Maximum log level for the binary's subscriber (`error` .. `trace`).
    pub log_level: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::default(),
            locale: ReportLocale::default(),
            workspace_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Read settings from a JSON file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `FILEAGENT_*` environment overrides.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Empty values are ignored.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENCODING_ENV) {
            self.encoding = v.parse()?;
        }
        if let Some(v) = get(LOCALE_ENV) {
            self.locale = v.parse()?;
        }
        if let Some(v) = get(WORKSPACE_ENV) {
            self.workspace_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = get(LOG_LEVEL_ENV) {
            self.log_level = v;
        }
        Ok(())
    }
}
