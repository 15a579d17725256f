//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works with no config file.

use crate::content::ThemeId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Number of floating background stars. 0 disables the background.
    #[serde(default = "default_sparkle_count")]
    pub sparkle_count: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sparkle_count: default_sparkle_count(),
        }
    }
}

/// Storefront behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// How long the fake gift-send animation runs before "delivery".
    #[serde(default = "default_gift_send_millis")]
    pub gift_send_millis: u64,
    /// Theme preselected at startup (kebab-case name).
    #[serde(default = "default_theme")]
    pub default_theme: ThemeId,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            gift_send_millis: default_gift_send_millis(),
            default_theme: default_theme(),
        }
    }
}

impl BehaviorConfig {
    pub fn gift_send_delay(&self) -> Duration {
        Duration::from_millis(self.gift_send_millis)
    }
}

/// Session logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_true")]
    pub log_purchases: bool,
    #[serde(default = "default_true")]
    pub log_gifts: bool,
    #[serde(default)]
    pub log_days: bool,
    /// When set, tracing diagnostics are appended to this file.
    #[serde(default)]
    pub debug_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            log_purchases: true,
            log_gifts: true,
            log_days: false,
            debug_file: None,
        }
    }
}

fn default_sparkle_count() -> usize {
    40
}

fn default_gift_send_millis() -> u64 {
    1200
}

fn default_theme() -> ThemeId {
    ThemeId::Scientific
}

fn default_log_dir() -> String {
    "~/.local/share/adventmagic/logs".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.sparkle_count, 40);
        assert_eq!(cfg.behavior.gift_send_millis, 1200);
        assert_eq!(cfg.behavior.default_theme, ThemeId::Scientific);
        assert!(!cfg.logging.enabled);
        assert!(cfg.logging.log_purchases);
        assert!(cfg.logging.log_gifts);
        assert!(!cfg.logging.log_days);
        assert!(cfg.logging.debug_file.is_none());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            "[behavior]\ndefault_theme = \"self-growth\"\ngift_send_millis = 300\n",
        )
        .unwrap();
        assert_eq!(cfg.behavior.default_theme, ThemeId::SelfGrowth);
        assert_eq!(cfg.behavior.gift_send_delay(), Duration::from_millis(300));
        assert_eq!(cfg.ui.sparkle_count, 40);
    }

    #[test]
    fn unknown_default_theme_fails_parse() {
        let result: Result<AppConfig, _> =
            toml::from_str("[behavior]\ndefault_theme = \"astrology\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn logging_table_round_trips() {
        let cfg: AppConfig = toml::from_str(
            "[logging]\nenabled = true\nlog_days = true\ndebug_file = \"/tmp/am-debug.log\"\n",
        )
        .unwrap();
        assert!(cfg.logging.enabled);
        assert!(cfg.logging.log_days);
        assert_eq!(
            cfg.logging.debug_file.as_deref(),
            Some(std::path::Path::new("/tmp/am-debug.log"))
        );
    }
}
