//! Session logging to disk.
//!
//! When enabled, appends the simulated commerce events (purchases, gift
//! sends, logins, opened doors) to daily log files named
//! `session_<date>.log` in the configured log directory (default:
//! `~/.local/share/adventmagic/logs/`). Internal diagnostics go through
//! `tracing` instead and land in the optional debug file.

use crate::app::state::SessionEvent;
use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Writes session events to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct SessionLogger {
    enabled: bool,
    log_dir: String,
    log_purchases: bool,
    log_gifts: bool,
    log_days: bool,
    file_handles: HashMap<String, fs::File>,
}

impl SessionLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            log_purchases: config.log_purchases,
            log_gifts: config.log_gifts,
            log_days: config.log_days,
            file_handles: HashMap::new(),
        }
    }

    /// Append one event to today's session log. No-op if logging is disabled
    /// or the event's category is not configured for logging.
    pub fn log_event(&mut self, event: &SessionEvent) {
        if !self.enabled {
            return;
        }

        let line = match event {
            SessionEvent::Purchase { order_ref, theme } if self.log_purchases => {
                format!("purchase confirmed, order {} ({})", order_ref, theme)
            }
            SessionEvent::GiftQueued { recipient } if self.log_gifts => {
                format!("gift card queued for {}", recipient)
            }
            SessionEvent::GiftDelivered { recipient } if self.log_gifts => {
                format!("gift card delivered to {} (simulated)", recipient)
            }
            SessionEvent::Login => "magic-link login (simulated)".to_string(),
            SessionEvent::DayOpened { day, theme } if self.log_days => {
                format!("door {} opened ({})", day, theme)
            }
            _ => return,
        };

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("session_{}.log", date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&self.log_dir[2..])
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let filepath = log_dir.join(&filename);

        // Get or create file handle
        let handle = self.file_handles.entry(filename.clone()).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a file that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let timestamp = chrono::Local::now().format("%H:%M:%S");
        let _ = writeln!(handle, "[{}] {}", timestamp, line);
    }
}

/// Install a tracing subscriber appending to the configured debug file.
/// When no file is configured, diagnostics are discarded. ANSI is off since
/// stdout belongs to the TUI either way.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let Some(ref path) = config.debug_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open debug log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ThemeId;

    fn logger_in(dir: &std::path::Path) -> SessionLogger {
        SessionLogger::new(&LoggingConfig {
            enabled: true,
            log_dir: dir.to_string_lossy().into_owned(),
            ..LoggingConfig::default()
        })
    }

    fn todays_log(dir: &std::path::Path) -> String {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        std::fs::read_to_string(dir.join(format!("session_{}.log", date))).unwrap_or_default()
    }

    #[test]
    fn purchase_and_gift_events_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger_in(dir.path());
        logger.log_event(&SessionEvent::Purchase {
            order_ref: "AM-000042".to_string(),
            theme: ThemeId::Esoteric,
        });
        logger.log_event(&SessionEvent::GiftQueued {
            recipient: "Sam".to_string(),
        });
        logger.log_event(&SessionEvent::GiftDelivered {
            recipient: "Sam".to_string(),
        });
        logger.log_event(&SessionEvent::Login);
        let contents = todays_log(dir.path());
        assert!(contents.contains("order AM-000042 (esoteric)"));
        assert!(contents.contains("gift card queued for Sam"));
        assert!(contents.contains("gift card delivered to Sam"));
        assert!(contents.contains("magic-link login"));
    }

    #[test]
    fn day_events_are_gated_off_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger_in(dir.path());
        logger.log_event(&SessionEvent::DayOpened {
            day: 5,
            theme: ThemeId::Scientific,
        });
        assert!(!todays_log(dir.path()).contains("door 5"));
    }

    #[test]
    fn disabled_logger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = SessionLogger::new(&LoggingConfig {
            enabled: false,
            log_dir: dir.path().to_string_lossy().into_owned(),
            ..LoggingConfig::default()
        });
        logger.log_event(&SessionEvent::Login);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
