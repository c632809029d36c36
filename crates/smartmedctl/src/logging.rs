//! Invocation log for smartmedctl
//!
//! One JSON line per command, XDG state directory with a fallback chain.
//! Only the command name and outcome are recorded, never patient data.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Log entry for each smartmedctl invocation
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp
    pub ts: String,

    /// Request ID (UUID)
    pub req_id: String,

    /// Command name
    pub command: String,

    /// Exit code
    pub exit_code: i32,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Success flag
    pub ok: bool,

    /// Set when `recommend` answered from the built-in fallback
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,

    /// Error details if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(command: &str, exit_code: i32, duration_ms: u64) -> Self {
        Self {
            ts: Self::now(),
            req_id: Self::generate_req_id(),
            command: command.to_string(),
            exit_code,
            duration_ms,
            ok: exit_code == 0,
            fallback: false,
            error: None,
        }
    }

    /// Discover log file path with fallback chain
    ///
    /// Priority:
    /// 1. $SMARTMED_LOG_FILE environment variable (explicit override)
    /// 2. $XDG_STATE_HOME/smartmed/ctl.jsonl (XDG standard)
    /// 3. ~/.local/state/smartmed/ctl.jsonl (XDG fallback)
    fn discover_log_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SMARTMED_LOG_FILE") {
            return Some(PathBuf::from(path));
        }

        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            return Some(Path::new(&xdg_state).join("smartmed").join("ctl.jsonl"));
        }

        dirs::home_dir().map(|home| home.join(".local/state/smartmed/ctl.jsonl"))
    }

    /// Append the entry to the log file; failures are silent.
    /// stdout is reserved for command output.
    pub fn write(&self) {
        let Some(path) = Self::discover_log_path() else {
            return;
        };
        if let Err(e) = self.write_to_file(&path) {
            tracing::debug!("Invocation log not written to {}: {}", path.display(), e);
        }
    }

    fn write_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Generate request ID
    pub fn generate_req_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Get current timestamp in ISO 8601 format
    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}
