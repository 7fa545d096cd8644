//! Build log models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a build log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSeverity {
    Info,
    Warning,
    Error,
    Success,
}

impl LogSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSeverity::Info => "info",
            LogSeverity::Warning => "warning",
            LogSeverity::Error => "error",
            LogSeverity::Success => "success",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogSeverity {
    type Err = String;

    // Exact match only: "warn" is not an alias for "warning" here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(LogSeverity::Info),
            "warning" => Ok(LogSeverity::Warning),
            "error" => Ok(LogSeverity::Error),
            "success" => Ok(LogSeverity::Success),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// A single build log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogSeverity,
    pub message: String,
    pub project_id: String,
    pub project_name: String,
    pub deployment_id: String,
}

impl LogEntry {
    /// Plain-text line used by the log export
    pub fn to_line(&self) -> String {
        format!(
            "[{}] {} {} ({}): {}",
            self.timestamp.to_rfc3339(),
            self.level.as_str().to_uppercase(),
            self.project_name,
            self.deployment_id,
            self.message
        )
    }
}
