//! Structured JSON logging to stderr.
//!
//! One JSON object per line:
//! `{"timestampMs":..,"level":"info","event":"command_applied","turn":3,"details":{..}}`.
//! Off by default; drivers turn it on with [`enable`].

use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static ENABLED: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogLine<'a> {
    pub timestamp_ms: u64,
    pub level: Level,
    pub event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn: Option<u32>,
    pub details: Value,
}

pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

#[must_use]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Emit one log line if logging is enabled.
pub fn emit(level: Level, event: &str, turn: Option<u32>, details: Value) {
    if !is_enabled() {
        return;
    }
    let line = LogLine {
        timestamp_ms: now_ms(),
        level,
        event,
        turn,
        details,
    };
    if let Ok(json) = serde_json::to_string(&line) {
        eprintln!("{}", json);
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_line_shape() {
        let line = LogLine {
            timestamp_ms: 5,
            level: Level::Warn,
            event: "command_rejected",
            turn: None,
            details: json!({"reason": "cell has already been played"}),
        };
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["timestampMs"], 5);
        assert_eq!(value["level"], "warn");
        assert_eq!(value["event"], "command_rejected");
        assert!(value.get("turn").is_none());
        assert_eq!(value["details"]["reason"], "cell has already been played");
    }

    #[test]
    fn test_toggle() {
        enable();
        assert!(is_enabled());
        disable();
        assert!(!is_enabled());
    }
}
