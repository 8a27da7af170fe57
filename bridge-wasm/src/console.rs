//! Browser console [`LoggerSink`].

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::logging::{LogEntry, LogLevel, LoggerSink};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Forwards log entries to `console.*` by level.
///
/// Holds no JS handles so it can be installed in the global `tracing`
/// dispatcher.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLoggerSink {
    min_level: LogLevel,
}

impl ConsoleLoggerSink {
    /// Sink dropping entries below `min_level`.
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for ConsoleLoggerSink {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LoggerSink for ConsoleLoggerSink {
    fn log(&self, entry: LogEntry) -> BridgeResult<()> {
        if entry.level < self.min_level {
            return Ok(());
        }

        let line = JsValue::from_str(&entry.format_line());
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => console::debug_1(&line),
            LogLevel::Info => console::info_1(&line),
            LogLevel::Warn => console::warn_1(&line),
            LogLevel::Error => console::error_1(&line),
        }
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
