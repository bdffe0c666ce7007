use std::{fmt, io::IsTerminal as _};

use clap::ValueEnum;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter, Layer, Registry};

/// Targets whose events pass the filter below `trace`.
const WORKSPACE_TARGETS: &[&str] = &["car_service", "reviews_subgraph", "subgraph_server"];

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the services
    Error,
    /// Warnings and errors from the services
    Warn,
    /// Info, warning and error messages from the services
    #[default]
    Info,
    /// Debug messages from the services and the HTTP request traces
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub fn filter_directives(&self) -> String {
        match self {
            LogLevel::Off => "off".to_owned(),
            LogLevel::Trace => "trace".to_owned(),
            level => {
                let mut directives: Vec<String> = WORKSPACE_TARGETS
                    .iter()
                    .map(|target| format!("{target}={level}"))
                    .collect();

                if *level == LogLevel::Debug {
                    directives.push("tower_http=debug".to_owned());
                }

                directives.push("off".to_owned());
                directives.join(",")
            }
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogStyle {
    /// Standard text
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl AsRef<str> for LogStyle {
    fn as_ref(&self) -> &str {
        match self {
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Installs the global tracing subscriber. Must be called at most once.
pub(crate) fn init(level: LogLevel, style: LogStyle) {
    let env_filter = EnvFilter::new(level.filter_directives());
    let layer = tracing_subscriber::fmt::layer();

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match style {
        // for interactive terminals we provide colored output
        LogStyle::Text if std::io::stdout().is_terminal() => layer.with_ansi(true).boxed(),
        // for server logs, colors are off
        LogStyle::Text => layer.with_ansi(false).boxed(),
        LogStyle::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry().with(layer).with(env_filter).init();
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::{LogLevel, LogStyle};

    #[test]
    fn info_only_covers_the_services() {
        assert_eq!(
            LogLevel::Info.filter_directives(),
            "car_service=info,reviews_subgraph=info,subgraph_server=info,off"
        );
    }

    #[test]
    fn debug_adds_request_traces() {
        assert_eq!(
            LogLevel::Debug.filter_directives(),
            "car_service=debug,reviews_subgraph=debug,subgraph_server=debug,tower_http=debug,off"
        );
    }

    #[test]
    fn off_and_trace_are_global() {
        assert_eq!(LogLevel::Off.filter_directives(), "off");
        assert_eq!(LogLevel::Trace.filter_directives(), "trace");
    }

    #[test]
    fn parse_from_command_line_values() {
        assert_eq!(LogLevel::from_str("warn", true), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("ERROR", true), Ok(LogLevel::Error));
        assert_eq!(LogStyle::from_str("json", true), Ok(LogStyle::Json));
        assert!(LogLevel::from_str("verbose", true).is_err());
    }

    #[test]
    fn display_matches_the_command_line_value() {
        assert_eq!(LogLevel::default().to_string(), "info");
        assert_eq!(LogStyle::default().to_string(), "text");
    }
}
