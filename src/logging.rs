//! Logging setup
//!
//! Output goes to a rolling file, JSON or text, plus stdout in text mode.
//! HTTP requests run inside an `http_request` span (see
//! [`request_id`](crate::gateway::request_id)); its fields are attached to
//! every line logged while serving the request, and closing it logs the
//! request's busy/idle time.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.log_level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).init();
    }

    guard
}

fn file_appender(config: &AppConfig) -> RollingFileAppender {
    match config.rotation.as_str() {
        "hourly" => rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => rolling::daily(&config.log_dir, &config.log_file),
        _ => rolling::never(&config.log_dir, &config.log_file),
    }
}

/// `log_level` for our code; sqlx logs every statement at info
fn filter_directives(log_level: &str) -> String {
    format!("{},sqlx=warn", log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_parse() {
        let directives = filter_directives("debug");
        assert_eq!(directives, "debug,sqlx=warn");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
