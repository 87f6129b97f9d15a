use crate::ports::{InvokerLogger, LogLevel};

/// Forwards invoker diagnostics to the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl InvokerLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "mvn_invoke::invoker", "{message}"),
            LogLevel::Info => tracing::info!(target: "mvn_invoke::invoker", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "mvn_invoke::invoker", "{message}"),
            LogLevel::Error => tracing::error!(target: "mvn_invoke::invoker", "{message}"),
        }
    }
}
