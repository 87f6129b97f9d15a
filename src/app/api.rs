//! API Facade for the application.
//!
//! Glues option loading, invoker configuration and the process runner
//! together for callers that run against the real environment.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{MavenCommandRunner, StderrSink, StdoutSink, TracingLogger};
use crate::app::config;
use crate::app::configurator::{self, InvocationHandle};
use crate::app::template::MavenInvokerTemplate;
use crate::ports::{InvokerLogger, OutputSink};

pub use crate::domain::{AppError, MavenInvokerOptions, OptionOverrides};

/// Load options from the config file and overlay `overrides`.
///
/// `config_path` of `None` reads `$HOME/.config/mvn-invoke/config.toml` if
/// present; `$HOME` is not needed when `config_path` is given.
pub fn resolve_options(
    config_path: Option<&Path>,
    overrides: OptionOverrides,
) -> Result<MavenInvokerOptions, AppError> {
    let home = match config_path {
        Some(_) => None,
        None => config::user_home().ok(),
    };
    Ok(config::load_options(config_path, home.as_deref())?.merge(overrides))
}

/// Configure an invoker with caller-supplied sinks and logger.
///
/// `$HOME` is read only when the default local repository is needed.
pub fn configure_invoker(
    options: &MavenInvokerOptions,
    output: Arc<dyn OutputSink>,
    error: Arc<dyn OutputSink>,
    logger: Arc<dyn InvokerLogger>,
) -> Result<InvocationHandle, AppError> {
    configurator::configure(options, output, error, logger, config::user_home)
}

/// Template that spawns the real Maven process with caller-supplied sinks and logger.
pub fn template(
    options: &MavenInvokerOptions,
    output: Arc<dyn OutputSink>,
    error: Arc<dyn OutputSink>,
    logger: Arc<dyn InvokerLogger>,
) -> Result<MavenInvokerTemplate<MavenCommandRunner>, AppError> {
    let handle = configure_invoker(options, output, error, logger)?;
    Ok(MavenInvokerTemplate::new(handle, MavenCommandRunner::new(), options))
}

/// Template wired to the console: Maven output to stdout (or stderr when
/// `quiet_stdout`), Maven errors to stderr, diagnostics to `tracing`.
pub fn console_template(
    options: &MavenInvokerOptions,
    quiet_stdout: bool,
) -> Result<MavenInvokerTemplate<MavenCommandRunner>, AppError> {
    let output: Arc<dyn OutputSink> =
        if quiet_stdout { Arc::new(StderrSink) } else { Arc::new(StdoutSink) };
    template(options, output, Arc::new(StderrSink), Arc::new(TracingLogger))
}
