//! mvn-invoke: configure and run Maven install, deploy and goal invocations.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{CollectingSink, MavenCommandRunner, StderrSink, StdoutSink, TracingLogger};
pub use app::api::{configure_invoker, console_template, resolve_options, template};
pub use app::{InvocationHandle, MavenInvokerTemplate, configure};
pub use domain::{
    AppError, ArtifactCoordinates, InvocationRequest, InvocationResult, InvokerSettings,
    MavenInvokerOptions, OptionOverrides,
};
pub use ports::{InvocationRunner, InvocationStreams, InvokerLogger, LogLevel, OutputSink};
