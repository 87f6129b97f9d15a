pub mod maven_command;
mod sinks;
mod tracing_logger;

pub use maven_command::MavenCommandRunner;
pub use sinks::{CollectingSink, StderrSink, StdoutSink};
pub use tracing_logger::TracingLogger;
