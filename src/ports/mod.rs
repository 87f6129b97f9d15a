mod invocation_runner;
mod invoker_logger;
mod output_sink;

pub use invocation_runner::{InvocationRunner, InvocationStreams};
pub use invoker_logger::{InvokerLogger, LogLevel};
pub use output_sink::OutputSink;
