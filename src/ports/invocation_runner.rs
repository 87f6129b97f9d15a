use crate::domain::{AppError, InvocationRequest, InvocationResult, InvokerSettings};

use super::{InvokerLogger, OutputSink};

/// Sinks and logger a runner reports through for one execution.
#[derive(Clone, Copy)]
pub struct InvocationStreams<'a> {
    pub output: &'a dyn OutputSink,
    pub error: &'a dyn OutputSink,
    pub logger: &'a dyn InvokerLogger,
}

/// Port for executing a Maven invocation.
pub trait InvocationRunner {
    /// Execute `request` with `settings` and report the exit code.
    ///
    /// A non-zero exit code is a successful return; `Err` means the process
    /// could not be run at all.
    fn run(
        &self,
        settings: &InvokerSettings,
        request: &InvocationRequest,
        streams: InvocationStreams<'_>,
    ) -> Result<InvocationResult, AppError>;
}
