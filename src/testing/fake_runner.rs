use std::sync::Mutex;

use crate::domain::{AppError, InvocationRequest, InvocationResult, InvokerSettings};
use crate::ports::{InvocationRunner, InvocationStreams};

/// Records requests instead of spawning Maven.
pub struct FakeRunner {
    pub requests: Mutex<Vec<(InvokerSettings, InvocationRequest)>>,
    pub exit_code: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::exiting_with(0)
    }

    pub fn exiting_with(exit_code: i32) -> Self {
        Self { requests: Mutex::new(Vec::new()), exit_code, stdout: Vec::new(), stderr: Vec::new() }
    }

    pub fn printing(mut self, stdout: &[&str], stderr: &[&str]) -> Self {
        self.stdout = stdout.iter().map(|s| s.to_string()).collect();
        self.stderr = stderr.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn last_request(&self) -> InvocationRequest {
        self.requests.lock().unwrap().last().expect("no request recorded").1.clone()
    }

    pub fn last_args(&self) -> Vec<String> {
        let requests = self.requests.lock().unwrap();
        let (settings, request) = requests.last().expect("no request recorded");
        request.command_line_args(&settings.local_repository)
    }
}

impl InvocationRunner for FakeRunner {
    fn run(
        &self,
        settings: &InvokerSettings,
        request: &InvocationRequest,
        streams: InvocationStreams<'_>,
    ) -> Result<InvocationResult, AppError> {
        self.requests.lock().unwrap().push((settings.clone(), request.clone()));
        for line in &self.stdout {
            streams.output.consume_line(line);
        }
        for line in &self.stderr {
            streams.error.consume_line(line);
        }
        Ok(InvocationResult::new(self.exit_code))
    }
}
