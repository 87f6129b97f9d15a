mod fake_runner;
mod recording_logger;

pub use fake_runner::FakeRunner;
pub use recording_logger::RecordingLogger;
