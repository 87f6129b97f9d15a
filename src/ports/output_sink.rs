/// Port for consuming a process stream one line at a time.
pub trait OutputSink: Send + Sync {
    /// Receive one line, without its trailing newline.
    fn consume_line(&self, line: &str);
}
