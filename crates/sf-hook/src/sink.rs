//! Progress output for hook execution

/// One-method text-output capability used for the banner announcing which
/// hook script is being applied. Not a logging facility.
pub trait ProgressSink: Send + Sync {
    /// Emit one line of progress text.
    fn line(&self, text: &str);
}

/// Sink printing to stdout
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn line(&self, text: &str) {
        println!("{}", text);
    }
}
