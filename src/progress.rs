//! Stage event sink: the injected reporting capability.
//!
//! The pipeline does not talk to a process-wide logger directly; it
//! reports through a [`StageSink`] handed in by the caller. Production
//! runs use [`LogSink`], tests use capturing or silent implementations.

/// Receives pipeline stage events.
///
/// All methods must be cheap and non-blocking; the pipeline calls them
/// inline between filesystem operations.
pub trait StageSink: Send + Sync {
    /// A pipeline stage is starting.
    fn stage(&self, message: &str);

    /// Informational event.
    fn info(&self, message: &str);

    /// Recoverable failure: the run degrades and continues.
    fn warn(&self, message: &str);

    /// Failure worth surfacing prominently, still not fatal by itself.
    fn error(&self, message: &str);
}

/// Forwards stage events to the `log` facade.
#[derive(Debug, Default, Clone)]
pub struct LogSink;

impl StageSink for LogSink {
    fn stage(&self, message: &str) {
        log::info!("{message}");
    }

    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Discards all stage events.
#[derive(Debug, Default, Clone)]
pub struct SilentSink;

impl StageSink for SilentSink {
    fn stage(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
