//! Logging facilities for Text Ticker.
//!
//! Text Ticker uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("text_ticker::diagnostics=warn,text_ticker=debug")
//!     .init();
//! ```
//!
//! Operator-facing diagnostics (bad `items` JSON, unmeasurable layout) are
//! logged under [`targets::DIAGNOSTICS`], so a host can route exactly those
//! to its console.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "text_ticker_core";
    /// Timer system target.
    pub const TIMER: &str = "text_ticker_core::timer";
    /// Debounce target.
    pub const DEBOUNCE: &str = "text_ticker_core::debounce";
    /// Frame callback target.
    pub const FRAME: &str = "text_ticker_core::frame";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "text_ticker_core::signal";
    /// Widget target.
    pub const WIDGET: &str = "text_ticker";
    /// Lifecycle transitions and attribute routing.
    pub const LIFECYCLE: &str = "text_ticker::lifecycle";
    /// Width measurement and keyframe installation.
    pub const ANIMATOR: &str = "text_ticker::animator";
    /// Operator-facing diagnostics.
    pub const DIAGNOSTICS: &str = "text_ticker::diagnostics";
    /// Performance spans.
    pub const PERF: &str = "text_ticker::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Debug-level event under the widget target.
///
/// Callers must depend on `tracing` themselves.
#[macro_export]
macro_rules! ticker_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::WIDGET, $($arg)*)
    };
}
