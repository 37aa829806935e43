//! Prelude module for Text Ticker.
//!
//! ```ignore
//! use text_ticker::prelude::*;
//! ```

// ============================================================================
// Widget and host
// ============================================================================

pub use crate::host::{HeadlessHost, MeasureProbe, TickerHost};
pub use crate::widget::{LifecycleState, TickerWidget};

// ============================================================================
// Configuration and content
// ============================================================================

pub use crate::attributes::{Attribute, AttributeMap};
pub use crate::config::{TickerConfig, TickerDefaults};
pub use crate::items::{ItemList, TickerItem};

// ============================================================================
// Output and diagnostics
// ============================================================================

pub use crate::animator::AnimationOutcome;
pub use crate::diagnostics::{Diagnostic, DiagnosticLevel};
pub use crate::shadow::{Animation, ShadowTree};
pub use crate::{Result, TickerError};

pub use text_ticker_core::Signal;
