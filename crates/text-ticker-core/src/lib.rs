//! Core systems for Text Ticker.
//!
//! This crate provides the host-agnostic scheduling pieces the ticker widget
//! is built on:
//!
//! - **Timers**: One-shot timers driven by an explicit clock
//! - **Debouncing**: Trailing debounce built on one-shot timers
//! - **Frame Callbacks**: Cancellable "run after the next layout commit" requests
//! - **Signal/Slot System**: Type-safe notification of interested parties
//! - **Logging**: `tracing` targets and helpers shared by the workspace
//!
//! Nothing here spawns threads or reads the wall clock on its own; the host
//! passes `Instant`s in and pumps the schedulers from its event loop.
//!
//! # Debounce Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use text_ticker_core::Debouncer;
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(100));
//! let start = Instant::now();
//!
//! debouncer.trigger(start);
//! debouncer.trigger(start + Duration::from_millis(50));
//!
//! // Still inside the quiet period of the second trigger.
//! assert!(!debouncer.poll(start + Duration::from_millis(120)));
//! // Quiet for 100ms after the last trigger: fires exactly once.
//! assert!(debouncer.poll(start + Duration::from_millis(150)));
//! assert!(!debouncer.poll(start + Duration::from_millis(300)));
//! ```
//!
//! # Signal Example
//!
//! ```
//! use text_ticker_core::Signal;
//!
//! let width_changed = Signal::<f64>::new();
//! let conn_id = width_changed.connect(|width| {
//!     println!("cycle width is now {width}px");
//! });
//!
//! width_changed.emit(320.0);
//! width_changed.disconnect(conn_id);
//! ```

mod debounce;
mod error;
mod frame;
pub mod logging;
pub mod signal;
mod timer;

pub use debounce::Debouncer;
pub use error::{CoreError, Result, TimerError};
pub use frame::{FrameRequestId, FrameScheduler};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use timer::{TimerId, TimerManager};
