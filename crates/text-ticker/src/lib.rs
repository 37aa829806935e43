//! Text Ticker - a horizontally scrolling news-style ticker.
//!
//! The ticker is configured entirely through string attributes, renders its
//! items into a small shadow subtree with a generated stylesheet, and scrolls
//! them in a seamless loop whose speed does not depend on the amount of text.
//!
//! The crate is host-agnostic. A host with a layout engine implements
//! [`TickerHost`] and forwards its lifecycle events to a [`TickerWidget`];
//! [`HeadlessHost`] stands in where there is no layout engine.
//!
//! # Example
//!
//! ```
//! use text_ticker::prelude::*;
//!
//! let mut host = HeadlessHost::new(10.0);
//! let mut ticker = TickerWidget::new();
//!
//! ticker.set_attribute(&mut host, "items", r#"["A", {"text": "B", "url": "https://b.test"}]"#);
//! ticker.set_attribute(&mut host, "speed", "8");
//! ticker.connect(&mut host);
//!
//! // The animation starts once the host has laid out the content.
//! let outcome = ticker.on_frame(&mut host);
//! assert!(matches!(outcome, Some(AnimationOutcome::Started { .. })));
//!
//! let html = ticker.shadow().to_html();
//! assert!(html.contains("scroll-dynamic"));
//! ```
//!
//! # Diagnostics
//!
//! Lifecycle callbacks never fail. Malformed `items` JSON, a non-array
//! payload or an unmeasurable layout are logged under the
//! `text_ticker::diagnostics` target and emitted on
//! [`TickerWidget::diagnostics`]:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use text_ticker::prelude::*;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let mut host = HeadlessHost::default();
//! let mut ticker = TickerWidget::new();
//!
//! let sink = Arc::clone(&seen);
//! ticker.diagnostics().connect(move |d: &Diagnostic| sink.lock().unwrap().push(d.clone()));
//!
//! ticker.set_attribute(&mut host, "items", "not json");
//! ticker.connect(&mut host);
//!
//! assert!(matches!(seen.lock().unwrap()[0], Diagnostic::InvalidItemsJson { .. }));
//! ```

pub mod animator;
pub mod attributes;
pub mod config;
pub mod diagnostics;
pub mod escape;
pub mod host;
pub mod items;
pub mod prelude;
pub mod render;
pub mod shadow;
pub mod webfont;
pub mod widget;

mod error;

pub use animator::{AnimationOutcome, LayoutAnimator};
pub use attributes::{Attribute, AttributeMap};
pub use config::{TickerConfig, TickerDefaults};
pub use diagnostics::{Diagnostic, DiagnosticLevel};
pub use error::{Result, TickerError};
pub use host::{HeadlessHost, MeasureProbe, TickerHost};
pub use items::{parse_items, ItemList, TickerItem};
pub use shadow::{Animation, ContentElement, ShadowTree};
pub use widget::{LifecycleState, TickerWidget};
