//! The ticker element and its lifecycle.
//!
//! A [`TickerWidget`] is either unattached or attached to a host document.
//! The host forwards its callbacks as method calls:
//!
//! | Host event | Method |
//! |---|---|
//! | element inserted | [`connect`](TickerWidget::connect) |
//! | element removed | [`disconnect`](TickerWidget::disconnect) |
//! | attribute set / removed | [`set_attribute`](TickerWidget::set_attribute), [`remove_attribute`](TickerWidget::remove_attribute) |
//! | layout committed | [`on_frame`](TickerWidget::on_frame) |
//! | container resized | [`on_resize`](TickerWidget::on_resize) |
//! | timer tick | [`poll_timers`](TickerWidget::poll_timers) |
//!
//! After each call the host mirrors [`shadow`](TickerWidget::shadow) into
//! its document. No callback ever returns an error; problems are reported on
//! the [`diagnostics`](TickerWidget::diagnostics) signal.

use std::time::{Duration, Instant};

use text_ticker_core::logging::targets;
use text_ticker_core::{ticker_debug, Debouncer, FrameScheduler, Signal};

use crate::animator::{AnimationOutcome, LayoutAnimator};
use crate::attributes::{Attribute, AttributeChange, AttributeMap, ChangeRoute};
use crate::config::{TickerConfig, TickerDefaults};
use crate::diagnostics::Diagnostic;
use crate::host::TickerHost;
use crate::items::{parse_items, ItemList};
use crate::render::{render_content, ticker_stylesheet};
use crate::shadow::{Animation, ContentElement, ShadowTree};
use crate::webfont::ensure_webfont;

/// Whether the widget is in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Not in a document; attribute changes are only stored.
    #[default]
    Unattached,
    /// In a document and rendering.
    Attached,
}

/// Work deferred to the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// Measure the content and (re)start the animation.
    Animate,
}

/// A horizontally scrolling ticker.
pub struct TickerWidget {
    defaults: TickerDefaults,
    attributes: AttributeMap,
    state: LifecycleState,
    items: ItemList,
    shadow: ShadowTree,
    animator: LayoutAnimator,
    frames: FrameScheduler<FrameAction>,
    resize: Debouncer,
    diagnostics: Signal<Diagnostic>,
}

impl Default for TickerWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerWidget {
    /// Create an unattached widget with the built-in defaults.
    pub fn new() -> Self {
        Self::with_defaults(TickerDefaults::default())
    }

    /// Create an unattached widget with custom defaults.
    pub fn with_defaults(defaults: TickerDefaults) -> Self {
        let resize = Debouncer::new(Duration::from_millis(defaults.resize_debounce_ms));
        Self {
            defaults,
            attributes: AttributeMap::new(),
            state: LifecycleState::Unattached,
            items: ItemList::new(),
            shadow: ShadowTree::default(),
            animator: LayoutAnimator::new(),
            frames: FrameScheduler::new(),
            resize,
            diagnostics: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the widget is attached.
    pub fn is_attached(&self) -> bool {
        self.state == LifecycleState::Attached
    }

    /// The defaults this widget falls back to.
    pub fn defaults(&self) -> &TickerDefaults {
        &self.defaults
    }

    /// The stored attributes.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// The configuration resolved from the current attributes.
    pub fn config(&self) -> TickerConfig {
        TickerConfig::resolve(&self.attributes, &self.defaults)
    }

    /// The items parsed at the last content update.
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// The rendered subtree.
    pub fn shadow(&self) -> &ShadowTree {
        &self.shadow
    }

    /// Width of the last successful cycle measurement, or `0.0`.
    pub fn measured_width(&self) -> f64 {
        self.animator.measured_width()
    }

    /// Whether an animator pass waits for the next frame.
    pub fn has_pending_frame(&self) -> bool {
        self.frames.has_pending()
    }

    /// Time from `now` until the next timer fires, if one is pending.
    pub fn next_timer_deadline(&self, now: Instant) -> Option<Duration> {
        self.resize.time_until_fire(now)
    }

    /// Signal emitted for every recovered problem.
    pub fn diagnostics(&self) -> &Signal<Diagnostic> {
        &self.diagnostics
    }

    // =========================================================================
    // Host callbacks
    // =========================================================================

    /// Set an attribute.
    ///
    /// Setting an attribute to its current value does nothing.
    pub fn set_attribute(&mut self, host: &mut dyn TickerHost, name: &str, value: impl Into<String>) {
        if let Some(change) = self.attributes.set(name, value) {
            self.attribute_changed(host, change);
        }
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, host: &mut dyn TickerHost, name: &str) {
        if let Some(change) = self.attributes.remove(name) {
            self.attribute_changed(host, change);
        }
    }

    /// The widget was inserted into a document.
    pub fn connect(&mut self, host: &mut dyn TickerHost) {
        if self.is_attached() {
            ticker_debug!("connect while attached ignored");
            return;
        }
        self.state = LifecycleState::Attached;
        tracing::debug!(target: targets::LIFECYCLE, "attached");

        let config = self.config();
        ensure_webfont(host, &config, &self.defaults);
        self.render(&config);
        self.update_content(&config);
        host.observe_resize();
    }

    /// The widget was removed from its document.
    pub fn disconnect(&mut self, host: &mut dyn TickerHost) {
        if !self.is_attached() {
            ticker_debug!("disconnect while unattached ignored");
            return;
        }
        if let Some(id) = self.frames.cancel() {
            tracing::trace!(target: targets::LIFECYCLE, request = id.as_u64(), "frame request cancelled");
        }
        host.unobserve_resize();
        self.resize.cancel();
        self.state = LifecycleState::Unattached;
        tracing::debug!(target: targets::LIFECYCLE, "detached");
    }

    /// The host committed layout; run deferred work.
    pub fn on_frame(&mut self, host: &mut dyn TickerHost) -> Option<AnimationOutcome> {
        if !self.is_attached() {
            self.frames.cancel();
            return None;
        }
        match self.frames.take()? {
            FrameAction::Animate => Some(self.start_animation(host)),
        }
    }

    /// The container changed size.
    ///
    /// Ignored until a measurement has succeeded. Each call restarts the
    /// quiet period; see [`poll_timers`](Self::poll_timers).
    pub fn on_resize(&mut self, now: Instant) {
        if !self.is_attached() || self.animator.measured_width() <= 0.0 {
            return;
        }
        self.resize.trigger(now);
    }

    /// Fire expired timers.
    ///
    /// Returns `true` when a resize burst settled and a new animator pass was
    /// scheduled for the next frame. Nothing is scheduled once the
    /// measurement has been reset in the meantime.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        if !self.resize.poll(now) || !self.is_attached() {
            return false;
        }
        if self.animator.measured_width() <= 0.0 {
            tracing::trace!(target: targets::LIFECYCLE, "resize settled without a measurement");
            return false;
        }
        tracing::debug!(target: targets::LIFECYCLE, "resize settled");
        self.frames.request(FrameAction::Animate);
        true
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn attribute_changed(&mut self, host: &mut dyn TickerHost, change: AttributeChange) {
        if !self.is_attached() {
            return;
        }
        let Some(attribute) = Attribute::from_name(&change.name) else {
            return;
        };
        tracing::debug!(
            target: targets::LIFECYCLE,
            attribute = attribute.name(),
            old = ?change.old_value,
            new = ?change.new_value,
            "attribute changed"
        );

        let config = self.config();
        match attribute.route() {
            ChangeRoute::Webfont => {
                ensure_webfont(host, &config, &self.defaults);
                self.update_styles(&config);
            }
            ChangeRoute::Items => self.update_content(&config),
            ChangeRoute::Content => {
                self.update_styles(&config);
                self.update_ticker_content(&config);
            }
            ChangeRoute::Style => self.update_styles(&config),
        }
    }

    fn render(&mut self, config: &TickerConfig) {
        self.update_styles(config);
        self.shadow.content = Some(ContentElement::with_text(&self.defaults.loading_text));
    }

    fn update_content(&mut self, config: &TickerConfig) {
        self.items = match parse_items(self.attributes.get(Attribute::Items.name())) {
            Ok(items) => items,
            Err(err) => {
                self.report(Diagnostic::from(&err));
                ItemList::new()
            }
        };
        self.update_ticker_content(config);
    }

    fn update_ticker_content(&mut self, config: &TickerConfig) {
        if self.items.is_empty() {
            let message = self.defaults.empty_message.clone();
            self.show_message(&message);
            return;
        }

        let content = self
            .shadow
            .content
            .get_or_insert_with(|| ContentElement::with_text(""));
        content.html = render_content(&self.items, &config.separator);
        content.color = Some(config.text_color.clone());
        content.animation = Animation::Disabled;
        content.transform_reset = true;

        self.frames.request(FrameAction::Animate);
    }

    fn show_message(&mut self, message: &str) {
        let mut content = ContentElement::with_text(message);
        content.color = Some(self.defaults.message_color.clone());
        content.animation = Animation::Disabled;
        content.transform_reset = true;
        self.shadow.content = Some(content);

        self.animator.reset();
        self.frames.cancel();
    }

    fn update_styles(&mut self, config: &TickerConfig) {
        let css = ticker_stylesheet(config).to_css();
        self.shadow.style = match self.animator.reinstall(&css) {
            Ok(css) => css,
            Err(err) => {
                self.report(Diagnostic::from(&err));
                css
            }
        };
    }

    fn start_animation(&mut self, host: &mut dyn TickerHost) -> AnimationOutcome {
        let config = self.config();
        let result = self.animator.animate(
            host,
            &mut self.shadow,
            &self.items,
            &config,
            self.defaults.pixels_per_speed_unit,
        );

        match result {
            Ok(AnimationOutcome::ZeroWidth) => {
                self.report(Diagnostic::ZeroCycleWidth);
                AnimationOutcome::ZeroWidth
            }
            Ok(outcome) => outcome,
            Err(err) => {
                self.report(Diagnostic::from(&err));
                AnimationOutcome::Skipped
            }
        }
    }

    fn report(&self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.emit(diagnostic);
    }
}

impl std::fmt::Debug for TickerWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerWidget")
            .field("state", &self.state)
            .field("attributes", &self.attributes)
            .field("items", &self.items.len())
            .field("measured_width", &self.animator.measured_width())
            .field("pending_frame", &self.frames.pending_id())
            .finish_non_exhaustive()
    }
}
