//! Seamless scroll animation.
//!
//! One cycle of the content (the items plus a trailing separator) is measured
//! off-screen by the host. The animation translates the visible content by
//! exactly that width, so when it wraps the second copy sits where the first
//! one started and the loop has no visible seam.
//!
//! Duration is `width / (speed * pixels_per_speed_unit)` seconds, which makes
//! the on-screen velocity depend only on `speed`, never on how much text
//! there is.

use text_ticker_core::logging::targets;
use text_ticker_core::PerfSpan;
use text_ticker_style::prelude::*;

use crate::config::TickerConfig;
use crate::host::{MeasureProbe, TickerHost};
use crate::items::ItemList;
use crate::render::{cycle_text, render_cycle};
use crate::shadow::{Animation, ShadowTree};
use crate::Result;

/// Name of the keyframes rule driving the scroll.
pub const SCROLL_ANIMATION_NAME: &str = "scroll-dynamic";

/// Seconds per cycle for a cycle of `width` pixels.
pub fn compute_duration(width: f64, speed: u8, pixels_per_speed_unit: f64) -> f64 {
    width / (f64::from(speed) * pixels_per_speed_unit)
}

/// What an animator pass did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationOutcome {
    /// The animation is running.
    Started {
        /// Measured cycle width in pixels.
        width: f64,
        /// Seconds per cycle.
        duration_secs: f64,
    },
    /// The cycle measured as zero; content stays static.
    ZeroWidth,
    /// There was nothing to animate.
    Skipped,
}

/// Measures the content cycle and drives the scroll animation.
#[derive(Debug, Clone, Default)]
pub struct LayoutAnimator {
    measured_width: f64,
    keyframes: Option<Keyframes>,
}

impl LayoutAnimator {
    /// Create an animator with no measurement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the last successful measurement, or `0.0`.
    pub fn measured_width(&self) -> f64 {
        self.measured_width
    }

    /// The keyframes rule currently installed, if any.
    pub fn keyframes(&self) -> Option<&Keyframes> {
        self.keyframes.as_ref()
    }

    /// Forget the last measurement.
    ///
    /// The installed keyframes stay; they are unused once the content's
    /// animation is disabled.
    pub fn reset(&mut self) {
        self.measured_width = 0.0;
    }

    /// Reinstall the current keyframes into freshly rebuilt stylesheet text.
    pub fn reinstall(&self, css: &str) -> Result<String> {
        match &self.keyframes {
            Some(keyframes) => Ok(install_keyframes(css, keyframes)?),
            None => Ok(css.to_string()),
        }
    }

    /// Measure one cycle and start the animation.
    pub fn animate(
        &mut self,
        host: &mut dyn TickerHost,
        shadow: &mut ShadowTree,
        items: &ItemList,
        config: &TickerConfig,
        pixels_per_speed_unit: f64,
    ) -> Result<AnimationOutcome> {
        let _perf = PerfSpan::new("animate");

        if items.is_empty() || !shadow.is_rendered() {
            tracing::trace!(target: targets::ANIMATOR, "nothing to animate");
            return Ok(AnimationOutcome::Skipped);
        }

        let probe = MeasureProbe::new(
            render_cycle(items, &config.separator),
            cycle_text(items, &config.separator),
            config,
        );
        let width = host.measure_width(&probe);
        // The last good width is kept so a later resize can recover.
        if !(width.is_finite() && width > 0.0) {
            return Ok(AnimationOutcome::ZeroWidth);
        }

        let duration_secs = compute_duration(width, config.speed, pixels_per_speed_unit);
        let keyframes = Keyframes::horizontal_scroll(SCROLL_ANIMATION_NAME, width);
        shadow.style = install_keyframes(&shadow.style, &keyframes)?;

        if let Some(content) = shadow.content.as_mut() {
            content.animation = Animation::Scroll {
                name: SCROLL_ANIMATION_NAME.to_string(),
                duration_secs,
            };
            content.transform_reset = true;
        }

        self.measured_width = width;
        self.keyframes = Some(keyframes);
        tracing::debug!(
            target: targets::ANIMATOR,
            width,
            duration_secs,
            speed = config.speed,
            "animation started"
        );

        Ok(AnimationOutcome::Started {
            width,
            duration_secs,
        })
    }
}
