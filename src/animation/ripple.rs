//! Press-anchored ripple ("ink") animation.
//!
//! A ripple is never stored. Its visual parameters are recomputed every frame
//! from a [`Press`] and the frame time, so replaying the same `(press, now)`
//! pair always yields the same visual.

use std::f32::consts::SQRT_2;
use std::time::{Duration, Instant};

use super::timing::{ping_pong, TimingFunction};
use crate::geometry::{Color, Rect, RoundedRect, Size, Vector};
use crate::press::Press;

/// Time for a ripple to grow from nothing to full bloom.
pub const RIPPLE_DURATION: Duration = Duration::from_millis(400);

/// Alpha of a fully bloomed ripple.
pub const RIPPLE_MAX_ALPHA: f32 = 0.7;

/// Gray level of the ripple, relative to its alpha.
pub const RIPPLE_TINT: f32 = 0.8;

/// Diameter of a bloomed ripple relative to the surface's longest side.
/// Large enough to cover the whole surface from a press in any corner.
pub const RIPPLE_COVERAGE: f32 = 2.0 * SQRT_2;

/// Configuration for ripple animation.
#[derive(Clone, Debug)]
pub struct RippleConfig {
    /// Growth time from press to full bloom
    pub duration: Duration,
    /// Alpha at full bloom
    pub max_alpha: f32,
    /// Gray level of the ink (premultiplied channels are `alpha * tint`)
    pub tint: f32,
    /// Curve applied to the normalized age
    pub easing: TimingFunction,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            duration: RIPPLE_DURATION,
            max_alpha: RIPPLE_MAX_ALPHA,
            tint: RIPPLE_TINT,
            easing: TimingFunction::Smoothstep,
        }
    }
}

impl RippleConfig {
    /// Create a new ripple config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn max_alpha(mut self, alpha: f32) -> Self {
        self.max_alpha = alpha;
        self
    }

    pub fn tint(mut self, tint: f32) -> Self {
        self.tint = tint;
        self
    }

    pub fn easing(mut self, easing: TimingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Normalized age of a press, or `None` once its ripple has decayed.
    ///
    /// A press that is still held never decays: its progress stays pinned at
    /// 1.0 until release. After release, anything older than `duration` is
    /// gone.
    pub fn progress(&self, press: &Press, now: Instant) -> Option<f32> {
        let age = now.saturating_duration_since(press.start);
        let t = if self.duration.is_zero() {
            f32::INFINITY
        } else {
            age.as_secs_f32() / self.duration.as_secs_f32()
        };
        if t > 1.0 {
            if press.is_released() {
                return None;
            }
            return Some(1.0);
        }
        Some(t)
    }

    /// Whether a press's ripple has fully decayed at `now`.
    pub fn is_expired(&self, press: &Press, now: Instant) -> bool {
        self.progress(press, now).is_none()
    }

    /// Eased growth factor for a normalized age.
    pub fn blend(&self, t: f32) -> f32 {
        self.easing.evaluate(ping_pong(t))
    }

    /// Visual parameters of a press's ripple on a surface of size `bounds`.
    pub fn evaluate(&self, press: &Press, now: Instant, bounds: Size) -> RippleFrame {
        let Some(t) = self.progress(press, now) else {
            return RippleFrame::Expired;
        };
        let blend = self.blend(t);

        let size = RIPPLE_COVERAGE * bounds.longest_side() * blend;
        let radius = size * 0.5;
        let alpha = self.max_alpha * blend;
        let ink = alpha * self.tint;

        RippleFrame::Visible(RippleVisual {
            center_offset: press.position.to_vector() - Vector::splat(radius),
            size,
            radius,
            blend,
            alpha,
            color: Color::rgba(ink, ink, ink, alpha),
        })
    }
}

/// Evaluate a ripple with the default configuration.
pub fn evaluate(press: &Press, now: Instant, bounds: Size) -> RippleFrame {
    RippleConfig::default().evaluate(press, now, bounds)
}

/// Outcome of evaluating a ripple at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RippleFrame {
    Visible(RippleVisual),
    Expired,
}

impl RippleFrame {
    pub fn visual(&self) -> Option<&RippleVisual> {
        match self {
            RippleFrame::Visible(visual) => Some(visual),
            RippleFrame::Expired => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, RippleFrame::Expired)
    }
}

/// Derived drawing parameters of one ripple for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleVisual {
    /// Top-left corner of the ripple's bounding square, in surface coordinates
    pub center_offset: Vector,
    /// Diameter in logical pixels
    pub size: f32,
    /// Radius in logical pixels
    pub radius: f32,
    /// Eased growth factor (1.0 = full bloom)
    pub blend: f32,
    /// Ripple opacity
    pub alpha: f32,
    /// Premultiplied ink color
    pub color: Color,
}

impl RippleVisual {
    /// Bounding square in surface coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center_offset.x,
            self.center_offset.y,
            self.size,
            self.size,
        )
    }

    /// Circular clip in the ripple's local coordinates.
    pub fn clip(&self) -> RoundedRect {
        RoundedRect::circle(self.size)
    }
}
