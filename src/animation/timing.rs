//! Easing for the ripple's growth.
//!
//! A ripple's normalized age is folded with [`ping_pong`] and then shaped by a
//! [`TimingFunction`]. Ink blooms along [`smoothstep`] unless a config asks
//! for linear growth.
//!
//! ```
//! use inkstack::animation::{RippleConfig, TimingFunction};
//!
//! let config = RippleConfig::default().easing(TimingFunction::Linear);
//! assert_eq!(config.blend(0.25), 0.25);
//! ```

/// Curve applied to a ripple's folded progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingFunction {
    /// `t² (3 - 2t)`: zero slope at both ends
    #[default]
    Smoothstep,
    Linear,
}

impl TimingFunction {
    /// Evaluate the curve at normalized time `t` in `[0, 1]`.
    pub fn evaluate(self, t: f32) -> f32 {
        match self {
            TimingFunction::Smoothstep => smoothstep(t),
            TimingFunction::Linear => t,
        }
    }
}

/// Cubic Hermite ease: `t² (3 - 2t)`.
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Fold progress past the end back toward the start: `t` up to 1, then `2 - t`.
pub fn ping_pong(t: f32) -> f32 {
    if t > 1.0 {
        2.0 - t
    } else {
        t
    }
}
