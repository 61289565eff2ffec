//! Time-driven press feedback.
//!
//! [`ripple`] maps a press and the frame time to the ink circle drawn for it;
//! [`timing`] holds the easing curves.

pub mod ripple;
mod timing;

pub use ripple::{
    evaluate, RippleConfig, RippleFrame, RippleVisual, RIPPLE_COVERAGE, RIPPLE_DURATION,
    RIPPLE_MAX_ALPHA, RIPPLE_TINT,
};
pub use timing::{ping_pong, smoothstep, TimingFunction};
