//! Invariant violations raised by the compositor core.
//!
//! Nothing in this crate performs I/O, so there are no recoverable runtime
//! errors. Every variant here signals a bug in a trusted caller. Public
//! operations panic with the violation; the `try_*` variants hand it back.

use std::time::Instant;

/// A broken precondition of the compositor core.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// A press was recorded while another press is still held.
    #[error("press recorded while another press (started {started:?}) is still in progress")]
    PressInProgress {
        /// Start time of the press that is still held.
        started: Instant,
    },

    /// A size component is negative or NaN, or infinite where a finite size
    /// is required.
    #[error("invalid size {width}x{height}: components must be non-negative numbers")]
    InvalidSize {
        /// Offending width
        width: f32,
        /// Offending height
        height: f32,
    },

    /// A corner radius is negative or NaN.
    #[error("invalid corner radius {0}: radii must be non-negative numbers")]
    InvalidRadius(f32),

    /// An operation stream pops more state than it pushed.
    #[error("restore at op {index} has no matching save")]
    UnbalancedRestore {
        /// Position of the offending `Restore`
        index: usize,
    },

    /// An operation stream ends with scopes still open.
    #[error("{open} saves left without a matching restore")]
    UnclosedSave {
        /// Number of scopes still open at the end
        open: usize,
    },
}

/// Result alias for the fallible `try_*` entry points.
pub type InvariantResult<T> = Result<T, InvariantViolation>;

/// Check that a size is usable for layout and clipping.
pub(crate) fn check_size(width: f32, height: f32) -> InvariantResult<()> {
    if width.is_nan() || height.is_nan() || width < 0.0 || height < 0.0 {
        return Err(InvariantViolation::InvalidSize { width, height });
    }
    Ok(())
}

/// Like [`check_size`], and also rejects infinite components.
pub(crate) fn check_finite_size(width: f32, height: f32) -> InvariantResult<()> {
    check_size(width, height)?;
    if width.is_infinite() || height.is_infinite() {
        return Err(InvariantViolation::InvalidSize { width, height });
    }
    Ok(())
}

/// Check that a corner radius is usable.
pub(crate) fn check_radius(radius: f32) -> InvariantResult<()> {
    if radius.is_nan() || radius < 0.0 {
        return Err(InvariantViolation::InvalidRadius(radius));
    }
    Ok(())
}
