//! Redraw signalling between a surface and its host frame loop.

use bitflags::bitflags;

bitflags! {
    /// Reasons a surface needs another frame
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct RedrawFlags: u8 {
        /// A press, release or cancel arrived since the last frame
        const PRESS_CHANGED = 0b01;
        /// At least one ripple was still visible in the last frame
        const ANIMATING     = 0b10;
    }
}

impl RedrawFlags {
    /// Whether the host should schedule another frame.
    pub fn needs_redraw(self) -> bool {
        !self.is_empty()
    }
}
