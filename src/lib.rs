pub mod animation;
pub mod compositor;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod press;
pub mod renderer;

pub mod prelude {
    pub use crate::animation::{RippleConfig, RippleFrame, RippleVisual, TimingFunction};
    pub use crate::compositor::{
        compose, Content, Frame, FrameContext, RedrawFlags, RenderMode, Surface, SurfaceShape,
        SurfaceStyle,
    };
    pub use crate::error::InvariantViolation;
    pub use crate::geometry::{Color, CornerRadii, Padding, Point, Rect, RoundedRect, Vector};
    pub use crate::layout::{Constraints, Size};
    pub use crate::press::{Press, PressHistory};
    pub use crate::renderer::{HitShape, LayerKind, Op, OperationStream, Recorder};
}
