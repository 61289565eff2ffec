//! Compositor constants to avoid magic numbers throughout the codebase.

/// Alpha factor applied to a surface's background in [`RenderMode::Preview`].
///
/// [`RenderMode::Preview`]: super::RenderMode::Preview
pub const DISABLED_ALPHA: f32 = 150.0 / 255.0;

/// Corner radius of the button preset.
pub const BUTTON_CORNER_RADIUS: f32 = 4.0;

/// Vertical inset of the button preset.
pub const BUTTON_INSET_VERTICAL: f32 = 10.0;

/// Horizontal inset of the button preset.
pub const BUTTON_INSET_HORIZONTAL: f32 = 12.0;

/// Uniform inset of the icon button preset.
pub const ICON_BUTTON_INSET: f32 = 12.0;
