//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use sketchpad::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Entry point
pub use crate::platform::WindowSurface;
pub use crate::sketch::{Sketch, SketchBuilder, SketchError};

// Per-tick context and camera
pub use crate::core::camera::{CameraError, CameraTransform};
pub use crate::core::frame::Frame;

// Input
pub use crate::core::input::{InputState, MouseButton};

// Drawing
pub use crate::core::render::{
    Canvas, Color, DrawList, ImageHandle, Painter, Surface, SurfaceSize,
};

// Vector math used by camera and frame helpers
pub use glam::DVec2;
