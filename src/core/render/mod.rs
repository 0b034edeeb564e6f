//=========================================================================
// Render Module
//=========================================================================
//
// Immediate-mode drawing boundary.
//
// Components:
// - `surface`: The `Surface` trait and screen-space value types
// - `canvas`: Software rasterizer over an RGBA8 framebuffer
// - `font`: 5x7 bitmap glyphs used by the canvas
// - `draw_list`: Recording surface for headless inspection
// - `painter`: World-space helpers that run coordinates through the camera
// - `color`: RGB value type
//
//=========================================================================

//=== Module Declarations =================================================

mod canvas;
mod color;
mod draw_list;
mod font;
mod painter;
mod surface;

//=== Public API ==========================================================

pub use canvas::{Canvas, CanvasError};
pub use color::{Color, ColorError};
pub use draw_list::{DrawCommand, DrawList};
pub use painter::Painter;
pub use surface::{ImageHandle, ScreenRect, Surface, SurfaceSize};
