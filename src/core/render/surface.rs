//=========================================================================
// Rendering Surface Interface
//=========================================================================
//
// The contract between sketch logic and whatever executes pixel
// operations (a software framebuffer, a GPU canvas, a test recorder).
//
// Every coordinate crossing this boundary is already in screen space;
// the camera math happens before the call (see `Painter`).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;

//=== Internal Dependencies ===============================================

use super::color::Color;

//=== SurfaceSize =========================================================

/// Surface dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as floating point `(width, height)`.
    pub fn as_f64(self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}

//=== ScreenRect ==========================================================

/// Axis-aligned rectangle in screen pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ScreenRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

//=== ImageHandle =========================================================

/// Opaque reference to an image owned by the surface implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

//=== Surface =============================================================

/// 2D raster target for immediate-mode drawing.
///
/// Implementations execute pixel operations; they never see world
/// coordinates.
pub trait Surface {
    /// Backend failure type for resize/present.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current surface size.
    fn size(&self) -> SurfaceSize;

    /// Resizes the backing store. Called once per tick, before drawing.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the surface cannot be resized.
    fn resize(&mut self, size: SurfaceSize) -> Result<(), Self::Error>;

    /// Sets the fill and stroke color for subsequent calls.
    fn set_color(&mut self, color: Color);

    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: ScreenRect);

    /// Strokes a line segment of the given pixel width.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64);

    /// Fills a circle.
    fn fill_circle(&mut self, center: DVec2, radius: f64);

    /// Draws text with its baseline-left corner at `origin`.
    fn draw_text(&mut self, origin: DVec2, text: &str, pixel_height: f64);

    /// Draws an image at its natural size with its top-left at `origin`.
    fn draw_image(&mut self, image: ImageHandle, origin: DVec2);

    /// Draws the `src` region of an image (image pixels) into `dst`.
    fn draw_sub_image(&mut self, image: ImageHandle, src: ScreenRect, dst: ScreenRect);

    /// Publishes the finished frame. Called once per tick, after drawing.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the frame cannot be presented.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
