//=========================================================================
// Window Surface
//=========================================================================
//
// Presents a `Canvas` in the OS window through a `pixels` framebuffer.
//
// Architecture:
//   draw calls → Canvas (CPU) ──present()──> Pixels frame ──render()──> GPU
//
// The pixel buffer matches the window's physical size one to one, so
// screen coordinates are window pixels. A zero-sized window (minimized)
// keeps drawing into an empty canvas and skips the GPU work until it has
// an area again.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use glam::DVec2;
use log::{debug, trace};
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::render::{Canvas, Color, ImageHandle, ScreenRect, Surface, SurfaceSize};

//=== WindowSurfaceError ==================================================

#[derive(Debug, Error)]
pub enum WindowSurfaceError {
    /// GPU adapter, device or swap chain failure.
    #[error("pixel buffer error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("pixel buffer size rejected: {0}")]
    Texture(#[from] pixels::TextureError),
}

//=== WindowSurface =======================================================

/// Software canvas shown in a window.
pub struct WindowSurface {
    pixels: Pixels<'static>,
    canvas: Canvas,
}

impl WindowSurface {
    /// Creates a surface covering the window's inner area.
    ///
    /// # Errors
    ///
    /// Returns [`WindowSurfaceError`] if no GPU surface can be created for
    /// the window.
    pub fn new(window: Arc<Window>) -> Result<Self, WindowSurfaceError> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, texture)?;

        debug!(target: "sketch::render", "Window surface created ({}x{})", width, height);
        Ok(Self {
            pixels,
            canvas: Canvas::new(SurfaceSize::new(size.width, size.height)),
        })
    }

    /// The CPU-side canvas, e.g. to register images.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
}

//=== Surface Implementation ==============================================

impl Surface for WindowSurface {
    type Error = WindowSurfaceError;

    fn size(&self) -> SurfaceSize {
        self.canvas.size()
    }

    fn resize(&mut self, size: SurfaceSize) -> Result<(), Self::Error> {
        if self.canvas.size() == size {
            return Ok(());
        }

        self.canvas.resize(size).unwrap_or_else(|never| match never {});
        if has_area(size) {
            self.pixels.resize_surface(size.width, size.height)?;
            self.pixels.resize_buffer(size.width, size.height)?;
        }
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        self.canvas.set_color(color);
    }

    fn fill_rect(&mut self, rect: ScreenRect) {
        self.canvas.fill_rect(rect);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64) {
        self.canvas.stroke_line(from, to, width);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.canvas.fill_circle(center, radius);
    }

    fn draw_text(&mut self, origin: DVec2, text: &str, pixel_height: f64) {
        self.canvas.draw_text(origin, text, pixel_height);
    }

    fn draw_image(&mut self, image: ImageHandle, origin: DVec2) {
        self.canvas.draw_image(image, origin);
    }

    fn draw_sub_image(&mut self, image: ImageHandle, src: ScreenRect, dst: ScreenRect) {
        self.canvas.draw_sub_image(image, src, dst);
    }

    /// Uploads the canvas and renders it.
    fn present(&mut self) -> Result<(), Self::Error> {
        if !has_area(self.canvas.size()) {
            trace!(target: "sketch::render", "Zero-sized window, present skipped");
            return Ok(());
        }

        copy_frame(self.canvas.frame().as_raw(), self.pixels.frame_mut());
        self.pixels.render()?;
        Ok(())
    }
}

//=========================================================================
// Helpers
//=========================================================================

fn has_area(size: SurfaceSize) -> bool {
    size.width > 0 && size.height > 0
}

/// Copies RGBA8 bytes into the pixel buffer (both row-major, same size).
fn copy_frame(src: &[u8], dst: &mut [u8]) {
    let len = src.len().min(dst.len());
    dst[..len].copy_from_slice(&src[..len]);
}

//=========================================================================
// Unit Tests
//=========================================================================
