//=========================================================================
// Painter
//=========================================================================
//
// World-space drawing helpers over a `Surface`.
//
// Each call converts its arguments through the camera (positions with
// the full affine transform, sizes with zoom only) and forwards the
// screen-space result to the surface.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;

//=== Internal Dependencies ===============================================

use super::color::Color;
use super::surface::{ImageHandle, ScreenRect, Surface};
use crate::core::camera::CameraTransform;

//=== Painter =============================================================

/// Draws in world coordinates through a camera.
pub struct Painter<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    camera: &'a CameraTransform,
}

impl<'a, S: Surface + ?Sized> Painter<'a, S> {
    pub fn new(surface: &'a mut S, camera: &'a CameraTransform) -> Self {
        Self { surface, camera }
    }

    /// Camera used for conversions.
    pub fn camera(&self) -> &CameraTransform {
        self.camera
    }

    /// Sets the fill/stroke color.
    pub fn fill_color(&mut self, color: Color) {
        self.surface.set_color(color);
    }

    /// Fills a world-space rectangle with its top-left at `(x, y)`.
    ///
    /// The screen rectangle is grown by half a pixel on each axis so that
    /// adjacent tiles do not leave hairline seams.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let cam = self.camera;
        self.surface.fill_rect(ScreenRect::new(
            cam.screen_x(x) - 0.5,
            cam.screen_y(y) - 0.5,
            cam.screen_w(w) + 0.5,
            cam.screen_h(h) + 0.5,
        ));
    }

    /// Strokes a line from `(x, y)` to `(x1, y1)`; `size` is a world width.
    pub fn fill_line(&mut self, x: f64, y: f64, x1: f64, y1: f64, size: f64) {
        let cam = self.camera;
        self.surface.stroke_line(
            cam.world_to_screen(DVec2::new(x, y)),
            cam.world_to_screen(DVec2::new(x1, y1)),
            cam.screen_w(size),
        );
    }

    /// Fills a circle centered at `(x, y)` with world radius `radius`.
    pub fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        let cam = self.camera;
        self.surface
            .fill_circle(cam.world_to_screen(DVec2::new(x, y)), cam.screen_w(radius));
    }

    /// Draws `text` at `(x, y)`; `height` is the world-space text height.
    pub fn fill_text(&mut self, x: f64, y: f64, text: &str, height: f64) {
        let cam = self.camera;
        self.surface
            .draw_text(cam.world_to_screen(DVec2::new(x, y)), text, cam.screen_h(height));
    }

    /// Draws an image at natural size with its top-left at `(x, y)`.
    pub fn draw_image(&mut self, image: ImageHandle, x: f64, y: f64) {
        let origin = self.camera.world_to_screen(DVec2::new(x, y));
        self.surface.draw_image(image, origin);
    }

    /// Draws the `src` region of `image` (image pixels) into the
    /// world-space rectangle `(x, y, w, h)`.
    pub fn draw_sub_image(
        &mut self,
        image: ImageHandle,
        (x, y, w, h): (f64, f64, f64, f64),
        src: ScreenRect,
    ) {
        let cam = self.camera;
        let dst = ScreenRect::new(cam.screen_x(x), cam.screen_y(y), cam.screen_w(w), cam.screen_h(h));
        self.surface.draw_sub_image(image, src, dst);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
