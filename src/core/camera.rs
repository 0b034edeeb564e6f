//=========================================================================
// Camera Transform
//=========================================================================
//
// Bidirectional affine mapping between world and screen coordinates,
// centered on the viewport.
//
// Forward:  screen = (world - focus) * zoom + viewport / 2
// Inverse:  world  = (screen - viewport / 2) / zoom + focus
//
// Sizes scale by zoom only (no translation). Zoom is kept finite and
// strictly positive: every mutation that would break this is rejected
// and leaves the camera untouched.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;
use log::debug;
use thiserror::Error;

//=== CameraError =========================================================

/// Camera mutation errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CameraError {
    /// Zoom must be finite and strictly positive.
    #[error("invalid zoom {0}: zoom must be finite and greater than zero")]
    InvalidZoom(f64),
}

//=== CameraTransform =====================================================

/// Pan + zoom camera over an infinite 2D world.
///
/// `(x, y)` is the world-space point drawn at the viewport center.
///
/// # Examples
///
/// ```
/// use sketchpad::core::camera::CameraTransform;
///
/// let mut camera = CameraTransform::new();
/// camera.set_zoom(2.0).unwrap();
/// camera.set_viewport_size(800.0, 600.0);
///
/// assert_eq!(camera.screen_x(10.0), 420.0);
/// assert_eq!(camera.world_x(420.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    x: f64,
    y: f64,
    zoom: f64,
    viewport_w: f64,
    viewport_h: f64,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            viewport_w: 0.0,
            viewport_h: 0.0,
        }
    }
}

impl CameraTransform {
    //--- Construction -----------------------------------------------------

    /// Camera focused on the world origin at zoom 1 with an empty viewport.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Accessors --------------------------------------------------------

    /// World-space x of the viewport center.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// World-space y of the viewport center.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Current zoom factor (always finite and > 0).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Viewport size in pixels.
    pub fn viewport_size(&self) -> (f64, f64) {
        (self.viewport_w, self.viewport_h)
    }

    //--- Mutation ---------------------------------------------------------

    /// Moves the focus point to `(x, y)` in world space.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Sets the zoom factor.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidZoom`] for zero, negative, NaN or
    /// infinite values; the camera is left unchanged.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), CameraError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            debug!(target: "sketch::camera", "Rejected zoom {}", zoom);
            return Err(CameraError::InvalidZoom(zoom));
        }
        self.zoom = zoom;
        Ok(())
    }

    /// Updates the viewport size (called by the frame loop every tick).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_w = width;
        self.viewport_h = height;
    }

    /// Focuses the viewport center, so world and screen coordinates match
    /// at zoom 1.
    pub fn center_on_viewport(&mut self) {
        self.x = self.viewport_w / 2.0;
        self.y = self.viewport_h / 2.0;
    }

    //--- Controls ---------------------------------------------------------

    /// Pans by a world-space offset.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Pans so that content follows a screen-space drag of `(dx, dy)` pixels.
    pub fn pan_by_screen(&mut self, dx: f64, dy: f64) {
        self.x -= self.world_w(dx);
        self.y -= self.world_h(dy);
    }

    /// Multiplies zoom by `factor` while keeping the world point under the
    /// screen point `(sx, sy)` fixed.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidZoom`] when the resulting zoom would be
    /// invalid; the camera is left unchanged.
    pub fn zoom_about(&mut self, sx: f64, sy: f64, factor: f64) -> Result<(), CameraError> {
        let anchor = self.screen_to_world(DVec2::new(sx, sy));
        self.set_zoom(self.zoom * factor)?;

        // Shift focus so `anchor` maps back onto (sx, sy).
        let drift = self.screen_to_world(DVec2::new(sx, sy)) - anchor;
        self.x -= drift.x;
        self.y -= drift.y;
        Ok(())
    }

    //=====================================================================
    // World → Screen
    //=====================================================================

    /// World x to screen x.
    pub fn screen_x(&self, wx: f64) -> f64 {
        (wx - self.x) * self.zoom + self.viewport_w / 2.0
    }

    /// World y to screen y.
    pub fn screen_y(&self, wy: f64) -> f64 {
        (wy - self.y) * self.zoom + self.viewport_h / 2.0
    }

    /// World width to screen width.
    pub fn screen_w(&self, ww: f64) -> f64 {
        ww * self.zoom
    }

    /// World height to screen height.
    pub fn screen_h(&self, wh: f64) -> f64 {
        wh * self.zoom
    }

    /// World point to screen point.
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        DVec2::new(self.screen_x(world.x), self.screen_y(world.y))
    }

    //=====================================================================
    // Screen → World
    //=====================================================================

    /// Screen x to world x.
    pub fn world_x(&self, sx: f64) -> f64 {
        (sx - self.viewport_w / 2.0) / self.zoom + self.x
    }

    /// Screen y to world y.
    pub fn world_y(&self, sy: f64) -> f64 {
        (sy - self.viewport_h / 2.0) / self.zoom + self.y
    }

    /// Screen width to world width.
    pub fn world_w(&self, sw: f64) -> f64 {
        sw / self.zoom
    }

    /// Screen height to world height.
    pub fn world_h(&self, sh: f64) -> f64 {
        sh / self.zoom
    }

    /// Screen point to world point.
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        DVec2::new(self.world_x(screen.x), self.world_y(screen.y))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    //--- Test Helpers -----------------------------------------------------

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    fn camera(x: f64, y: f64, zoom: f64, w: f64, h: f64) -> CameraTransform {
        let mut camera = CameraTransform::new();
        camera.set_position(x, y);
        camera.set_zoom(zoom).unwrap();
        camera.set_viewport_size(w, h);
        camera
    }

    //=====================================================================
    // Defaults
    //=====================================================================

    #[test]
    fn default_camera() {
        let camera = CameraTransform::default();
        assert_eq!((camera.x(), camera.y()), (0.0, 0.0));
        assert_eq!(camera.zoom(), 1.0);
        assert_eq!(camera.viewport_size(), (0.0, 0.0));
    }

    //=====================================================================
    // Concrete Transform
    //=====================================================================

    #[test]
    fn concrete_forward_and_inverse() {
        let camera = camera(0.0, 0.0, 2.0, 800.0, 600.0);

        assert_eq!(camera.screen_x(10.0), 420.0);
        assert_eq!(camera.world_x(420.0), 10.0);
        assert_eq!(camera.screen_y(10.0), 320.0);
        assert_eq!(camera.world_y(320.0), 10.0);
    }

    #[test]
    fn focus_point_maps_to_viewport_center() {
        let camera = camera(-37.5, 120.0, 3.0, 640.0, 480.0);

        let center = camera.world_to_screen(DVec2::new(-37.5, 120.0));
        assert_eq!(center, DVec2::new(320.0, 240.0));
    }

    #[test]
    fn sizes_scale_without_translation() {
        let camera = camera(500.0, -500.0, 4.0, 800.0, 600.0);

        assert_eq!(camera.screen_w(10.0), 40.0);
        assert_eq!(camera.screen_h(2.5), 10.0);
        assert_eq!(camera.world_w(40.0), 10.0);
        assert_eq!(camera.world_h(10.0), 2.5);
    }

    //=====================================================================
    // Round-trip
    //=====================================================================

    #[test]
    fn round_trip_positions() {
        let cameras = [
            camera(0.0, 0.0, 1.0, 800.0, 600.0),
            camera(123.4, -56.7, 0.25, 1920.0, 1080.0),
            camera(-1e4, 3e3, 7.5, 333.0, 777.0),
            camera(0.5, 0.5, 1e-3, 1.0, 1.0),
        ];
        let samples = [-1e5, -250.75, -1.0, 0.0, 0.1, 42.0, 9999.5];

        for cam in &cameras {
            for &v in &samples {
                assert!(approx_eq(cam.world_x(cam.screen_x(v)), v), "x round-trip {v} via {cam:?}");
                assert!(approx_eq(cam.world_y(cam.screen_y(v)), v), "y round-trip {v} via {cam:?}");
                assert!(approx_eq(cam.screen_x(cam.world_x(v)), v), "inverse x round-trip {v}");
            }
        }
    }

    #[test]
    fn round_trip_sizes() {
        let cam = camera(10.0, 10.0, 0.3, 800.0, 600.0);

        for v in [0.0, 1.0, 17.25, 4096.0] {
            assert!(approx_eq(cam.world_w(cam.screen_w(v)), v));
            assert!(approx_eq(cam.world_h(cam.screen_h(v)), v));
        }
    }

    #[test]
    fn round_trip_points() {
        let cam = camera(-12.0, 48.0, 1.75, 1024.0, 768.0);
        let p = DVec2::new(3.25, -91.0);

        let back = cam.screen_to_world(cam.world_to_screen(p));
        assert!(approx_eq(back.x, p.x) && approx_eq(back.y, p.y));
    }

    //=====================================================================
    // Zoom Policy
    //=====================================================================

    #[test]
    fn zero_zoom_rejected() {
        let mut cam = camera(0.0, 0.0, 2.0, 800.0, 600.0);

        assert_eq!(cam.set_zoom(0.0), Err(CameraError::InvalidZoom(0.0)));
        assert_eq!(cam.zoom(), 2.0, "Rejected zoom must leave camera unchanged");
    }

    #[test]
    fn negative_and_non_finite_zoom_rejected() {
        let mut cam = CameraTransform::new();

        assert!(cam.set_zoom(-1.0).is_err());
        assert!(cam.set_zoom(f64::NAN).is_err());
        assert!(cam.set_zoom(f64::INFINITY).is_err());
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn camera_error_display() {
        let message = CameraError::InvalidZoom(0.0).to_string();
        assert!(message.contains("invalid zoom"));
    }

    //=====================================================================
    // Controls
    //=====================================================================

    #[test]
    fn center_on_viewport_aligns_world_and_screen() {
        let mut cam = CameraTransform::new();
        cam.set_viewport_size(800.0, 600.0);
        cam.center_on_viewport();

        assert_eq!((cam.x(), cam.y()), (400.0, 300.0));
        assert_eq!(cam.screen_x(123.0), 123.0);
        assert_eq!(cam.world_y(45.0), 45.0);
    }

    #[test]
    fn pan_by_moves_focus_in_world_units() {
        let mut cam = camera(0.0, 0.0, 2.0, 800.0, 600.0);
        cam.pan_by(5.0, -5.0);

        assert_eq!((cam.x(), cam.y()), (5.0, -5.0));
    }

    #[test]
    fn pan_by_screen_follows_drag() {
        let mut cam = camera(0.0, 0.0, 2.0, 800.0, 600.0);
        let grabbed = cam.world_x(400.0);

        // Drag 100px to the right: the grabbed world point follows the cursor.
        cam.pan_by_screen(100.0, 0.0);

        assert!(approx_eq(cam.screen_x(grabbed), 500.0));
        assert_eq!(cam.x(), -50.0);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut cam = camera(10.0, 20.0, 1.0, 800.0, 600.0);
        let (sx, sy) = (650.0, 120.0);
        let anchor = cam.screen_to_world(DVec2::new(sx, sy));

        cam.zoom_about(sx, sy, 2.5).unwrap();

        assert!(approx_eq(cam.zoom(), 2.5));
        let after = cam.world_to_screen(anchor);
        assert!(approx_eq(after.x, sx) && approx_eq(after.y, sy));
    }

    #[test]
    fn zoom_about_rejects_zero_factor() {
        let mut cam = camera(10.0, 20.0, 1.5, 800.0, 600.0);
        let before = cam;

        assert!(cam.zoom_about(100.0, 100.0, 0.0).is_err());
        assert_eq!(cam, before);
    }
}
