//=========================================================================
// Canvas
//=========================================================================
//
// Software rasterizer: a `Surface` that draws into an RGBA8 framebuffer.
//
// Architecture:
//   draw calls → Canvas (RgbaImage frame) ──frame()──> window backend
//
// Coverage follows the pixel-center rule: a pixel is filled when its
// center lies inside the shape, so abutting rectangles share no pixels
// and leave no gaps. Shape colors are opaque; images are blended with
// their alpha channel. The frame persists between ticks and is only
// cleared when user code paints over it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::convert::Infallible;
use std::ops::Range;
use std::path::Path;

use glam::DVec2;
use image::{imageops, Rgba, RgbaImage};
use log::{debug, trace};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::color::Color;
use super::font::{self, GLYPH_ADVANCE, GLYPH_ROWS};
use super::surface::{ImageHandle, ScreenRect, Surface, SurfaceSize};

//=== CanvasError =========================================================

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
}

//=== Canvas ==============================================================

const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// RGBA8 framebuffer with immediate-mode drawing.
#[derive(Debug, Clone)]
pub struct Canvas {
    frame: RgbaImage,
    color: Rgba<u8>,
    images: Vec<RgbaImage>,
}

impl Canvas {
    //--- Construction -----------------------------------------------------

    /// Creates a black canvas.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            frame: RgbaImage::from_pixel(size.width, size.height, OPAQUE_BLACK),
            color: OPAQUE_BLACK,
            images: Vec::new(),
        }
    }

    //--- Frame Access -----------------------------------------------------

    /// The framebuffer (row-major RGBA8).
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.frame
            .get_pixel_checked(x, y)
            .map(|p| Color { r: p[0], g: p[1], b: p[2] })
    }

    /// Current fill/stroke color.
    pub fn color(&self) -> Color {
        Color { r: self.color[0], g: self.color[1], b: self.color[2] }
    }

    /// Fills the whole frame with `color`.
    pub fn clear(&mut self, color: Color) {
        let fill = to_rgba(color);
        self.frame.pixels_mut().for_each(|p| *p = fill);
    }

    //--- Images -----------------------------------------------------------

    /// Registers an image and returns its handle.
    pub fn insert_image(&mut self, image: RgbaImage) -> ImageHandle {
        let handle = ImageHandle(self.images.len() as u32);
        debug!(
            target: "sketch::render",
            "Registered image {:?} ({}x{})",
            handle,
            image.width(),
            image.height()
        );
        self.images.push(image);
        handle
    }

    /// Decodes an image file and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Image`] if the file cannot be read or decoded.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<ImageHandle, CanvasError> {
        let image = image::open(path.as_ref())?.to_rgba8();
        Ok(self.insert_image(image))
    }

    pub fn image(&self, handle: ImageHandle) -> Option<&RgbaImage> {
        self.images.get(handle.0 as usize)
    }

    //--- Internal Helpers -------------------------------------------------

    fn fill_row(&mut self, xs: Range<u32>, y: u32) {
        for x in xs {
            self.frame.put_pixel(x, y, self.color);
        }
    }
}

//=== Surface Implementation ==============================================

impl Surface for Canvas {
    type Error = Infallible;

    fn size(&self) -> SurfaceSize {
        let (width, height) = self.frame.dimensions();
        SurfaceSize::new(width, height)
    }

    /// Reallocates on size change, keeping the overlapping region.
    fn resize(&mut self, size: SurfaceSize) -> Result<(), Self::Error> {
        if self.size() == size {
            return Ok(());
        }

        trace!(target: "sketch::render", "Canvas resized to {}x{}", size.width, size.height);
        let mut frame = RgbaImage::from_pixel(size.width, size.height, OPAQUE_BLACK);
        imageops::replace(&mut frame, &self.frame, 0, 0);
        self.frame = frame;
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        self.color = to_rgba(color);
    }

    fn fill_rect(&mut self, rect: ScreenRect) {
        let (x0, x1) = ordered(rect.x, rect.x + rect.w);
        let (y0, y1) = ordered(rect.y, rect.y + rect.h);
        let (width, height) = self.frame.dimensions();

        let (Some(xs), Some(ys)) = (pixel_span(x0, x1, width), pixel_span(y0, y1, height)) else {
            return;
        };
        for y in ys {
            self.fill_row(xs.clone(), y);
        }
    }

    /// Butt-capped segment; widths under one pixel draw as hairlines.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64) {
        if !(width.is_finite() && width > 0.0) {
            return;
        }
        let half = (width / 2.0).max(0.5);
        let dir = to - from;
        let len_sq = dir.length_squared();
        if !(len_sq.is_finite() && len_sq > 0.0) {
            return;
        }
        let len = len_sq.sqrt();

        let (frame_w, frame_h) = self.frame.dimensions();
        let min = from.min(to) - DVec2::splat(half);
        let max = from.max(to) + DVec2::splat(half);
        let (Some(xs), Some(ys)) =
            (pixel_span(min.x, max.x, frame_w), pixel_span(min.y, max.y, frame_h))
        else {
            return;
        };

        for y in ys {
            for x in xs.clone() {
                let p = DVec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5) - from;
                let along = p.dot(dir) / len_sq;
                let across = dir.perp_dot(p) / len;
                // Half-open band so a 1px line covers exactly one row.
                if (0.0..=1.0).contains(&along) && (-half..half).contains(&across) {
                    self.frame.put_pixel(x, y, self.color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }
        let (width, height) = self.frame.dimensions();
        let Some(ys) = pixel_span(center.y - radius, center.y + radius, height) else {
            return;
        };

        for y in ys {
            let dy = f64::from(y) + 0.5 - center.y;
            let half_sq = radius * radius - dy * dy;
            if half_sq < 0.0 {
                continue;
            }
            let half = half_sq.sqrt();
            if let Some(xs) = pixel_span(center.x - half, center.x + half, width) {
                self.fill_row(xs, y);
            }
        }
    }

    /// Renders the built-in 5x7 bitmap font scaled to `pixel_height`.
    fn draw_text(&mut self, origin: DVec2, text: &str, pixel_height: f64) {
        if !(pixel_height.is_finite() && pixel_height > 0.0) {
            return;
        }
        let cell = pixel_height / f64::from(GLYPH_ROWS);
        let top = origin.y - pixel_height;
        let advance = f64::from(GLYPH_ADVANCE) * cell;

        for (i, c) in text.chars().enumerate() {
            let left = origin.x + i as f64 * advance;
            for (col, row) in font::lit_cells(c) {
                self.fill_rect(ScreenRect::new(
                    left + f64::from(col) * cell,
                    top + f64::from(row) * cell,
                    cell,
                    cell,
                ));
            }
        }
    }

    fn draw_image(&mut self, image: ImageHandle, origin: DVec2) {
        let Some(source) = self.images.get(image.0 as usize) else {
            debug!(target: "sketch::render", "Unknown image {:?} skipped", image);
            return;
        };
        let origin = origin.round();
        if !origin.is_finite() {
            return;
        }

        for (sx, sy, pixel) in source.enumerate_pixels() {
            let tx = origin.x + f64::from(sx);
            let ty = origin.y + f64::from(sy);
            if tx < 0.0 || ty < 0.0 {
                continue;
            }
            if let Some(dst) = self.frame.get_pixel_mut_checked(tx as u32, ty as u32) {
                blend(dst, *pixel);
            }
        }
    }

    /// Nearest-neighbor scaled copy; a negative `dst` extent mirrors.
    fn draw_sub_image(&mut self, image: ImageHandle, src: ScreenRect, dst: ScreenRect) {
        let Some(source) = self.images.get(image.0 as usize) else {
            debug!(target: "sketch::render", "Unknown image {:?} skipped", image);
            return;
        };
        let (x0, x1) = ordered(dst.x, dst.x + dst.w);
        let (y0, y1) = ordered(dst.y, dst.y + dst.h);
        let (width, height) = self.frame.dimensions();
        let (Some(xs), Some(ys)) = (pixel_span(x0, x1, width), pixel_span(y0, y1, height)) else {
            return;
        };

        for y in ys {
            let v = (f64::from(y) + 0.5 - dst.y) / dst.h;
            let sy = (src.y + v * src.h).floor();
            for x in xs.clone() {
                let u = (f64::from(x) + 0.5 - dst.x) / dst.w;
                let sx = (src.x + u * src.w).floor();
                if sx < 0.0 || sy < 0.0 {
                    continue;
                }
                if let Some(pixel) = source.get_pixel_checked(sx as u32, sy as u32) {
                    blend(self.frame.get_pixel_mut(x, y), *pixel);
                }
            }
        }
    }
}

//=========================================================================
// Rasterization Helpers
//=========================================================================

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Pixels whose centers fall in `[start, end)`, clipped to `0..limit`.
fn pixel_span(start: f64, end: f64, limit: u32) -> Option<Range<u32>> {
    if !(start.is_finite() && end.is_finite()) {
        return None;
    }
    let first = (start - 0.5).ceil().max(0.0);
    let last = (end - 0.5).ceil().min(f64::from(limit));
    (first < last).then(|| first as u32..last as u32)
}

/// Source-over blend onto an opaque destination.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    match src[3] {
        255 => *dst = src,
        0 => {}
        alpha => {
            let a = u16::from(alpha);
            for i in 0..3 {
                let mixed = u16::from(src[i]) * a + u16::from(dst[i]) * (255 - a) + 127;
                dst[i] = (mixed / 255) as u8;
            }
            dst[3] = 255;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::CameraTransform;
    use crate::core::render::Painter;

    const RED: Color = Color { r: 255, g: 0, b: 0 };
    const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    fn canvas(width: u32, height: u32) -> Canvas {
        Canvas::new(SurfaceSize::new(width, height))
    }

    fn lit(canvas: &Canvas, color: Color) -> usize {
        let rgba = to_rgba(color);
        canvas.frame().pixels().filter(|p| **p == rgba).count()
    }

    //=====================================================================
    // Rectangles
    //=====================================================================

    #[test]
    fn new_canvas_is_black() {
        let canvas = canvas(4, 3);

        assert_eq!(canvas.size(), SurfaceSize::new(4, 3));
        assert_eq!(lit(&canvas, Color::BLACK), 12);
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn fill_rect_covers_pixel_centers() {
        let mut canvas = canvas(10, 10);
        canvas.set_color(RED);

        canvas.fill_rect(ScreenRect::new(2.0, 3.0, 4.0, 2.0));

        assert_eq!(lit(&canvas, RED), 8);
        assert_eq!(canvas.pixel(2, 3), Some(RED));
        assert_eq!(canvas.pixel(5, 4), Some(RED));
        assert_eq!(canvas.pixel(6, 4), Some(Color::BLACK));
        assert_eq!(canvas.pixel(2, 5), Some(Color::BLACK));
    }

    #[test]
    fn abutting_rects_share_no_pixels() {
        let mut canvas = canvas(10, 2);
        canvas.set_color(RED);
        canvas.fill_rect(ScreenRect::new(0.0, 0.0, 4.6, 2.0));
        canvas.set_color(BLUE);
        canvas.fill_rect(ScreenRect::new(4.6, 0.0, 4.0, 2.0));

        assert_eq!(lit(&canvas, RED) + lit(&canvas, BLUE), 2 * 9);
        assert_eq!(canvas.pixel(4, 0), Some(RED));
        assert_eq!(canvas.pixel(5, 0), Some(BLUE));
    }

    #[test]
    fn negative_extent_is_normalized() {
        let mut canvas = canvas(10, 10);
        canvas.set_color(RED);

        canvas.fill_rect(ScreenRect::new(6.0, 5.0, -4.0, -2.0));

        assert_eq!(lit(&canvas, RED), 8);
        assert_eq!(canvas.pixel(2, 3), Some(RED));
    }

    #[test]
    fn offscreen_and_invalid_rects_are_clipped() {
        let mut canvas = canvas(4, 4);
        canvas.set_color(RED);

        canvas.fill_rect(ScreenRect::new(-10.0, -10.0, 12.0, 12.0));
        assert_eq!(lit(&canvas, RED), 4);

        canvas.fill_rect(ScreenRect::new(100.0, 0.0, 5.0, 5.0));
        canvas.fill_rect(ScreenRect::new(f64::NAN, 0.0, 5.0, 5.0));
        canvas.fill_rect(ScreenRect::new(0.0, 0.0, f64::INFINITY, 5.0));
        assert_eq!(lit(&canvas, RED), 4);
    }

    #[test]
    fn clear_paints_everything() {
        let mut canvas = canvas(3, 3);
        canvas.clear(BLUE);

        assert_eq!(lit(&canvas, BLUE), 9);
    }

    //=====================================================================
    // Lines and Circles
    //=====================================================================

    #[test]
    fn one_pixel_line_covers_one_row() {
        let mut canvas = canvas(10, 10);
        canvas.set_color(RED);

        canvas.stroke_line(DVec2::new(0.0, 5.0), DVec2::new(10.0, 5.0), 1.0);

        assert_eq!(lit(&canvas, RED), 10);
    }

    #[test]
    fn thick_diagonal_line_stays_near_segment() {
        let mut canvas = canvas(20, 20);
        canvas.set_color(RED);

        canvas.stroke_line(DVec2::new(2.0, 2.0), DVec2::new(18.0, 18.0), 3.0);

        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(18, 2), Some(Color::BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK), "butt caps stop at the endpoints");
    }

    #[test]
    fn degenerate_lines_draw_nothing() {
        let mut canvas = canvas(10, 10);
        canvas.set_color(RED);

        canvas.stroke_line(DVec2::new(5.0, 5.0), DVec2::new(5.0, 5.0), 4.0);
        canvas.stroke_line(DVec2::new(0.0, 5.0), DVec2::new(10.0, 5.0), 0.0);
        canvas.stroke_line(DVec2::new(0.0, 5.0), DVec2::new(f64::NAN, 5.0), 2.0);

        assert_eq!(lit(&canvas, RED), 0);
    }

    #[test]
    fn circle_area_is_close_to_pi_r_squared() {
        let mut canvas = canvas(40, 40);
        canvas.set_color(RED);

        canvas.fill_circle(DVec2::new(20.0, 20.0), 10.0);

        let area = lit(&canvas, RED) as f64;
        let expected = std::f64::consts::PI * 100.0;
        assert!((area - expected).abs() < 20.0, "area {} vs {}", area, expected);
        assert_eq!(canvas.pixel(20, 20), Some(RED));
        assert_eq!(canvas.pixel(20, 31), Some(Color::BLACK));
    }

    //=====================================================================
    // Text
    //=====================================================================

    #[test]
    fn text_sits_on_the_baseline() {
        let mut canvas = canvas(40, 20);
        canvas.set_color(RED);

        // 7px glyphs: one pixel per font cell.
        canvas.draw_text(DVec2::new(1.0, 15.0), "L", 7.0);

        assert_eq!(lit(&canvas, RED), 11);
        assert_eq!(canvas.pixel(1, 8), Some(RED), "top-left of the stem");
        assert_eq!(canvas.pixel(5, 14), Some(RED), "right end of the foot");
        assert_eq!(canvas.pixel(1, 15), Some(Color::BLACK), "nothing below the baseline");
    }

    #[test]
    fn text_advances_per_character() {
        let mut canvas = canvas(40, 20);
        canvas.set_color(RED);

        canvas.draw_text(DVec2::new(0.0, 10.0), "LL", 7.0);

        assert_eq!(lit(&canvas, RED), 22);
        assert_eq!(canvas.pixel(6, 3), Some(RED), "second glyph starts one cell after the first");
    }

    //=====================================================================
    // Images
    //=====================================================================

    #[test]
    fn image_is_blitted_at_rounded_origin() {
        let mut canvas = canvas(10, 10);
        let image = canvas.insert_image(RgbaImage::from_pixel(2, 3, Rgba([0, 0, 255, 255])));

        canvas.draw_image(image, DVec2::new(3.4, 4.6));

        assert_eq!(lit(&canvas, BLUE), 6);
        assert_eq!(canvas.pixel(3, 5), Some(BLUE));
        assert_eq!(canvas.pixel(4, 7), Some(BLUE));
    }

    #[test]
    fn image_alpha_is_blended() {
        let mut canvas = canvas(2, 1);
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        image.put_pixel(1, 0, Rgba([255, 0, 0, 128]));
        let handle = canvas.insert_image(image);

        canvas.draw_image(handle, DVec2::ZERO);

        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK), "transparent pixels are skipped");
        assert_eq!(canvas.pixel(1, 0), Some(Color { r: 128, g: 0, b: 0 }));
    }

    #[test]
    fn sub_image_is_scaled_into_destination() {
        let mut canvas = canvas(8, 8);
        let mut sheet = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 255, 255]));
        sheet.put_pixel(2, 0, Rgba([255, 0, 0, 255]));
        let handle = canvas.insert_image(sheet);

        // The single red source pixel scaled 4x.
        canvas.draw_sub_image(
            handle,
            ScreenRect::new(2.0, 0.0, 1.0, 1.0),
            ScreenRect::new(0.0, 0.0, 4.0, 4.0),
        );

        assert_eq!(lit(&canvas, RED), 16);
        assert_eq!(lit(&canvas, BLUE), 0);
    }

    #[test]
    fn unknown_image_is_ignored() {
        let mut canvas = canvas(4, 4);

        canvas.draw_image(ImageHandle(7), DVec2::ZERO);

        assert_eq!(lit(&canvas, Color::BLACK), 16);
        assert!(canvas.image(ImageHandle(7)).is_none());
    }

    #[test]
    fn missing_image_file_is_an_error() {
        let mut canvas = canvas(1, 1);

        let result = canvas.load_image("does/not/exist.png");

        assert!(matches!(result, Err(CanvasError::Image(_))));
    }

    //=====================================================================
    // Resize and Camera Integration
    //=====================================================================

    #[test]
    fn resize_keeps_overlapping_content() {
        let mut canvas = canvas(4, 4);
        canvas.clear(RED);

        canvas.resize(SurfaceSize::new(6, 2)).unwrap();

        assert_eq!(canvas.size(), SurfaceSize::new(6, 2));
        assert_eq!(canvas.pixel(3, 1), Some(RED));
        assert_eq!(canvas.pixel(5, 1), Some(Color::BLACK));
    }

    #[test]
    fn resize_to_zero_is_allowed() {
        let mut canvas = canvas(4, 4);
        canvas.resize(SurfaceSize::new(0, 0)).unwrap();
        canvas.set_color(RED);

        canvas.fill_rect(ScreenRect::new(0.0, 0.0, 10.0, 10.0));
        canvas.fill_circle(DVec2::ZERO, 5.0);

        assert_eq!(canvas.frame().as_raw().len(), 0);
    }

    #[test]
    fn painter_rect_lands_on_camera_pixels() {
        let mut canvas = canvas(100, 100);
        let mut camera = CameraTransform::new();
        camera.set_viewport_size(100.0, 100.0);
        camera.set_position(0.0, 0.0);
        camera.set_zoom(2.0).unwrap();

        let mut painter = Painter::new(&mut canvas, &camera);
        painter.fill_color(RED);
        // World (0, 0)..(10, 10) maps to screen (50, 50)..(70, 70).
        painter.fill_rect(0.0, 0.0, 10.0, 10.0);

        assert_eq!(canvas.pixel(50, 50), Some(RED));
        assert_eq!(canvas.pixel(69, 69), Some(RED));
        assert_eq!(canvas.pixel(70, 70), Some(Color::BLACK));
        assert_eq!(canvas.pixel(48, 48), Some(Color::BLACK));
    }
}
