//=========================================================================
// Draw List
//=========================================================================
//
// Headless `Surface` that records draw calls instead of rasterizing.
//
// Architecture:
//   draw calls → pending: Vec<DrawCommand> ──present()──> presented
//
// The last presented frame is kept for inspection; the pending buffer
// keeps its capacity across frames.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::convert::Infallible;

use glam::DVec2;
use log::trace;

//=== Internal Dependencies ===============================================

use super::color::Color;
use super::surface::{ImageHandle, ScreenRect, Surface, SurfaceSize};

//=== DrawCommand =========================================================

/// One recorded draw call (screen space).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRect(ScreenRect),
    StrokeLine { from: DVec2, to: DVec2, width: f64 },
    FillCircle { center: DVec2, radius: f64 },
    Text { origin: DVec2, text: String, pixel_height: f64 },
    Image { image: ImageHandle, origin: DVec2 },
    SubImage { image: ImageHandle, src: ScreenRect, dst: ScreenRect },
}

//=== DrawList ============================================================

/// Recording surface.
#[derive(Debug, Default)]
pub struct DrawList {
    size: SurfaceSize,
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames_presented: u64,
}

impl DrawList {
    /// Creates an empty draw list of the given size.
    pub fn new(size: SurfaceSize) -> Self {
        const COMMAND_BASE: usize = 64;

        Self {
            size,
            pending: Vec::with_capacity(COMMAND_BASE),
            presented: Vec::with_capacity(COMMAND_BASE),
            frames_presented: 0,
        }
    }

    /// Commands issued since the last `present()`.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Commands of the most recently presented frame.
    pub fn presented(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for DrawList {
    type Error = Infallible;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) -> Result<(), Self::Error> {
        self.size = size;
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        self.pending.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, rect: ScreenRect) {
        self.pending.push(DrawCommand::FillRect(rect));
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64) {
        self.pending.push(DrawCommand::StrokeLine { from, to, width });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.pending.push(DrawCommand::FillCircle { center, radius });
    }

    fn draw_text(&mut self, origin: DVec2, text: &str, pixel_height: f64) {
        self.pending.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            pixel_height,
        });
    }

    fn draw_image(&mut self, image: ImageHandle, origin: DVec2) {
        self.pending.push(DrawCommand::Image { image, origin });
    }

    fn draw_sub_image(&mut self, image: ImageHandle, src: ScreenRect, dst: ScreenRect) {
        self.pending.push(DrawCommand::SubImage { image, src, dst });
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        std::mem::swap(&mut self.pending, &mut self.presented);
        self.pending.clear();
        self.frames_presented += 1;
        trace!(
            target: "sketch::render",
            "Presented frame {} ({} commands)",
            self.frames_presented,
            self.presented.len()
        );
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut list = DrawList::new(SurfaceSize::new(100, 100));

        list.set_color(Color::WHITE);
        list.fill_rect(ScreenRect::new(1.0, 2.0, 3.0, 4.0));
        list.fill_circle(DVec2::new(5.0, 5.0), 2.0);

        assert_eq!(
            list.pending(),
            &[
                DrawCommand::SetColor(Color::WHITE),
                DrawCommand::FillRect(ScreenRect::new(1.0, 2.0, 3.0, 4.0)),
                DrawCommand::FillCircle { center: DVec2::new(5.0, 5.0), radius: 2.0 },
            ]
        );
    }

    #[test]
    fn present_moves_pending_to_presented() {
        let mut list = DrawList::new(SurfaceSize::new(10, 10));

        list.draw_text(DVec2::ZERO, "hi", 12.0);
        list.present().unwrap();

        assert!(list.pending().is_empty());
        assert_eq!(list.presented().len(), 1);
        assert_eq!(list.frames_presented(), 1);

        // An empty frame replaces the previous one.
        list.present().unwrap();
        assert!(list.presented().is_empty());
        assert_eq!(list.frames_presented(), 2);
    }

    #[test]
    fn resize_updates_size() {
        let mut list = DrawList::new(SurfaceSize::new(10, 10));
        list.resize(SurfaceSize::new(640, 480)).unwrap();

        assert_eq!(list.size(), SurfaceSize::new(640, 480));
    }
}
