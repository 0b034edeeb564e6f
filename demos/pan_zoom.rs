//=========================================================================
// Pan & Zoom Demo
//=========================================================================
//
// Draws a world-space grid with a few shapes.
//
// Controls:
//   WASD / arrows    pan
//   left drag        pan
//   mouse wheel      zoom about the cursor
//   space            reset camera
//   escape           quit
//
// Run with logging:
//   RUST_LOG=sketch=debug,platform=info cargo run --example pan_zoom
//
//=========================================================================

use log::{debug, info};
use sketchpad::prelude::*;

/// World units per second at zoom 1.
const PAN_SPEED: f64 = 300.0;

/// Zoom multiplier per wheel notch.
const ZOOM_STEP: f64 = 1.1;

const GRID_SPACING: f64 = 50.0;
const GRID_EXTENT: f64 = 1000.0;

fn main() -> Result<(), SketchError> {
    env_logger::init();

    let background = Color::from_hex("1E1E2E").unwrap_or(Color::BLACK);
    let grid = background.brighten(30);
    let accent = Color::rgb(255.0, 140.0, 60.0);

    let mut last_mouse: Option<(f64, f64)> = None;

    SketchBuilder::new()
        .with_title("pan & zoom")
        .with_size(1024, 768)
        .build()
        .run(move |frame| {
            let dt = frame.delta_seconds();

            //--- Controls -------------------------------------------------
            let input = frame.input();
            if input.is_down("escape") {
                frame.request_exit();
                return;
            }

            let mut pan = DVec2::ZERO;
            if input.is_down("a") || input.is_down("arrowleft") {
                pan.x -= 1.0;
            }
            if input.is_down("d") || input.is_down("arrowright") {
                pan.x += 1.0;
            }
            if input.is_down("w") || input.is_down("arrowup") {
                pan.y -= 1.0;
            }
            if input.is_down("s") || input.is_down("arrowdown") {
                pan.y += 1.0;
            }

            let reset = input.is_pressed_this_frame("space");
            let dragging = input.is_down(MouseButton::Left.id());
            let (mx, my) = input.mouse_position();
            let wheel = input.wheel_delta();

            let camera = frame.camera_mut();
            let step = PAN_SPEED * dt / camera.zoom();
            camera.pan_by(pan.x * step, pan.y * step);

            if dragging {
                if let Some((px, py)) = last_mouse {
                    camera.pan_by_screen(mx - px, my - py);
                }
            }
            last_mouse = Some((mx, my));

            if wheel != 0.0 {
                let factor = ZOOM_STEP.powf(wheel / 120.0);
                match camera.zoom_about(mx, my, factor) {
                    Ok(()) => debug!("Zoom {:.3}", camera.zoom()),
                    Err(e) => debug!("Zoom ignored: {}", e),
                }
            }

            if reset {
                info!("Camera reset");
                let _ = camera.set_zoom(1.0);
                camera.center_on_viewport();
            }

            //--- Drawing --------------------------------------------------
            let cursor = frame.mouse_world();
            let (w, h) = frame.screen_size();
            let mut painter = frame.painter();

            // Background in screen space: convert the viewport corners.
            let camera = painter.camera();
            let (x0, y0) = (camera.world_x(0.0), camera.world_y(0.0));
            let (bw, bh) = (camera.world_w(w), camera.world_h(h));
            painter.fill_color(background);
            painter.fill_rect(x0, y0, bw, bh);

            painter.fill_color(grid);
            let lines = (GRID_EXTENT / GRID_SPACING) as i32;
            for i in -lines..=lines {
                let offset = f64::from(i) * GRID_SPACING;
                painter.fill_line(offset, -GRID_EXTENT, offset, GRID_EXTENT, 1.0);
                painter.fill_line(-GRID_EXTENT, offset, GRID_EXTENT, offset, 1.0);
            }

            painter.fill_color(accent);
            painter.fill_rect(100.0, 100.0, 200.0, 120.0);
            painter.fill_color(accent.darken(60));
            painter.fill_circle(-150.0, 80.0, 60.0);

            painter.fill_color(Color::WHITE);
            painter.fill_circle(cursor.x, cursor.y, 4.0);
            painter.fill_text(
                cursor.x + 8.0,
                cursor.y - 8.0,
                &format!("({:.0}, {:.0})", cursor.x, cursor.y),
                14.0,
            );
        })
}
