//=========================================================================
// Sketchpad Library Root
//
// This crate defines the public API surface of Sketchpad, a small
// immediate-mode drawing runtime: open a window, get input and a pan/zoom
// camera, draw in world coordinates every tick.
//
// Responsibilities:
// - Expose the sketch entry point (`SketchBuilder`, `Sketch`)
// - Expose the platform-independent systems (`core`) for headless use
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use sketchpad::prelude::*;
//
// fn main() -> Result<(), SketchError> {
//     SketchBuilder::new().build().run(|frame| {
//         frame.painter().fill_circle(0.0, 0.0, 25.0);
//     })
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds input aggregation, the camera, the drawing boundary and the
// frame loop. None of it touches the OS, so it can be driven directly
// through `FrameLoop` with a `Canvas` or `DrawList` surface.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit window and event-loop integration and is
// kept private; only the window-backed surface is re-exported.
//
// `sketch` defines the builder and the blocking `run` entry point.
//
mod platform;
mod sketch;

//--- Public Exports ------------------------------------------------------

pub use platform::{WindowSurface, WindowSurfaceError};
pub use sketch::{
    Sketch, SketchBuilder, SketchError, SurfaceFactory, DEFAULT_FPS, DEFAULT_SIZE, DEFAULT_TITLE,
};
