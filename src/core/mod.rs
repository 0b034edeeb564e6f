//=========================================================================
// Core Systems
//
// Platform-independent sketch machinery.
//
// Responsibilities:
// - Aggregate device input between frames (`input`)
// - Map world coordinates to screen coordinates and back (`camera`)
// - Define the drawing boundary and world-space helpers (`render`)
// - Pace and execute ticks (`frame`)
// - Carry device events from the platform to the frame loop
//   (`platform_bridge`)
//
// Notes:
// Nothing in this module touches the OS. The winit integration lives in
// the private `platform` module and talks to the core exclusively through
// `PlatformEvent` messages, so every core system can be driven and tested
// headlessly.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod frame;
pub mod input;
pub mod platform_bridge;
pub mod render;

//=== Public API ==========================================================

pub use camera::{CameraError, CameraTransform};
pub use frame::{Frame, FrameClock, FrameLoop};
pub use input::{InputEvent, InputState, MouseButton};
pub use platform_bridge::{event_channel, PlatformEvent, TickControl};
pub use render::{Color, DrawList, Painter, Surface, SurfaceSize};
