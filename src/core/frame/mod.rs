//=========================================================================
// Frame Module
//=========================================================================
//
// Tick pacing and the per-tick driver.
//
// Components:
// - `clock`: Fixed-rate deadline scheduling (`FrameClock`)
// - `frame_loop`: Tick execution and the `Frame` context for draw logic
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod frame_loop;

//=== Public API ==========================================================

pub use clock::{FrameClock, MAX_QUEUED_TICKS, MIN_FPS};
pub use frame_loop::{Frame, FrameLoop};
