//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core message types.
//
// Defines the contract between the device event source and the frame
// loop. Anything able to produce `PlatformEvent`s (winit, a replay
// script, a test) can drive a sketch.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Messages sent from the event source to the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// A device input event, applied to `InputState` at the next tick.
    Input(InputEvent),

    /// The window was closed; the loop stops scheduling ticks.
    CloseRequested,
}

impl From<InputEvent> for PlatformEvent {
    fn from(event: InputEvent) -> Self {
        Self::Input(event)
    }
}

//=== Channel =============================================================

/// Creates the event channel between a source and a `FrameLoop`.
///
/// Unbounded: the winit source and the loop share one thread, so a full
/// bounded channel would block the producer forever.
pub fn event_channel() -> (Sender<PlatformEvent>, Receiver<PlatformEvent>) {
    unbounded()
}
