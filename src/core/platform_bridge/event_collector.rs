//=========================================================================
// Event Collector
//=========================================================================
//
// Frame-loop side of the platform bridge.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_into() → InputState → TickControl
//
// Every event queued before the tick is applied, in arrival order, so
// draw logic at tick N+1 sees everything recorded since tick N.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputState;

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Drains platform events into an `InputState`.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    close_requested: bool,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            close_requested: false,
        }
    }

    /// Applies every pending event to `input`.
    ///
    /// Returns [`TickControl::Exit`] once a close was requested or every
    /// sender is gone. Input events queued ahead of the close are still
    /// applied.
    pub(crate) fn collect_into(&mut self, input: &mut InputState) -> TickControl {
        let mut applied = 0usize;

        loop {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Input(event)) => {
                    trace!(target: "sketch::input", "{:?}", event);
                    input.apply(&event);
                    applied += 1;
                }
                Ok(PlatformEvent::CloseRequested) => {
                    debug!(target: "sketch::input", "Close requested by platform");
                    self.close_requested = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "sketch::input", "Event source disconnected");
                    self.close_requested = true;
                    break;
                }
            }
        }

        if applied > 0 {
            trace!(target: "sketch::input", "Applied {} events this tick", applied);
        }

        if self.close_requested {
            TickControl::Exit
        } else {
            TickControl::Continue
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
