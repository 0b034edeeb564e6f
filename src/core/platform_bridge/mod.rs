//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the device event source (winit or a scripted source) with the
// frame loop.
//
// Components:
// - `interface`: Event type and channel constructor (the contract)
// - `event_collector`: Loop-side draining into `InputState`
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::{event_channel, PlatformEvent};
