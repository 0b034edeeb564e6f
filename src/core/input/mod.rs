//=========================================================================
// Input Module
//
// Device input aggregation for sketches.
//
// Architecture:
// ```text
//   Platform (winit) ──InputEvent──> PlatformEvent channel
//                                          │
//                                          ▼
//                               InputState::apply()
//                                          │
//                 is_down() / is_pressed_this_frame() / mouse / wheel
// ```
//
// Components:
// - `event`: Device event types, mouse-button mapping, key normalization
// - `input_state`: Level- and edge-triggered state with per-frame reset
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod input_state;

//=== Public API ==========================================================

pub use event::{normalize_key_name, InputEvent, MouseButton};
pub use input_state::{InputState, KeyRecord};
