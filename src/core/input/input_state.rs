//=========================================================================
// Input State
//
// Single source of truth for "what input happened since the last frame
// boundary".
//
// Architecture:
//   record_*() → IndexMap<id, KeyRecord> → is_down() / is_pressed_this_frame()
//
// Frame lifecycle: record_*() ... → user queries → end_frame()
//
// Notes:
// Identifiers are registered lazily on first use and never removed.
// Insertion order is preserved so `end_frame()` and `known_ids()` walk
// identifiers deterministically. Unknown identifiers answer "not down /
// not pressed" instead of failing.
//
//=========================================================================

//=== External Dependencies ===============================================

use indexmap::IndexMap;
use log::trace;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, MouseButton};

//=== KeyRecord ===========================================================

/// Tracked state of one input identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyRecord {
    /// Level-triggered: currently held.
    pub down: bool,

    /// Edge-triggered: press transitions since the last frame boundary.
    pub pressed_count: u32,
}

//=== InputState ==========================================================

/// Accumulates device events between frames.
///
/// Exposes level-triggered ([`is_down`](Self::is_down)) and edge-triggered
/// ([`is_pressed_this_frame`](Self::is_pressed_this_frame)) queries over
/// keys and the three tracked mouse buttons (`"lm"`, `"mm"`, `"rm"`), plus
/// the cursor position and the wheel movement of the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: IndexMap<String, KeyRecord>,
    mouse: (f64, f64),
    wheel: f64,
}

impl InputState {
    /// Creates an empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Keys -------------------------------------------------------------

    /// Records a press of `id`.
    ///
    /// A press of an identifier that is already down is a repeat and is
    /// ignored, so held keys never inflate `pressed_count`.
    pub fn record_key_down(&mut self, id: &str) {
        let id = id.to_lowercase();
        match self.keys.get_mut(&id) {
            Some(record) if record.down => {}
            Some(record) => {
                record.down = true;
                record.pressed_count += 1;
            }
            None => {
                self.keys.insert(id, KeyRecord { down: true, pressed_count: 1 });
            }
        }
    }

    /// Records a release of `id`. The frame's press count is kept.
    pub fn record_key_up(&mut self, id: &str) {
        let id = id.to_lowercase();
        match self.keys.get_mut(&id) {
            Some(record) => record.down = false,
            None => {
                self.keys.insert(id, KeyRecord::default());
            }
        }
    }

    //--- Mouse ------------------------------------------------------------

    /// Records a mouse button press by device index.
    ///
    /// Indices other than 0, 1, 2 are ignored.
    pub fn record_mouse_button_down(&mut self, index: u16) {
        if let Some(button) = MouseButton::from_index(index) {
            self.record_key_down(button.id());
        }
    }

    /// Records a mouse button release by device index.
    ///
    /// Indices other than 0, 1, 2 are ignored.
    pub fn record_mouse_button_up(&mut self, index: u16) {
        if let Some(button) = MouseButton::from_index(index) {
            self.record_key_up(button.id());
        }
    }

    /// Overwrites the cursor position (screen space).
    pub fn record_mouse_move(&mut self, x: f64, y: f64) {
        self.mouse = (x, y);
    }

    /// Adds `delta` to this frame's wheel movement.
    pub fn record_wheel(&mut self, delta: f64) {
        self.wheel += delta;
    }

    //--- Event Dispatch ---------------------------------------------------

    /// Applies a single device event.
    ///
    /// OS auto-repeat key presses are dropped before they reach
    /// [`record_key_down`](Self::record_key_down).
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { repeat: true, .. } => {}
            InputEvent::KeyDown { key, repeat: false } => self.record_key_down(key),
            InputEvent::KeyUp { key } => self.record_key_up(key),
            InputEvent::MouseButtonDown { button } => self.record_mouse_button_down(*button),
            InputEvent::MouseButtonUp { button } => self.record_mouse_button_up(*button),
            InputEvent::MouseMoved { x, y } => self.record_mouse_move(*x, *y),
            InputEvent::Wheel { delta } => self.record_wheel(*delta),
        }
    }

    //--- Frame Boundary ---------------------------------------------------

    /// Clears per-frame state: every press count and the wheel movement.
    ///
    /// Must run once per frame, after draw logic has queried the frame.
    pub fn end_frame(&mut self) {
        for record in self.keys.values_mut() {
            record.pressed_count = 0;
        }
        self.wheel = 0.0;
        trace!(target: "sketch::input", "Frame input reset ({} known ids)", self.keys.len());
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` while `id` is held. Case-insensitive.
    pub fn is_down(&self, id: &str) -> bool {
        self.record(id).is_some_and(|record| record.down)
    }

    /// Returns `true` if `id` was pressed since the last frame boundary.
    /// Case-insensitive.
    pub fn is_pressed_this_frame(&self, id: &str) -> bool {
        self.pressed_count(id) > 0
    }

    /// Number of press edges of `id` since the last frame boundary.
    pub fn pressed_count(&self, id: &str) -> u32 {
        self.record(id).map_or(0, |record| record.pressed_count)
    }

    /// Returns the tracked record for `id`, if it has ever been seen.
    pub fn record(&self, id: &str) -> Option<&KeyRecord> {
        self.keys.get(id.to_lowercase().as_str())
    }

    /// Cursor position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse
    }

    /// Wheel movement accumulated this frame. Reading does not reset it.
    pub fn wheel_delta(&self) -> f64 {
        self.wheel
    }

    /// Identifiers seen so far, in first-seen order.
    pub fn known_ids(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
