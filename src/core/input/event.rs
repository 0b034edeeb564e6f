//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level device events.
//
// This module abstracts away platform-specific input (e.g. Winit)
// into a small, string-keyed format consumed by `InputState`.
//
// Responsibilities:
// - Represent keyboard, mouse button, cursor and wheel events
// - Normalize physical key names into stable identifiers
// - Map device mouse-button indices to synthetic identifiers
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    PlatformEvent channel
//         ↓
//    InputState (record_* operations)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Mouse button that participates in key-style tracking.
///
/// Buttons are tracked under synthetic identifiers so they can be queried
/// through the same API as keyboard keys:
///
/// | Index | Button   | Identifier |
/// |-------|----------|------------|
/// | 0     | `Left`   | `"lm"`     |
/// | 1     | `Middle` | `"mm"`     |
/// | 2     | `Right`  | `"rm"`     |
///
/// Any other device index (side buttons, thumb buttons) is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (index 0).
    Left,

    /// Wheel click (index 1).
    Middle,

    /// Secondary button (index 2).
    Right,
}

impl MouseButton {
    /// Maps a device button index to a tracked button.
    ///
    /// Returns `None` for indices outside `0..=2`.
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }

    /// Device index of this button.
    pub fn index(self) -> u16 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    /// Identifier under which the button is tracked in `InputState`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Left => "lm",
            Self::Middle => "mm",
            Self::Right => "rm",
        }
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Keys are carried as already-normalized identifiers (see
/// [`normalize_key_name`]); mouse buttons as raw device indices so that
/// untracked buttons still flow through and are dropped by `InputState`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed down.
    ///
    /// `repeat` is set by the OS for auto-repeat presses while the key is
    /// held; such events never count as a new press.
    KeyDown { key: String, repeat: bool },

    /// Key released.
    KeyUp { key: String },

    /// Mouse button pressed (device index).
    MouseButtonDown { button: u16 },

    /// Mouse button released (device index).
    MouseButtonUp { button: u16 },

    /// Cursor moved to a new position.
    ///
    /// Coordinates are in screen space (pixels, top-left origin).
    MouseMoved { x: f64, y: f64 },

    /// Vertical wheel movement, positive when scrolling up.
    Wheel { delta: f64 },
}

impl InputEvent {
    /// Convenience constructor for a non-repeat key press.
    pub fn key_down(key: impl AsRef<str>) -> Self {
        Self::KeyDown {
            key: normalize_key_name(key.as_ref()),
            repeat: false,
        }
    }

    /// Convenience constructor for a key release.
    pub fn key_up(key: impl AsRef<str>) -> Self {
        Self::KeyUp {
            key: normalize_key_name(key.as_ref()),
        }
    }
}

//=== Key Name Normalization ==============================================

/// Normalizes a physical key code name into an input identifier.
///
/// The name is lowercased; letter keys reported as `"KeyX"` collapse to the
/// single letter. Everything else keeps its full lowercase name.
///
/// ```
/// use sketchpad::core::input::normalize_key_name;
///
/// assert_eq!(normalize_key_name("KeyA"), "a");
/// assert_eq!(normalize_key_name("Space"), "space");
/// assert_eq!(normalize_key_name("ArrowLeft"), "arrowleft");
/// ```
pub fn normalize_key_name(code: &str) -> String {
    let lower = code.to_lowercase();
    match lower.strip_prefix("key") {
        Some(rest) => match rest.chars().next() {
            Some(letter) => letter.to_string(),
            None => lower,
        },
        None => lower,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
