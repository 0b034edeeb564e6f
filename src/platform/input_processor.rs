//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into sketch InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent → PlatformEvent channel
//
// Key names follow the physical key code names (`KeyA`, `Space`,
// `ArrowLeft`), normalized to lowercase identifiers. Mouse buttons are
// reported by device index so untracked buttons are filtered by
// `InputState`, not here. Keys without a known physical code are
// dropped (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{normalize_key_name, InputEvent, MouseButton};

//=== Constants ===========================================================

/// Pixels reported per wheel notch (line-based scroll devices).
pub(crate) const WHEEL_LINE_PIXELS: f64 = 120.0;

//=== InputProcessor ======================================================

/// Converts Winit events to sketch InputEvents.
pub(crate) struct InputProcessor;

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (drops keys without a physical code).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };

        Some(self.create_key_input_event(code, key_event.state, key_event.repeat))
    }

    /// Converts a Winit mouse button event.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = button_index(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button },
            ElementState::Released => InputEvent::MouseButtonUp { button },
        }
    }

    /// Creates a mouse move event (screen space).
    pub(crate) fn process_mouse_move(&self, position: PhysicalPosition<f64>) -> InputEvent {
        InputEvent::MouseMoved {
            x: position.x,
            y: position.y,
        }
    }

    /// Converts wheel movement to pixels, positive when scrolling up.
    pub(crate) fn process_wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y) * WHEEL_LINE_PIXELS,
            MouseScrollDelta::PixelDelta(position) => position.y,
        };
        InputEvent::Wheel { delta }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_key_input_event(
        &self,
        code: WinitKeyCode,
        state: ElementState,
        repeat: bool,
    ) -> InputEvent {
        let key = key_name(code);
        match state {
            ElementState::Pressed => InputEvent::KeyDown { key, repeat },
            ElementState::Released => InputEvent::KeyUp { key },
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Identifier for a Winit physical key code.
///
/// Relies on the derived `Debug` of winit 0.30's `KeyCode`, whose unit
/// variants are named after the W3C `code` values (`KeyA`, `Digit1`,
/// `ShiftLeft`). `key_names_are_normalized` pins that format; revisit it
/// when bumping winit.
pub(crate) fn key_name(code: WinitKeyCode) -> String {
    normalize_key_name(&format!("{:?}", code))
}

/// Device index of a Winit mouse button.
///
/// Left/Middle/Right/Back/Forward use the conventional 0..=4 numbering;
/// `Other(n)` is shifted past them.
pub(crate) fn button_index(button: WinitMouseButton) -> u16 {
    match button {
        WinitMouseButton::Left => MouseButton::Left.index(),
        WinitMouseButton::Middle => MouseButton::Middle.index(),
        WinitMouseButton::Right => MouseButton::Right.index(),
        WinitMouseButton::Back => 3,
        WinitMouseButton::Forward => 4,
        WinitMouseButton::Other(n) => n.saturating_add(5),
    }
}

//=========================================================================
// Tests
//=========================================================================
