//=========================================================================
// Input Event Types
//
// Engine-level representation of discrete input.
//
// Device handling (windows, OS event loops) lives outside this crate; the
// embedding engine converts its native events into `InputEvent`s before
// handing them to the `InputSystem`.
//
// Event Flow:
// ```text
// Host engine / platform
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (press/release deltas)
//         ↓
//    InputSystem (bound actions)
// ```
//
// Names:
// Keys and buttons have stable textual names (`KeyE`, `Space`,
// `MouseLeft`) used by the configuration layer.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::str::FromStr;

//=== Internal Dependencies ===============================================

use crate::config::ConfigError;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

impl MouseButton {
    const NAMES: [(MouseButton, &'static str); 4] = [
        (MouseButton::Left, "MouseLeft"),
        (MouseButton::Right, "MouseRight"),
        (MouseButton::Middle, "MouseMiddle"),
        (MouseButton::Other, "MouseOther"),
    ];

    /// Returns the configuration name of this button.
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(button, _)| *button == self)
            .map(|(_, name)| *name)
            .unwrap_or("MouseOther")
    }
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyE` is always the same physical key regardless of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys the host could not map.
    Unidentified,
}

impl KeyCode {
    /// Every nameable key, in declaration order.
    pub const ALL: [KeyCode; 46] = {
        use KeyCode::*;
        [
            Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
            KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
            ArrowDown, ArrowLeft, ArrowRight, ArrowUp,
            Space, Enter, Escape, Tab, Backspace, Delete,
        ]
    };
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variant names double as configuration names.
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== DiscreteInput =======================================================

/// A binary input element: a keyboard key or a mouse button.
///
/// This is the unit bindings are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscreteInput {
    Key(KeyCode),
    Button(MouseButton),
}

impl From<KeyCode> for DiscreteInput {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

impl From<MouseButton> for DiscreteInput {
    fn from(button: MouseButton) -> Self {
        Self::Button(button)
    }
}

impl fmt::Display for DiscreteInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => fmt::Display::fmt(key, f),
            Self::Button(button) => fmt::Display::fmt(button, f),
        }
    }
}

/// Parses a configuration name such as `KeyE`, `Space` or `MouseLeft`.
///
/// A single letter or digit is accepted as shorthand (`E` → `KeyE`,
/// `1` → `Digit1`).
impl FromStr for DiscreteInput {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        if let Some((button, _)) = MouseButton::NAMES.iter().find(|(_, n)| *n == name) {
            return Ok(Self::Button(*button));
        }

        let expanded = match name.as_bytes() {
            [c] if c.is_ascii_alphabetic() => format!("Key{}", c.to_ascii_uppercase() as char),
            [c] if c.is_ascii_digit() => format!("Digit{}", *c as char),
            _ => name.to_string(),
        };

        KeyCode::ALL
            .iter()
            .find(|key| key.to_string() == expanded)
            .map(|key| Self::Key(*key))
            .ok_or_else(|| ConfigError::UnknownInput(s.to_string()))
    }
}

//=== InputEvent ==========================================================

/// Discrete input event delivered by the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Mouse button pressed.
    MouseButtonDown(MouseButton),

    /// Mouse button released.
    MouseButtonUp(MouseButton),

    /// Unrecognized event; ignored by the tracker.
    Unidentified,
}

impl InputEvent {
    /// Returns the input this event refers to and whether it went down.
    pub fn transition(&self) -> Option<(DiscreteInput, bool)> {
        match *self {
            Self::KeyDown(key) => Some((DiscreteInput::Key(key), true)),
            Self::KeyUp(key) => Some((DiscreteInput::Key(key), false)),
            Self::MouseButtonDown(button) => Some((DiscreteInput::Button(button), true)),
            Self::MouseButtonUp(button) => Some((DiscreteInput::Button(button), false)),
            Self::Unidentified => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=== Names ===========================================================

    #[test]
    fn key_names_parse() {
        assert_eq!("KeyE".parse::<DiscreteInput>().unwrap(), DiscreteInput::Key(KeyCode::KeyE));
        assert_eq!("Space".parse::<DiscreteInput>().unwrap(), DiscreteInput::Key(KeyCode::Space));
        assert_eq!(
            "ArrowUp".parse::<DiscreteInput>().unwrap(),
            DiscreteInput::Key(KeyCode::ArrowUp)
        );
    }

    #[test]
    fn single_character_shorthand() {
        assert_eq!("e".parse::<DiscreteInput>().unwrap(), DiscreteInput::Key(KeyCode::KeyE));
        assert_eq!("F".parse::<DiscreteInput>().unwrap(), DiscreteInput::Key(KeyCode::KeyF));
        assert_eq!("7".parse::<DiscreteInput>().unwrap(), DiscreteInput::Key(KeyCode::Digit7));
    }

    #[test]
    fn mouse_names_parse() {
        assert_eq!(
            "MouseLeft".parse::<DiscreteInput>().unwrap(),
            DiscreteInput::Button(MouseButton::Left)
        );
        assert_eq!(
            " MouseMiddle ".parse::<DiscreteInput>().unwrap(),
            DiscreteInput::Button(MouseButton::Middle)
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "KeyF13".parse::<DiscreteInput>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownInput(ref name) if name == "KeyF13"));

        // The fallback variant is not a bindable name.
        assert!("Unidentified".parse::<DiscreteInput>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for key in KeyCode::ALL {
            let input = DiscreteInput::Key(key);
            assert_eq!(input.to_string().parse::<DiscreteInput>().unwrap(), input);
        }
        for (button, _) in MouseButton::NAMES {
            let input = DiscreteInput::Button(button);
            assert_eq!(input.to_string().parse::<DiscreteInput>().unwrap(), input);
        }
    }

    //=== InputEvent ======================================================

    #[test]
    fn transition_reports_direction() {
        assert_eq!(
            InputEvent::KeyDown(KeyCode::KeyE).transition(),
            Some((DiscreteInput::Key(KeyCode::KeyE), true))
        );
        assert_eq!(
            InputEvent::MouseButtonUp(MouseButton::Left).transition(),
            Some((DiscreteInput::Button(MouseButton::Left), false))
        );
        assert_eq!(InputEvent::Unidentified.transition(), None);
    }
}
