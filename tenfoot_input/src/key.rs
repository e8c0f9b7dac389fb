// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-event vocabulary shared across the stack.

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control (or the platform's primary chord modifier).
        const CTRL  = 0b0000_0001;
        /// Shift.
        const SHIFT = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// Logical key identity, reduced to what this stack routes on.
///
/// Hosts map their native key events into this enum; anything the engine has
/// no rule for collapses into [`KeyCode::Other`] and passes through
/// untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// D-Pad / arrow up.
    ArrowUp,
    /// D-Pad / arrow down.
    ArrowDown,
    /// D-Pad / arrow left.
    ArrowLeft,
    /// D-Pad / arrow right.
    ArrowRight,
    /// Enter / OK / select.
    Enter,
    /// The dedicated developer-tools function key.
    F12,
    /// A printable character key, as reported by the host.
    Char(char),
    /// Any key this stack has no routing rule for.
    Other,
}

/// A key press: logical key plus held modifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Logical key identity.
    pub code: KeyCode,
    /// Modifiers held at press time.
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// A press of `code` with no modifiers held.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// A press of `code` with `modifiers` held.
    #[must_use]
    pub const fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// True for the four D-Pad directions.
    #[must_use]
    pub const fn is_arrow(&self) -> bool {
        matches!(
            self.code,
            KeyCode::ArrowUp | KeyCode::ArrowDown | KeyCode::ArrowLeft | KeyCode::ArrowRight
        )
    }
}
