// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment hygiene verdicts.
//!
//! A kiosk-style surface must not let users pop open browser context menus
//! or developer tooling with the usual chords. This module classifies the
//! offending inputs; it has no state and performs no suppression itself.
//! The caller cancels the host's default behavior when the verdict is
//! [`Verdict::Suppress`].
//!
//! Blocked chords:
//!
//! - `F12`
//! - `Ctrl+Shift+I`, `Ctrl+Shift+J`, `Ctrl+Shift+C` (letter match is
//!   case-insensitive)
//! - `Ctrl+U` (view source)
//! - context-menu requests, unconditionally
//!
//! Every other combination passes through unaffected.

use crate::{KeyCode, KeyPress, Modifiers};

/// Whether the host's default handling of an input should be cancelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Cancel the host's default behavior for this input.
    Suppress,
    /// Leave the input untouched.
    Pass,
}

impl Verdict {
    /// True if the default behavior should be cancelled.
    #[must_use]
    pub const fn is_suppressed(self) -> bool {
        matches!(self, Self::Suppress)
    }
}

/// Classify a key press against the developer-tools chord table.
#[must_use]
pub fn inspect_key(key: &KeyPress) -> Verdict {
    match key.code {
        KeyCode::F12 => Verdict::Suppress,
        KeyCode::Char(c) => {
            let mods = key.modifiers;
            let devtools = mods.contains(Modifiers::CTRL | Modifiers::SHIFT)
                && matches!(c.to_ascii_uppercase(), 'I' | 'J' | 'C');
            let view_source = mods.contains(Modifiers::CTRL)
                && !mods.contains(Modifiers::SHIFT)
                && c.eq_ignore_ascii_case(&'u');
            if devtools || view_source {
                Verdict::Suppress
            } else {
                Verdict::Pass
            }
        }
        _ => Verdict::Pass,
    }
}

/// Classify a context-menu request. Always suppressed.
#[must_use]
pub const fn inspect_context_menu() -> Verdict {
    Verdict::Suppress
}
