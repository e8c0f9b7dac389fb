// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action applier: execute engine decisions against the host.
//!
//! The controller computes; the host executes. [`apply`] walks a
//! [`KeyResponse`] and calls the matching [`ActionHost`] operation. The one
//! fallible operation is activation: whatever the activated element does is
//! the host's business, and its error is returned verbatim rather than
//! swallowed or masked here. A response without an action applies cleanly as
//! a no-op.
//!
//! Cursor-visibility transitions returned by the controller's pointer and
//! poll entry points go straight to [`ActionHost::set_cursor`]; they carry
//! no target and need no routing.

use tenfoot_focus::ScrollIntent;
use tenfoot_input::idle::CursorVisibility;

use crate::types::{KeyResponse, NavAction};

/// Host-side executor for engine decisions.
///
/// Implementations bridge to the real rendering layer: moving the host's
/// focus (and scrolling), triggering primary activation, and setting or
/// clearing the global cursor style.
pub trait ActionHost<K> {
    /// Error raised by an activated element, passed through untouched.
    type Error;

    /// Move the host's focus to `target`, scrolling per `scroll`.
    fn move_focus(&mut self, target: K, scroll: ScrollIntent);

    /// Trigger primary activation on `target`, as if clicked.
    ///
    /// # Errors
    ///
    /// Whatever the activated element raises; the engine does not interpret it.
    fn activate(&mut self, target: K) -> Result<(), Self::Error>;

    /// Apply a cursor-visibility change.
    fn set_cursor(&mut self, visibility: CursorVisibility);
}

/// Execute one key response against `host`.
///
/// # Errors
///
/// Returns the host's activation error unchanged when the response carries
/// an [`NavAction::Activate`] and the element fails.
pub fn apply<K: Copy, H: ActionHost<K>>(
    response: &KeyResponse<K>,
    host: &mut H,
) -> Result<(), H::Error> {
    match response.action {
        Some(NavAction::MoveFocus { target, scroll }) => {
            host.move_focus(target, scroll);
            Ok(())
        }
        Some(NavAction::Activate(target)) => host.activate(target),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        moves: Vec<(u32, ScrollIntent)>,
        activations: Vec<u32>,
        cursor: Vec<CursorVisibility>,
        fail_activation: bool,
    }

    impl ActionHost<u32> for Recorder {
        type Error = &'static str;

        fn move_focus(&mut self, target: u32, scroll: ScrollIntent) {
            self.moves.push((target, scroll));
        }

        fn activate(&mut self, target: u32) -> Result<(), Self::Error> {
            if self.fail_activation {
                return Err("player refused to start");
            }
            self.activations.push(target);
            Ok(())
        }

        fn set_cursor(&mut self, visibility: CursorVisibility) {
            self.cursor.push(visibility);
        }
    }

    #[test]
    fn move_focus_reaches_the_host() {
        let mut host = Recorder::default();
        let response = KeyResponse {
            suppress_default: true,
            action: Some(NavAction::MoveFocus {
                target: 7,
                scroll: ScrollIntent::IntoView,
            }),
        };
        apply(&response, &mut host).unwrap();
        assert_eq!(host.moves, [(7, ScrollIntent::IntoView)]);
        assert!(host.activations.is_empty());
    }

    #[test]
    fn activation_reaches_the_host() {
        let mut host = Recorder::default();
        let response = KeyResponse {
            suppress_default: false,
            action: Some(NavAction::Activate(3)),
        };
        apply(&response, &mut host).unwrap();
        assert_eq!(host.activations, [3]);
    }

    #[test]
    fn activation_errors_pass_through_unchanged() {
        let mut host = Recorder {
            fail_activation: true,
            ..Recorder::default()
        };
        let response = KeyResponse {
            suppress_default: false,
            action: Some(NavAction::Activate(3)),
        };
        assert_eq!(apply(&response, &mut host), Err("player refused to start"));
    }

    #[test]
    fn empty_response_applies_cleanly() {
        let mut host = Recorder::default();
        apply(&KeyResponse::<u32>::suppress(), &mut host).unwrap();
        assert!(host.moves.is_empty());
        assert!(host.activations.is_empty());
        assert!(host.cursor.is_empty());
    }
}
