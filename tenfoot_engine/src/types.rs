// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability traits and the engine's outward-facing value types.

use kurbo::Rect;
use tenfoot_focus::ScrollIntent;

/// What kind of interactive element a target is.
///
/// Native controls are focusable on their own merits; anything else joins
/// the registry only when the host explicitly tags it navigable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Explicitly tagged navigable by the host, whatever the element is.
    Tagged,
    /// A native button control.
    Button,
    /// A native link with a destination.
    Link,
    /// A native text input.
    TextInput,
    /// A native select / dropdown control.
    Select,
}

impl TargetKind {
    /// True for the native interactive controls.
    #[must_use]
    pub const fn is_native_control(self) -> bool {
        !matches!(self, Self::Tagged)
    }
}

/// Raw description of one interactive element, supplied by the host during
/// traversal. The registry filters these down to focus candidates.
#[derive(Copy, Clone, Debug)]
pub struct TargetInfo<K> {
    /// Host-side identifier for the element.
    pub key: K,
    /// Bounding rectangle in viewport coordinates.
    pub rect: Rect,
    /// Element kind, deciding which eligibility rule applies.
    pub kind: TargetKind,
    /// Host's disabled predicate. Disabled native controls are skipped;
    /// tagged elements are included regardless.
    pub disabled: bool,
    /// Host's visibility predicate (rendered, not display-suppressed by an
    /// ancestor).
    pub visible: bool,
}

/// The host's live view of its interactive element tree.
///
/// Implementations bridge to the real rendering layer; tests implement it
/// over synthetic scenes. All answers describe the tree *now*: the engine
/// re-asks on every navigation event and caches nothing.
pub trait TargetSource {
    /// Identifier for elements; small and copyable.
    type Key: Copy + Eq;

    /// Visit every interactive element in traversal order of the tree.
    fn visit_targets(&self, visit: &mut dyn FnMut(TargetInfo<Self::Key>));

    /// Whether `key`'s element is a descendant of the designated sidebar
    /// container.
    fn in_sidebar(&self, key: Self::Key) -> bool;

    /// Left edge of the designated content container in viewport
    /// coordinates, for the edge-proximity rule.
    fn content_left(&self) -> f64;

    /// The element currently holding focus. Focus is owned by the host;
    /// the engine reads it once per event.
    fn focused(&self) -> Option<Self::Key>;
}

/// One navigation decision for the host to carry out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction<K> {
    /// Move focus to `target`, scrolling per `scroll`.
    MoveFocus {
        /// Element to focus.
        target: K,
        /// Whether to scroll it into view.
        scroll: ScrollIntent,
    },
    /// Trigger primary activation on `target`, as if clicked.
    Activate(K),
}

/// The engine's answer to one key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyResponse<K> {
    /// Cancel the host's default handling of this key (arrow-key scrolling,
    /// developer-tools chords). Reported independently of whether an action
    /// was produced.
    pub suppress_default: bool,
    /// At most one decision to apply. `None` is a valid terminal outcome,
    /// not an error.
    pub action: Option<NavAction<K>>,
}

impl<K> KeyResponse<K> {
    /// Let the key through untouched.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            suppress_default: false,
            action: None,
        }
    }

    /// Cancel the default with no further action.
    #[must_use]
    pub const fn suppress() -> Self {
        Self {
            suppress_default: true,
            action: None,
        }
    }
}
