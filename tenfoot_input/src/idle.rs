// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Idle-cursor state machine.
//!
//! On a remote-controlled surface the pointer cursor is noise: it should
//! vanish once the user stops moving it and reappear the moment they do.
//! [`IdleCursor`] tracks {Visible, Hidden} against a host-supplied
//! millisecond clock:
//!
//! - [`IdleCursor::arm`] at engine activation starts a fresh inactivity
//!   window in the Visible state.
//! - [`IdleCursor::on_activity`] on any pointer move or touch start forces
//!   Visible and restarts the window.
//! - [`IdleCursor::poll`] transitions Visible → Hidden once the window
//!   elapses. Hosts learn when to call it from [`IdleCursor::deadline`].
//! - [`IdleCursor::disarm`] at engine deactivation cancels the pending
//!   window and restores the default Visible state.
//!
//! Transitions are reported only when visibility actually changes, so the
//! host touches its global cursor style at most once per change. The
//! machine holds deadlines, not timers; it never blocks and never affects
//! navigation decisions.

/// Pointer-cursor visibility requested from the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CursorVisibility {
    /// The default cursor style; nothing forced.
    Visible,
    /// Cursor forced invisible.
    Hidden,
}

/// Deadline-driven visible/hidden cursor state.
#[derive(Clone, Debug)]
pub struct IdleCursor {
    timeout_ms: u64,
    armed: bool,
    /// Pending expiry. Consumed by the hide transition; activity re-creates it.
    deadline: Option<u64>,
    visibility: CursorVisibility,
}

impl IdleCursor {
    /// Inactivity window applied by [`IdleCursor::new`], in milliseconds.
    pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

    /// Create an unarmed monitor with the default 3000 ms window.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_timeout(Self::DEFAULT_TIMEOUT_MS)
    }

    /// Create an unarmed monitor with a custom inactivity window.
    #[must_use]
    pub const fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            armed: false,
            deadline: None,
            visibility: CursorVisibility::Visible,
        }
    }

    /// Start tracking inactivity from `now`. The cursor starts Visible.
    pub fn arm(&mut self, now: u64) {
        self.armed = true;
        self.visibility = CursorVisibility::Visible;
        self.deadline = Some(now + self.timeout_ms);
    }

    /// Record pointer or touch activity at `now`.
    ///
    /// Restarts the inactivity window and returns
    /// `Some(CursorVisibility::Visible)` if the cursor was hidden and must
    /// be restored. Ignored while unarmed.
    pub fn on_activity(&mut self, now: u64) -> Option<CursorVisibility> {
        if !self.armed {
            return None;
        }
        self.deadline = Some(now + self.timeout_ms);
        let was = self.visibility;
        self.visibility = CursorVisibility::Visible;
        (was == CursorVisibility::Hidden).then_some(CursorVisibility::Visible)
    }

    /// Check the deadline at `now`.
    ///
    /// Returns `Some(CursorVisibility::Hidden)` when the inactivity window
    /// has elapsed while visible. The deadline is consumed; the machine
    /// stays Hidden until the next activity.
    pub fn poll(&mut self, now: u64) -> Option<CursorVisibility> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        if self.visibility == CursorVisibility::Hidden {
            return None;
        }
        self.visibility = CursorVisibility::Hidden;
        Some(CursorVisibility::Hidden)
    }

    /// Stop tracking and restore the default cursor state.
    ///
    /// Returns `Some(CursorVisibility::Visible)` if the cursor was hidden
    /// and the host must clear its forced style.
    pub fn disarm(&mut self) -> Option<CursorVisibility> {
        self.armed = false;
        self.deadline = None;
        let was = self.visibility;
        self.visibility = CursorVisibility::Visible;
        (was == CursorVisibility::Hidden).then_some(CursorVisibility::Visible)
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> CursorVisibility {
        self.visibility
    }

    /// Pending expiry timestamp, if armed and not yet hidden.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// True between [`IdleCursor::arm`] and [`IdleCursor::disarm`].
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for IdleCursor {
    fn default() -> Self {
        Self::new()
    }
}
