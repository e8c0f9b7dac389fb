// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine controller: lifecycle, event entry points, decision making.

use tenfoot_focus::{Direction, NavConfig, NavSpace, route};
use tenfoot_input::guard::{self, Verdict};
use tenfoot_input::idle::{CursorVisibility, IdleCursor};
use tenfoot_input::{KeyCode, KeyPress};

use crate::registry;
use crate::types::{KeyResponse, NavAction, TargetSource};

/// Engine-wide configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Tuning for the resolver and router.
    pub nav: NavConfig,
    /// Inactivity window before the pointer cursor is hidden, milliseconds.
    pub idle_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            idle_timeout_ms: IdleCursor::DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Owned focus-navigation controller.
///
/// Holds the engine's entire mutable state: the active flag and the
/// idle-cursor machine. Everything armed by [`Controller::activate`] is
/// released by [`Controller::deactivate`]; after deactivation every entry
/// point is a no-op, so a host that tears down out of order cannot leak a
/// hidden cursor or a stale deadline. There is no ambient state anywhere;
/// two controllers on one page would not interfere.
///
/// Focus itself lives in the host (see [`TargetSource::focused`]); the
/// controller reads it once per event and requests writes through
/// [`NavAction`] values.
#[derive(Clone, Debug)]
pub struct Controller {
    config: EngineConfig,
    idle: IdleCursor,
    active: bool,
}

impl Controller {
    /// Controller with default configuration, inactive.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Controller with explicit configuration, inactive.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            idle: IdleCursor::with_timeout(config.idle_timeout_ms),
            active: false,
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True between [`Controller::activate`] and [`Controller::deactivate`].
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Start processing events; arms the idle-cursor window at `now`.
    ///
    /// Idempotent: activating an active controller leaves the pending
    /// window untouched.
    pub fn activate(&mut self, now: u64) {
        if self.active {
            return;
        }
        self.active = true;
        self.idle.arm(now);
        #[cfg(feature = "tracing")]
        tracing::debug!(now, "navigation engine activated");
    }

    /// Stop processing events and release everything activation armed.
    ///
    /// Returns the cursor transition the host must apply if the cursor was
    /// hidden at teardown. Idempotent.
    pub fn deactivate(&mut self) -> Option<CursorVisibility> {
        if !self.active {
            return None;
        }
        self.active = false;
        #[cfg(feature = "tracing")]
        tracing::debug!("navigation engine deactivated");
        self.idle.disarm()
    }

    /// Process one key press against the host's current tree state.
    ///
    /// Order of business: developer-tools chords are suppressed first;
    /// Enter activates the host's focused element (the registry is not
    /// consulted, and nothing focused is a quiet no-op); arrows rebuild the
    /// candidate snapshot, route through the zone rules, and always request
    /// default-scroll suppression whether or not a target was found. Any
    /// other key passes through untouched.
    #[must_use]
    pub fn on_key<S: TargetSource>(&self, key: KeyPress, source: &S) -> KeyResponse<S::Key> {
        if !self.active {
            return KeyResponse::pass();
        }
        if guard::inspect_key(&key).is_suppressed() {
            return KeyResponse::suppress();
        }

        match key.code {
            KeyCode::Enter => KeyResponse {
                suppress_default: false,
                action: source.focused().map(NavAction::Activate),
            },
            _ => match direction_of(key.code) {
                Some(dir) => {
                    let snapshot = registry::collect(source);
                    let space = NavSpace {
                        entries: snapshot.as_slice(),
                    };
                    let decision = route(
                        &space,
                        source.focused(),
                        dir,
                        source.content_left(),
                        &self.config.nav,
                    );
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        ?dir,
                        candidates = snapshot.len(),
                        moved = decision.is_some(),
                        "directional step routed"
                    );
                    KeyResponse {
                        suppress_default: true,
                        action: decision.map(|d| NavAction::MoveFocus {
                            target: d.target,
                            scroll: d.scroll,
                        }),
                    }
                }
                None => KeyResponse::pass(),
            },
        }
    }

    /// Record pointer movement or touch-start activity at `now`.
    ///
    /// Returns the cursor transition to apply, if visibility changed.
    pub fn on_pointer_activity(&mut self, now: u64) -> Option<CursorVisibility> {
        if !self.active {
            return None;
        }
        self.idle.on_activity(now)
    }

    /// Verdict for a context-menu request. Suppressed while active.
    #[must_use]
    pub fn on_context_menu(&self) -> Verdict {
        if self.active {
            guard::inspect_context_menu()
        } else {
            Verdict::Pass
        }
    }

    /// Check the idle window at `now`, returning the hide transition when
    /// it has elapsed.
    pub fn poll_idle(&mut self, now: u64) -> Option<CursorVisibility> {
        if !self.active {
            return None;
        }
        self.idle.poll(now)
    }

    /// When the host should next call [`Controller::poll_idle`].
    #[must_use]
    pub const fn idle_deadline(&self) -> Option<u64> {
        self.idle.deadline()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a key to its D-Pad direction, if it has one.
const fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}
