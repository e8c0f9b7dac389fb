// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Engine: an owned focus-navigation controller for remote-controlled surfaces.
//!
//! ## Overview
//!
//! This crate ties the pure pieces of the stack together into one object the
//! host drives: a [`Controller`] that turns key, pointer, and context-menu
//! events into navigation decisions, and an applier that executes those
//! decisions against the host.
//!
//! The engine never touches a real element tree. The host exposes its tree
//! through [`TargetSource`]: traversal of interactive elements, the
//! sidebar-ancestry test, the content container's left edge, and the current
//! focus (which the host owns; the engine only reads it per event and
//! requests writes). On every navigation key the engine rebuilds its
//! candidate snapshot from scratch, so element churn between key presses
//! needs no invalidation protocol.
//!
//! ## Workflow
//!
//! 1) Construct a [`Controller`] (optionally with an [`EngineConfig`]) and
//!    call [`Controller::activate`] once host listeners are registered.
//! 2) Feed events: [`Controller::on_key`] returns a [`KeyResponse`] carrying
//!    the default-suppression verdict and at most one [`NavAction`];
//!    [`Controller::on_pointer_activity`] and [`Controller::poll_idle`]
//!    return cursor-visibility transitions; [`Controller::on_context_menu`]
//!    returns the suppression verdict.
//! 3) Execute: [`apply`] runs a [`KeyResponse`] against an [`ActionHost`].
//!    Activation errors from the host pass through untouched; the engine
//!    neither retries nor masks them. Cursor transitions go straight to
//!    [`ActionHost::set_cursor`].
//! 4) Call [`Controller::deactivate`] before unregistering listeners; every
//!    entry point is a no-op afterwards and the cursor state is restored.
//!
//! ## Minimal example
//!
//! ```rust
//! use tenfoot_engine::{Controller, KeyCode, KeyPress, NavAction, TargetInfo, TargetKind, TargetSource};
//! use kurbo::Rect;
//!
//! struct Scene;
//!
//! impl TargetSource for Scene {
//!     type Key = u32;
//!
//!     fn visit_targets(&self, visit: &mut dyn FnMut(TargetInfo<u32>)) {
//!         visit(TargetInfo {
//!             key: 1,
//!             rect: Rect::new(10.0, 10.0, 90.0, 40.0),
//!             kind: TargetKind::Button,
//!             disabled: false,
//!             visible: true,
//!         });
//!     }
//!
//!     fn in_sidebar(&self, _key: u32) -> bool {
//!         true
//!     }
//!
//!     fn content_left(&self) -> f64 {
//!         120.0
//!     }
//!
//!     fn focused(&self) -> Option<u32> {
//!         None
//!     }
//! }
//!
//! let mut engine = Controller::new();
//! engine.activate(0);
//!
//! // Nothing is focused yet; the first directional press lands on the rail.
//! let response = engine.on_key(KeyPress::new(KeyCode::ArrowDown), &Scene);
//! assert!(response.suppress_default);
//! assert!(matches!(response.action, Some(NavAction::MoveFocus { target: 1, .. })));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds relying on `libm` for float math.
//! - `tracing`: structured diagnostics at lifecycle and routing points.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod apply;
mod controller;
mod registry;
mod types;

pub use apply::{ActionHost, apply};
pub use controller::{Controller, EngineConfig};
pub use registry::{Snapshot, collect};
pub use types::{KeyResponse, NavAction, TargetInfo, TargetKind, TargetSource};

// The vocabulary the engine speaks, re-exported so hosts depend on one crate.
pub use tenfoot_focus::{Decision, Direction, NavConfig, NavEntry, NavSpace, ScrollIntent, Zone};
pub use tenfoot_input::idle::CursorVisibility;
pub use tenfoot_input::guard::Verdict;
pub use tenfoot_input::{KeyCode, KeyPress, Modifiers};
