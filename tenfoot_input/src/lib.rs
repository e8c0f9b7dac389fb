// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Input: input vocabulary and hygiene for remote-controlled surfaces.
//!
//! Three small pieces, each usable on its own:
//!
//! - [`KeyPress`] / [`KeyCode`] / [`Modifiers`]: the key-event vocabulary the
//!   rest of the stack consumes. Hosts translate their native key events into
//!   these values.
//! - [`guard`]: verdicts for environment hygiene: suppressing context menus
//!   and the developer-tools key chords a kiosk-style surface must not leak.
//! - [`idle::IdleCursor`]: a deadline-driven state machine that hides the
//!   pointer cursor after a period of inactivity and restores it on any
//!   pointer or touch activity.
//!
//! Everything is driven by host-supplied `u64` millisecond timestamps; there
//! are no internal timers or threads. The host asks [`idle::IdleCursor::deadline`]
//! when to check back and calls [`idle::IdleCursor::poll`] when it does.
//!
//! This crate is `no_std`.

#![no_std]

pub mod guard;
pub mod idle;

mod key;

pub use key::{KeyCode, KeyPress, Modifiers};
