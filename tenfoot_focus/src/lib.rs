// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Focus: zone-aware directional focus policies.
//!
//! This crate decides where focus moves when the user presses a D-Pad
//! direction on a "10-foot" interface split into a persistent navigation
//! rail (the [`Zone::Sidebar`]) and a main scrollable area
//! ([`Zone::Content`]). It models the decision as pure functions over an
//! ephemeral snapshot of candidates:
//!
//! - [`NavEntry`] / [`NavSpace`] describe where focusable elements live in
//!   viewport coordinates and which zone each belongs to.
//! - [`nearest_in_direction`] is the spatial nearest-neighbor resolver:
//!   given an origin point and a direction, it selects the best candidate
//!   using Euclidean distance plus an off-axis alignment penalty.
//! - [`route`] is the zone rule table: list traversal with wrap-around
//!   inside the rail, spatial resolution inside the content area, and the
//!   two cross-zone rules connecting them.
//!
//! Callers rebuild the [`NavSpace`] from the live element tree on every
//! key press; nothing here caches geometry between events.
//!
//! ## Minimal example
//!
//! A rail item jumping into a content row:
//!
//! ```rust
//! use kurbo::Rect;
//! use tenfoot_focus::{Direction, NavConfig, NavEntry, NavSpace, Zone, route};
//!
//! let entries = vec![
//!     NavEntry {
//!         id: 1_u32,
//!         rect: Rect::new(0.0, 0.0, 80.0, 40.0),
//!         zone: Zone::Sidebar,
//!     },
//!     NavEntry {
//!         id: 2_u32,
//!         rect: Rect::new(120.0, 200.0, 280.0, 290.0),
//!         zone: Zone::Content,
//!     },
//! ];
//! let space = NavSpace { entries: &entries };
//!
//! // Right from the rail always lands on the first content entry.
//! let decision = route(&space, Some(1), Direction::Right, 100.0, &NavConfig::default());
//! assert_eq!(decision.map(|d| d.target), Some(2));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::Rect;

mod resolver;
mod router;

pub use resolver::nearest_in_direction;
pub use router::{Decision, ScrollIntent, route};

/// Direction of a D-Pad navigation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move focus upward.
    Up,
    /// Move focus downward.
    Down,
    /// Move focus toward the left edge.
    Left,
    /// Move focus toward the right edge.
    Right,
}

impl Direction {
    /// All four directions, in a fixed order useful for exhaustive tests.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

/// Partition of the interface a candidate belongs to.
///
/// Zone membership is derived from container ancestry by the host on every
/// event; it is never persisted between key presses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The persistent navigation rail along the left edge.
    Sidebar,
    /// The main scrollable area; everything outside the rail.
    Content,
}

/// Tuning parameters for directional resolution and zone routing.
///
/// The defaults match the behavior this crate was built around: a 10 px
/// dead zone, a 100 px edge-proximity band for the content→rail hop, and an
/// off-axis penalty of twice the orthogonal offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavConfig {
    /// Minimum center-to-center offset along the travel axis for a candidate
    /// to count as lying in that direction. Excludes near-colinear overlaps.
    pub dead_zone: f64,
    /// Maximum distance between a focused content entry's left edge and the
    /// content container's left edge for a Left press to attempt the rail.
    pub edge_proximity: f64,
    /// Weight applied to the orthogonal offset when scoring candidates.
    /// Higher values favor aligned-but-farther candidates over diagonal ones.
    pub alignment_weight: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            dead_zone: 10.0,
            edge_proximity: 100.0,
            alignment_weight: 2.0,
        }
    }
}

/// A single focus candidate within a [`NavSpace`].
///
/// Entries are ephemeral: the host constructs them fresh for each navigation
/// event and discards them afterwards, so a mutated element tree can never
/// leak stale geometry into a later decision.
#[derive(Clone, Debug)]
pub struct NavEntry<K> {
    /// Host-side identifier for the underlying element.
    pub id: K,
    /// Bounding rectangle in viewport coordinates.
    pub rect: Rect,
    /// Zone the element belongs to, per the host's ancestry test.
    pub zone: Zone,
}

/// A read-only snapshot of focus candidates for one navigation event.
///
/// Entries appear in traversal order of the underlying element tree; both
/// the router's list rules and the resolver's tie-break depend on that
/// order being preserved.
#[derive(Clone, Debug)]
pub struct NavSpace<'a, K> {
    /// Candidates eligible for focus during this event.
    pub entries: &'a [NavEntry<K>],
}

impl<K: Copy + Eq> NavSpace<'_, K> {
    /// Returns the entry for `id`, if it is still part of the snapshot.
    #[must_use]
    pub fn entry(&self, id: K) -> Option<&NavEntry<K>> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns the first entry belonging to `zone`, in traversal order.
    #[must_use]
    pub fn first_in_zone(&self, zone: Zone) -> Option<&NavEntry<K>> {
        self.entries.iter().find(|e| e.zone == zone)
    }
}
