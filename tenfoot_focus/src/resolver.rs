// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial nearest-neighbor resolution.
//!
//! ## Algorithm
//!
//! 1. Restrict candidates to the requested zone, excluding the origin entry.
//! 2. Keep candidates whose center lies beyond the dead zone along the
//!    travel axis.
//! 3. Score each survivor: `euclidean_distance + alignment_weight × |off-axis|`.
//! 4. Return the candidate with the lowest score.
//!
//! ## Invariants
//!
//! - The origin entry is never returned.
//! - Equal scores resolve to the earliest candidate in snapshot order.
//! - No candidate beyond the dead zone in the travel direction means `None`.
//! - O(n) per call; the snapshot is rebuilt per event, so no index to keep
//!   coherent.

use kurbo::{Point, Vec2};

use crate::{Direction, NavConfig, NavSpace, Zone};

/// Find the best candidate in `zone` when travelling from `origin` in `dir`.
///
/// `exclude` is the currently focused entry's id; it is skipped so the
/// resolver can never hand focus back to where it already is. Returns `None`
/// when nothing lies beyond the dead zone in that direction; that is a valid
/// outcome, not an error.
#[must_use]
pub fn nearest_in_direction<K: Copy + Eq>(
    space: &NavSpace<'_, K>,
    zone: Zone,
    exclude: Option<K>,
    origin: Point,
    dir: Direction,
    config: &NavConfig,
) -> Option<K> {
    let mut best: Option<(K, f64)> = None;

    for entry in space.entries {
        if entry.zone != zone {
            continue;
        }
        if exclude.is_some_and(|k| entry.id == k) {
            continue;
        }

        let center = entry.rect.center();
        let dx = center.x - origin.x;
        let dy = center.y - origin.y;

        // Signed offset along the travel axis and the orthogonal offset.
        let (forward, off_axis) = match dir {
            Direction::Right => (dx, dy),
            Direction::Left => (-dx, dy),
            Direction::Down => (dy, dx),
            Direction::Up => (-dy, dx),
        };

        if forward <= config.dead_zone {
            continue;
        }

        let score = Vec2::new(dx, dy).hypot() + config.alignment_weight * off_axis.abs();
        if !score.is_finite() {
            continue;
        }

        // Strict comparison keeps ties on the earliest entry in snapshot order.
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((entry.id, score));
        }
    }

    best.map(|(id, _)| id)
}
