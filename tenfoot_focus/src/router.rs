// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone routing rule table.
//!
//! ## Overview
//!
//! The router picks the rule for a navigation step from the zone of the
//! currently focused entry:
//!
//! - Inside the rail, Up/Down walk the rail in traversal order and wrap at
//!   both ends; Right jumps to the first content entry; Left is a no-op.
//! - Inside the content area, every direction resolves spatially among
//!   content entries, except that a Left press near the content container's
//!   left edge first attempts the rail.
//! - With nothing focused (or a focused id that no longer resolves in the
//!   fresh snapshot), any direction lands on the default entry: the first
//!   rail entry, else the first entry overall.
//!
//! The router is pure and returns at most one [`Decision`]. Applying it,
//! and suppressing the host's default scroll regardless of the outcome, is
//! the caller's job.

use alloc::vec::Vec;

use crate::{Direction, NavConfig, NavSpace, Zone, resolver::nearest_in_direction};

/// How the host should bring a newly focused element on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollIntent {
    /// Scroll the element into the nearest visible position.
    IntoView,
    /// No scrolling required; the target lives in a fixed-position region.
    Fixed,
}

/// A routing outcome: which entry receives focus and whether to scroll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decision<K> {
    /// Entry that should receive focus.
    pub target: K,
    /// Scrolling the host should perform after moving focus.
    pub scroll: ScrollIntent,
}

/// Route one directional step through the zone rule table.
///
/// `focused` is the host's current focus, re-read for this event; a stale id
/// that is absent from `space` is treated the same as no focus at all, which
/// is how disappearance of the focused element is detected. `content_left`
/// is the content container's left edge in viewport coordinates.
///
/// Returns `None` when the step has no target (rail + Left, or no spatial
/// candidate in the direction of travel). That is a valid terminal outcome;
/// focus stays where it is.
#[must_use]
pub fn route<K: Copy + Eq>(
    space: &NavSpace<'_, K>,
    focused: Option<K>,
    dir: Direction,
    content_left: f64,
    config: &NavConfig,
) -> Option<Decision<K>> {
    if space.entries.is_empty() {
        return None;
    }

    let Some(current) = focused.and_then(|k| space.entry(k)) else {
        return default_entry(space);
    };

    match current.zone {
        Zone::Sidebar => match dir {
            Direction::Right => space.first_in_zone(Zone::Content).map(|e| Decision {
                target: e.id,
                scroll: ScrollIntent::IntoView,
            }),
            Direction::Down => rail_step(space, current.id, 1),
            Direction::Up => rail_step(space, current.id, -1),
            Direction::Left => None,
        },
        Zone::Content => {
            let origin = current.rect.center();
            if dir == Direction::Left && current.rect.x0 - content_left < config.edge_proximity {
                if let Some(target) = nearest_in_direction(
                    space,
                    Zone::Sidebar,
                    Some(current.id),
                    origin,
                    dir,
                    config,
                ) {
                    // The rail is fixed-position; no scrolling needed.
                    return Some(Decision {
                        target,
                        scroll: ScrollIntent::Fixed,
                    });
                }
            }
            nearest_in_direction(space, Zone::Content, Some(current.id), origin, dir, config).map(
                |target| Decision {
                    target,
                    scroll: ScrollIntent::IntoView,
                },
            )
        }
    }
}

/// Default entry when nothing holds focus: the first rail entry anchors the
/// session on the persistent navigation column, else the first entry at all.
fn default_entry<K: Copy + Eq>(space: &NavSpace<'_, K>) -> Option<Decision<K>> {
    space
        .first_in_zone(Zone::Sidebar)
        .or_else(|| space.entries.first())
        .map(|e| Decision {
            target: e.id,
            scroll: ScrollIntent::IntoView,
        })
}

/// Step through the rail in traversal order, wrapping at both ends.
fn rail_step<K: Copy + Eq>(space: &NavSpace<'_, K>, current: K, step: isize) -> Option<Decision<K>> {
    let rail: Vec<K> = space
        .entries
        .iter()
        .filter(|e| e.zone == Zone::Sidebar)
        .map(|e| e.id)
        .collect();
    let pos = rail.iter().position(|&k| k == current)?;
    let next = (pos as isize + step).rem_euclid(rail.len() as isize) as usize;
    let target = rail[next];

    // A single-entry rail wraps onto itself; report no movement instead.
    (target != current).then_some(Decision {
        target,
        scroll: ScrollIntent::IntoView,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NavEntry;
    use alloc::vec;
    use kurbo::Rect;

    const CONTENT_LEFT: f64 = 120.0;

    /// Rail of three items plus a 3×2 content grid:
    ///
    /// ```text
    ///  | 1 |   [10] [11] [12]
    ///  | 2 |
    ///  | 3 |   [20] [21] [22]
    /// ```
    fn shelf() -> Vec<NavEntry<u32>> {
        let mut entries = vec![];
        for (i, y) in [40.0, 80.0, 120.0].into_iter().enumerate() {
            entries.push(NavEntry {
                id: (i + 1) as u32,
                rect: Rect::new(10.0, y, 90.0, y + 30.0),
                zone: Zone::Sidebar,
            });
        }
        for row in 0..2u32 {
            for col in 0..3u32 {
                let x = 140.0 + f64::from(col) * 110.0;
                let y = 40.0 + f64::from(row) * 100.0;
                entries.push(NavEntry {
                    id: 10 + row * 10 + col,
                    rect: Rect::new(x, y, x + 90.0, y + 60.0),
                    zone: Zone::Content,
                });
            }
        }
        entries
    }

    fn route_shelf(focused: Option<u32>, dir: Direction) -> Option<Decision<u32>> {
        let entries = shelf();
        let space = NavSpace { entries: &entries };
        route(&space, focused, dir, CONTENT_LEFT, &NavConfig::default())
    }

    // --- Rail rules ---

    #[test]
    fn rail_right_jumps_to_first_content_entry() {
        // Regardless of vertical alignment, every rail item lands on 10.
        for id in [1, 2, 3] {
            let d = route_shelf(Some(id), Direction::Right).unwrap();
            assert_eq!(d.target, 10);
            assert_eq!(d.scroll, ScrollIntent::IntoView);
        }
    }

    #[test]
    fn rail_wraps_both_ways() {
        assert_eq!(
            route_shelf(Some(3), Direction::Down).map(|d| d.target),
            Some(1)
        );
        assert_eq!(
            route_shelf(Some(1), Direction::Up).map(|d| d.target),
            Some(3)
        );
        assert_eq!(
            route_shelf(Some(1), Direction::Down).map(|d| d.target),
            Some(2)
        );
    }

    #[test]
    fn rail_left_is_a_no_op() {
        assert_eq!(route_shelf(Some(2), Direction::Left), None);
    }

    #[test]
    fn single_entry_rail_does_not_move() {
        let entries = vec![NavEntry {
            id: 1_u32,
            rect: Rect::new(10.0, 40.0, 90.0, 70.0),
            zone: Zone::Sidebar,
        }];
        let space = NavSpace { entries: &entries };
        let cfg = NavConfig::default();
        assert_eq!(route(&space, Some(1), Direction::Down, CONTENT_LEFT, &cfg), None);
        assert_eq!(route(&space, Some(1), Direction::Up, CONTENT_LEFT, &cfg), None);
    }

    // --- Content rules ---

    #[test]
    fn content_moves_spatially_within_zone() {
        assert_eq!(
            route_shelf(Some(10), Direction::Right).map(|d| d.target),
            Some(11)
        );
        assert_eq!(
            route_shelf(Some(11), Direction::Down).map(|d| d.target),
            Some(21)
        );
        assert_eq!(
            route_shelf(Some(21), Direction::Up).map(|d| d.target),
            Some(11)
        );
    }

    #[test]
    fn left_near_edge_hops_to_rail_without_scroll() {
        // Entry 10's left edge is 140.0, i.e. 20 px inside the content area.
        let d = route_shelf(Some(10), Direction::Left).unwrap();
        assert_eq!(d.target, 1);
        assert_eq!(d.scroll, ScrollIntent::Fixed);
    }

    #[test]
    fn left_far_from_edge_stays_in_content() {
        // Entry 11 sits 130 px past the edge; Left must only consider content.
        assert_eq!(
            route_shelf(Some(11), Direction::Left).map(|d| d.target),
            Some(10)
        );
    }

    #[test]
    fn left_far_from_edge_without_content_target_does_not_fall_through() {
        // A lone content entry far from the edge: Left finds no content
        // candidate and must not reach for the rail.
        let entries = vec![
            NavEntry {
                id: 1_u32,
                rect: Rect::new(10.0, 40.0, 90.0, 70.0),
                zone: Zone::Sidebar,
            },
            NavEntry {
                id: 10,
                rect: Rect::new(400.0, 40.0, 490.0, 100.0),
                zone: Zone::Content,
            },
        ];
        let space = NavSpace { entries: &entries };
        let out = route(
            &space,
            Some(10),
            Direction::Left,
            CONTENT_LEFT,
            &NavConfig::default(),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn left_near_edge_falls_through_to_content_when_rail_is_empty() {
        // No rail entries at all: the near-edge Left press degrades to the
        // ordinary content rule.
        let entries = vec![
            NavEntry {
                id: 10_u32,
                rect: Rect::new(140.0, 40.0, 230.0, 100.0),
                zone: Zone::Content,
            },
            NavEntry {
                id: 11,
                rect: Rect::new(140.0, 140.0, 230.0, 200.0),
                zone: Zone::Content,
            },
        ];
        let space = NavSpace { entries: &entries };
        let out = route(
            &space,
            Some(11),
            Direction::Up,
            CONTENT_LEFT,
            &NavConfig::default(),
        );
        assert_eq!(out.map(|d| d.target), Some(10));
        let left = route(
            &space,
            Some(10),
            Direction::Left,
            CONTENT_LEFT,
            &NavConfig::default(),
        );
        assert_eq!(left, None);
    }

    #[test]
    fn no_candidate_in_direction_leaves_focus_unchanged() {
        // 12 is the rightmost content entry of its row.
        assert_eq!(route_shelf(Some(12), Direction::Right), None);
    }

    // --- Entry policy ---

    #[test]
    fn no_focus_lands_on_first_rail_entry() {
        for dir in Direction::ALL {
            let d = route_shelf(None, dir).unwrap();
            assert_eq!(d.target, 1);
        }
    }

    #[test]
    fn no_focus_without_rail_lands_on_first_entry() {
        let entries: Vec<NavEntry<u32>> = shelf()
            .into_iter()
            .filter(|e| e.zone == Zone::Content)
            .collect();
        let space = NavSpace { entries: &entries };
        let d = route(
            &space,
            None,
            Direction::Down,
            CONTENT_LEFT,
            &NavConfig::default(),
        )
        .unwrap();
        assert_eq!(d.target, 10);
    }

    #[test]
    fn stale_focus_recovers_via_entry_policy() {
        // Id 99 was focused but no longer appears in the fresh snapshot.
        let d = route_shelf(Some(99), Direction::Down).unwrap();
        assert_eq!(d.target, 1);
    }

    #[test]
    fn empty_space_routes_nowhere() {
        let entries: Vec<NavEntry<u32>> = Vec::new();
        let space = NavSpace { entries: &entries };
        assert_eq!(
            route(
                &space,
                None,
                Direction::Down,
                CONTENT_LEFT,
                &NavConfig::default()
            ),
            None
        );
    }

    // --- Determinism ---

    #[test]
    fn routing_is_deterministic() {
        for _ in 0..50 {
            for id in [1, 2, 3, 10, 11, 12, 20, 21, 22] {
                for dir in Direction::ALL {
                    assert_eq!(
                        route_shelf(Some(id), dir),
                        route_shelf(Some(id), dir),
                        "routing diverged for id={id}, dir={dir:?}"
                    );
                }
            }
        }
    }
}
