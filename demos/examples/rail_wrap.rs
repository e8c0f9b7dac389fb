// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure policy layer on its own: routing over synthetic entries.
//!
//! No controller, no host traits, just a candidate snapshot and the zone
//! rule table. Useful as a playground for tuning `NavConfig`.
//!
//! Run:
//! - `cargo run -p tenfoot_demos --example rail_wrap`

use kurbo::Rect;
use tenfoot_focus::{Direction, NavConfig, NavEntry, NavSpace, Zone, route};

fn main() {
    let entries: Vec<NavEntry<&'static str>> = vec![
        NavEntry {
            id: "home",
            rect: Rect::new(20.0, 80.0, 180.0, 120.0),
            zone: Zone::Sidebar,
        },
        NavEntry {
            id: "movies",
            rect: Rect::new(20.0, 140.0, 180.0, 180.0),
            zone: Zone::Sidebar,
        },
        NavEntry {
            id: "hero",
            rect: Rect::new(240.0, 100.0, 640.0, 320.0),
            zone: Zone::Content,
        },
        NavEntry {
            id: "card",
            rect: Rect::new(240.0, 360.0, 410.0, 480.0),
            zone: Zone::Content,
        },
    ];
    let space = NavSpace { entries: &entries };
    let config = NavConfig::default();
    let content_left = 220.0;

    // Wrap off both ends of the rail.
    let mut focus = Some("movies");
    for dir in [Direction::Down, Direction::Down, Direction::Up] {
        match route(&space, focus, dir, content_left, &config) {
            Some(d) => {
                println!("{dir:?}: {:?} -> {:?}", focus.unwrap_or("-"), d.target);
                focus = Some(d.target);
            }
            None => println!("{dir:?}: no target"),
        }
    }

    // Jump into content, then back to the rail across the left edge.
    for dir in [Direction::Right, Direction::Down, Direction::Left] {
        match route(&space, focus, dir, content_left, &config) {
            Some(d) => {
                println!("{dir:?}: {:?} -> {:?} ({:?})", focus.unwrap_or("-"), d.target, d.scroll);
                focus = Some(d.target);
            }
            None => println!("{dir:?}: no target"),
        }
    }
}
