// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted remote-control session over a synthetic TV page.
//!
//! This example shows the full loop with no real UI attached:
//! - a `Page` implementing `TargetSource` (the engine's view of the tree)
//!   and `ActionHost` (the executor for its decisions),
//! - a `Controller` routing D-Pad presses across a sidebar rail and a
//!   content grid,
//! - the idle-cursor machine hiding and restoring the pointer.
//!
//! Run:
//! - `cargo run -p tenfoot_demos --example tv_shelf`

use kurbo::Rect;
use tenfoot_engine::{
    ActionHost, Controller, CursorVisibility, KeyCode, KeyPress, ScrollIntent, TargetInfo,
    TargetKind, TargetSource, apply,
};

/// One interactive element on the page.
struct Item {
    name: &'static str,
    rect: Rect,
    kind: TargetKind,
    sidebar: bool,
}

/// A sidebar rail plus two rows of content cards. Focus lives here, the way
/// a real rendering layer owns its focus state.
struct Page {
    items: Vec<Item>,
    focused: Option<usize>,
}

impl Page {
    fn new() -> Self {
        let mut items = vec![];
        for (i, name) in ["Home", "Movies", "Series", "Settings"].into_iter().enumerate() {
            let y = 80.0 + (i as f64) * 60.0;
            items.push(Item {
                name,
                rect: Rect::new(20.0, y, 180.0, y + 40.0),
                kind: TargetKind::Button,
                sidebar: true,
            });
        }
        let titles = [
            ["Solar Winds", "The Long Rain", "Night Ferry"],
            ["Paper Town", "Ashfall", "Second Orbit"],
        ];
        for (row, row_titles) in titles.into_iter().enumerate() {
            for (col, name) in row_titles.into_iter().enumerate() {
                let x = 240.0 + (col as f64) * 200.0;
                let y = 100.0 + (row as f64) * 180.0;
                items.push(Item {
                    name,
                    rect: Rect::new(x, y, x + 170.0, y + 120.0),
                    kind: TargetKind::Tagged,
                    sidebar: false,
                });
            }
        }
        Self {
            items,
            focused: None,
        }
    }

    fn name_of(&self, key: usize) -> &'static str {
        self.items[key].name
    }
}

impl TargetSource for Page {
    type Key = usize;

    fn visit_targets(&self, visit: &mut dyn FnMut(TargetInfo<usize>)) {
        for (key, item) in self.items.iter().enumerate() {
            visit(TargetInfo {
                key,
                rect: item.rect,
                kind: item.kind,
                disabled: false,
                visible: true,
            });
        }
    }

    fn in_sidebar(&self, key: usize) -> bool {
        self.items[key].sidebar
    }

    fn content_left(&self) -> f64 {
        220.0
    }

    fn focused(&self) -> Option<usize> {
        self.focused
    }
}

impl ActionHost<usize> for Page {
    type Error = String;

    fn move_focus(&mut self, target: usize, scroll: ScrollIntent) {
        self.focused = Some(target);
        let how = match scroll {
            ScrollIntent::IntoView => " (scrolled into view)",
            ScrollIntent::Fixed => "",
        };
        println!("  focus -> {}{how}", self.name_of(target));
    }

    fn activate(&mut self, target: usize) -> Result<(), String> {
        let name = self.name_of(target);
        if name == "Settings" {
            return Err(format!("{name}: settings panel not installed"));
        }
        println!("  play  -> {name}");
        Ok(())
    }

    fn set_cursor(&mut self, visibility: CursorVisibility) {
        println!("  cursor -> {visibility:?}");
    }
}

fn press(engine: &Controller, page: &mut Page, code: KeyCode, label: &str) {
    println!("press {label}");
    let response = engine.on_key(KeyPress::new(code), &*page);
    if let Err(err) = apply(&response, page) {
        println!("  activation error (host's to handle): {err}");
    }
    if response.action.is_none() {
        println!("  no target; focus unchanged");
    }
}

fn main() {
    let mut page = Page::new();
    let mut engine = Controller::new();
    engine.activate(0);

    // Enter the page: nothing is focused, so the rail anchors us.
    press(&engine, &mut page, KeyCode::ArrowDown, "Down");
    // Walk the rail and wrap off the top.
    press(&engine, &mut page, KeyCode::ArrowUp, "Up");
    // Jump into the grid and move around it.
    press(&engine, &mut page, KeyCode::ArrowRight, "Right");
    press(&engine, &mut page, KeyCode::ArrowRight, "Right");
    press(&engine, &mut page, KeyCode::ArrowDown, "Down");
    // Off the right edge of the row: a no-op, scroll still suppressed.
    press(&engine, &mut page, KeyCode::ArrowRight, "Right");
    press(&engine, &mut page, KeyCode::ArrowRight, "Right");
    // Back across the first column into the rail.
    press(&engine, &mut page, KeyCode::ArrowLeft, "Left");
    press(&engine, &mut page, KeyCode::ArrowLeft, "Left");
    press(&engine, &mut page, KeyCode::ArrowLeft, "Left");
    // Activate whatever the rail landed on.
    press(&engine, &mut page, KeyCode::Enter, "Enter");

    // The pointer goes quiet; the cursor hides, then a touch restores it.
    println!("idle 3000ms");
    if let Some(v) = engine.poll_idle(3_000) {
        page.set_cursor(v);
    }
    println!("touch");
    if let Some(v) = engine.on_pointer_activity(3_500) {
        page.set_cursor(v);
    }

    // Symmetric teardown; a hidden cursor would be restored here too.
    if let Some(v) = engine.deactivate() {
        page.set_cursor(v);
    }
    println!("engine deactivated");
}
