// Copyright 2026 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-event candidate registry.
//!
//! [`collect`] rebuilds the focus-candidate snapshot from the host's live
//! tree on every navigation event. Eligibility:
//!
//! - explicitly tagged navigable, or a native interactive control that is
//!   not disabled, and
//! - visible per the host's predicate, with non-zero-width bounds.
//!
//! An empty snapshot is a valid, non-error result. Zone membership is
//! classified here, during collection, from the host's ancestry test; it is
//! derived per event and never stored across events.

use smallvec::SmallVec;
use tenfoot_focus::{NavEntry, Zone};

use crate::types::{TargetKind, TargetSource};

/// Snapshot buffer for one navigation event.
///
/// Inline capacity covers the usual on-screen population (tens of elements);
/// larger trees spill to the heap without ceremony.
pub type Snapshot<K> = SmallVec<[NavEntry<K>; 16]>;

/// Collect the eligible focus candidates, in traversal order.
#[must_use]
pub fn collect<S: TargetSource>(source: &S) -> Snapshot<S::Key> {
    let mut out = Snapshot::new();
    source.visit_targets(&mut |target| {
        let eligible = matches!(target.kind, TargetKind::Tagged)
            || (target.kind.is_native_control() && !target.disabled);
        if !eligible || !target.visible || target.rect.width() <= 0.0 {
            return;
        }
        let zone = if source.in_sidebar(target.key) {
            Zone::Sidebar
        } else {
            Zone::Content
        };
        out.push(NavEntry {
            id: target.key,
            rect: target.rect,
            zone,
        });
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TargetInfo;
    use alloc::vec::Vec;
    use kurbo::Rect;

    /// Synthetic source: plain target list plus a sidebar id set.
    struct Scene {
        targets: Vec<TargetInfo<u32>>,
        sidebar: Vec<u32>,
    }

    impl TargetSource for Scene {
        type Key = u32;

        fn visit_targets(&self, visit: &mut dyn FnMut(TargetInfo<u32>)) {
            for t in &self.targets {
                visit(*t);
            }
        }

        fn in_sidebar(&self, key: u32) -> bool {
            self.sidebar.contains(&key)
        }

        fn content_left(&self) -> f64 {
            120.0
        }

        fn focused(&self) -> Option<u32> {
            None
        }
    }

    fn target(key: u32, kind: TargetKind) -> TargetInfo<u32> {
        TargetInfo {
            key,
            rect: Rect::new(0.0, 0.0, 50.0, 20.0),
            kind,
            disabled: false,
            visible: true,
        }
    }

    #[test]
    fn keeps_tagged_and_enabled_native_controls() {
        let scene = Scene {
            targets: alloc::vec![
                target(1, TargetKind::Tagged),
                target(2, TargetKind::Button),
                target(3, TargetKind::Link),
                target(4, TargetKind::TextInput),
                target(5, TargetKind::Select),
            ],
            sidebar: Vec::new(),
        };
        let snapshot = collect(&scene);
        let ids: Vec<u32> = snapshot.iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn disabled_native_controls_are_skipped_but_tagged_survive() {
        let mut disabled_button = target(1, TargetKind::Button);
        disabled_button.disabled = true;
        let mut disabled_tagged = target(2, TargetKind::Tagged);
        disabled_tagged.disabled = true;

        let scene = Scene {
            targets: alloc::vec![disabled_button, disabled_tagged],
            sidebar: Vec::new(),
        };
        let ids: Vec<u32> = collect(&scene).iter().map(|e| e.id).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn invisible_and_zero_width_targets_are_excluded() {
        let mut hidden = target(1, TargetKind::Button);
        hidden.visible = false;
        let mut flat = target(2, TargetKind::Button);
        flat.rect = Rect::new(10.0, 10.0, 10.0, 30.0);

        let scene = Scene {
            targets: alloc::vec![hidden, flat, target(3, TargetKind::Button)],
            sidebar: Vec::new(),
        };
        let ids: Vec<u32> = collect(&scene).iter().map(|e| e.id).collect();
        assert_eq!(ids, [3]);
    }

    #[test]
    fn zone_is_classified_from_ancestry() {
        let scene = Scene {
            targets: alloc::vec![target(1, TargetKind::Button), target(2, TargetKind::Button)],
            sidebar: alloc::vec![1],
        };
        let snapshot = collect(&scene);
        assert_eq!(snapshot[0].zone, Zone::Sidebar);
        assert_eq!(snapshot[1].zone, Zone::Content);
    }

    #[test]
    fn empty_tree_yields_empty_snapshot() {
        let scene = Scene {
            targets: Vec::new(),
            sidebar: Vec::new(),
        };
        assert!(collect(&scene).is_empty());
    }

    #[test]
    fn traversal_order_is_preserved() {
        let scene = Scene {
            targets: alloc::vec![
                target(9, TargetKind::Button),
                target(3, TargetKind::Button),
                target(7, TargetKind::Button),
            ],
            sidebar: Vec::new(),
        };
        let ids: Vec<u32> = collect(&scene).iter().map(|e| e.id).collect();
        assert_eq!(ids, [9, 3, 7]);
    }
}
