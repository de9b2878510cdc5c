//! Description Panel Visibility
//!
//! Tracks which `.entity-info` panel is visible while the pointer is over an
//! input's label. Showing always hides first, so rapid enter events can
//! never stack panels; leaving hides the panel for that specific entity and
//! nothing else. Entering an entity that has no panel simply shows nothing.

use std::collections::HashMap;

use crate::catalog::EntityKind;

/// How far the hide phase of an enter event reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelScope {
    /// Hide every panel before showing one (at most one panel visible on
    /// the whole form).
    #[default]
    Global,
    /// Hide only panels of the hovered input's kind (at most one panel
    /// visible per kind).
    PerKind,
}

#[derive(Debug, Clone)]
pub struct InfoPanelState {
    scope: PanelScope,
    visible: HashMap<EntityKind, String>,
}

impl InfoPanelState {
    pub fn new(scope: PanelScope) -> Self {
        Self {
            scope,
            visible: HashMap::new(),
        }
    }

    pub fn scope(&self) -> PanelScope {
        self.scope
    }

    /// Pointer entered the label for `id`. Hide-then-show, so the result is
    /// the same no matter what was visible before.
    pub fn enter(&mut self, kind: EntityKind, id: &str) {
        match self.scope {
            PanelScope::Global => self.visible.clear(),
            PanelScope::PerKind => {
                self.visible.remove(&kind);
            }
        }
        self.visible.insert(kind, id.to_string());
    }

    /// Pointer left the label for `id`. Hides that entity's panel and only
    /// that one; if something else is visible by now (the pointer already
    /// entered another label), it stays.
    pub fn leave(&mut self, kind: EntityKind, id: &str) {
        if self.visible.get(&kind).is_some_and(|v| v == id) {
            self.visible.remove(&kind);
        }
    }

    pub fn is_visible(&self, kind: EntityKind, id: &str) -> bool {
        self.visible.get(&kind).is_some_and(|v| v == id)
    }

    pub fn visible_for(&self, kind: EntityKind) -> Option<&str> {
        self.visible.get(&kind).map(String::as_str)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

impl Default for InfoPanelState {
    fn default() -> Self {
        Self::new(PanelScope::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_shows_exactly_one_panel() {
        let mut panels = InfoPanelState::new(PanelScope::Global);
        panels.enter(EntityKind::Race, "orc");
        assert!(panels.is_visible(EntityKind::Race, "orc"));
        assert_eq!(panels.visible_count(), 1);

        panels.enter(EntityKind::Race, "elf");
        assert!(panels.is_visible(EntityKind::Race, "elf"));
        assert!(!panels.is_visible(EntityKind::Race, "orc"));
        assert_eq!(panels.visible_count(), 1);
    }

    #[test]
    fn test_global_scope_hides_across_kinds() {
        let mut panels = InfoPanelState::new(PanelScope::Global);
        panels.enter(EntityKind::Race, "orc");
        panels.enter(EntityKind::Location, "harbor");
        assert_eq!(panels.visible_count(), 1);
        assert!(panels.is_visible(EntityKind::Location, "harbor"));
        assert!(!panels.is_visible(EntityKind::Race, "orc"));
    }

    #[test]
    fn test_per_kind_scope_keeps_one_panel_per_kind() {
        let mut panels = InfoPanelState::new(PanelScope::PerKind);
        panels.enter(EntityKind::Race, "orc");
        panels.enter(EntityKind::Location, "harbor");
        assert_eq!(panels.visible_count(), 2);
        assert!(panels.is_visible(EntityKind::Race, "orc"));
        assert!(panels.is_visible(EntityKind::Location, "harbor"));

        panels.enter(EntityKind::Race, "elf");
        assert!(panels.is_visible(EntityKind::Race, "elf"));
        assert!(!panels.is_visible(EntityKind::Race, "orc"));
        assert!(panels.is_visible(EntityKind::Location, "harbor"));
    }

    #[test]
    fn test_leave_clears_the_shown_panel() {
        let mut panels = InfoPanelState::default();
        panels.enter(EntityKind::Race, "orc");
        panels.leave(EntityKind::Race, "orc");
        assert_eq!(panels.visible_count(), 0);
        assert!(!panels.is_visible(EntityKind::Race, "orc"));
    }

    #[test]
    fn test_leave_of_superseded_panel_keeps_current_one() {
        // enter A, enter B, then the (late) leave for A must not hide B.
        let mut panels = InfoPanelState::default();
        panels.enter(EntityKind::Race, "orc");
        panels.enter(EntityKind::Race, "elf");
        panels.leave(EntityKind::Race, "orc");
        assert!(panels.is_visible(EntityKind::Race, "elf"));
    }

    #[test]
    fn test_leave_without_enter_is_a_no_op() {
        let mut panels = InfoPanelState::default();
        panels.leave(EntityKind::Race, "orc");
        assert_eq!(panels.visible_count(), 0);
    }
}
