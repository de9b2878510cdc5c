//! Character Form State Management
//!
//! Reactive state for the character-creation form. Uses Leptos signals and
//! context for component communication.
//!
//! # Architecture
//! - `FormContext` - reactive container provided to the component tree
//! - `TraitGuard` / `InfoPanelState` - the actual decision logic, kept as
//!   plain types so it tests without a rendering engine
//! - `CharacterDraft` - serializable snapshot of the whole form

use std::collections::HashMap;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, EntityKind};
use crate::services::info_panel::{InfoPanelState, PanelScope};
use crate::services::trait_guard::TraitGuard;

/// Snapshot of the form, in the shape the character endpoint historically
/// accepted. There is no backend in this crate; submit serializes one of
/// these and logs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub race: Option<String>,
    pub gender: Option<String>,
    pub class: Option<String>,
    pub armor: Option<String>,
    pub weapon: Option<String>,
    pub location: Option<String>,
    pub traits: Vec<String>,
    pub name: Option<String>,
    pub name_extra: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub loadup: bool,
    pub hidden: bool,
}

/// Reactive context for the character form.
#[derive(Clone, Copy)]
pub struct FormContext {
    catalog: StoredValue<Catalog>,
    /// One selected id per radio kind (race, gender, class, ...).
    pub choices: RwSignal<HashMap<EntityKind, String>>,
    /// Trait checkbox state behind the selection cap.
    pub traits: RwSignal<TraitGuard>,
    /// Which description panel is visible.
    pub info_panel: RwSignal<InfoPanelState>,
    pub name: RwSignal<String>,
    pub name_extra: RwSignal<String>,
    pub description: RwSignal<String>,
    pub comment: RwSignal<String>,
    pub loadup: RwSignal<bool>,
    pub hidden_from_list: RwSignal<bool>,
}

impl FormContext {
    pub fn new(catalog: Catalog) -> Self {
        let trait_limit = catalog.trait_limit;
        Self {
            catalog: StoredValue::new(catalog),
            choices: RwSignal::new(HashMap::new()),
            traits: RwSignal::new(TraitGuard::new(trait_limit)),
            info_panel: RwSignal::new(InfoPanelState::new(PanelScope::Global)),
            name: RwSignal::new(String::new()),
            name_extra: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            comment: RwSignal::new(String::new()),
            loadup: RwSignal::new(false),
            hidden_from_list: RwSignal::new(false),
        }
    }

    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        self.catalog.with_value(f)
    }

    // ------------------------------------------------------------------
    // Radio groups
    // ------------------------------------------------------------------

    pub fn select(&self, kind: EntityKind, id: &str) {
        let id = id.to_string();
        self.choices.update(|choices| {
            choices.insert(kind, id);
        });
    }

    pub fn choice(&self, kind: EntityKind) -> Option<String> {
        self.choices.with(|choices| choices.get(&kind).cloned())
    }

    // ------------------------------------------------------------------
    // Trait selection guard
    // ------------------------------------------------------------------

    pub fn toggle_trait(&self, id: &str, checked: bool) {
        self.traits.update(|guard| {
            guard.set_checked(id, checked);
        });
    }

    pub fn trait_checked(&self, id: &str) -> bool {
        self.traits.with(|guard| guard.is_checked(id))
    }

    pub fn trait_disabled(&self, id: &str) -> bool {
        self.traits.with(|guard| guard.is_disabled(id))
    }

    pub fn traits_at_limit(&self) -> bool {
        self.traits.with(|guard| guard.at_limit())
    }

    // ------------------------------------------------------------------
    // Hover description panels
    // ------------------------------------------------------------------

    pub fn hover_enter(&self, kind: EntityKind, id: &str) {
        self.info_panel.update(|panels| panels.enter(kind, id));
    }

    pub fn hover_leave(&self, kind: EntityKind, id: &str) {
        self.info_panel.update(|panels| panels.leave(kind, id));
    }

    pub fn panel_visible(&self, kind: EntityKind, id: &str) -> bool {
        self.info_panel.with(|panels| panels.is_visible(kind, id))
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    pub fn draft(&self) -> CharacterDraft {
        let mut traits: Vec<String> = self
            .traits
            .with(|guard| guard.selected().map(str::to_string).collect());
        traits.sort();

        CharacterDraft {
            race: self.choice(EntityKind::Race),
            gender: self.choice(EntityKind::Gender),
            class: self.choice(EntityKind::Class),
            armor: self.choice(EntityKind::Armor),
            weapon: self.choice(EntityKind::Weapon),
            location: self.choice(EntityKind::Location),
            traits,
            name: non_empty(self.name.get()),
            name_extra: non_empty(self.name_extra.get()),
            description: non_empty(self.description.get()),
            comment: non_empty(self.comment.get()),
            loadup: self.loadup.get(),
            hidden: self.hidden_from_list.get(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Provide the form context to the component tree.
pub fn provide_form_context(catalog: Catalog) -> FormContext {
    let ctx = FormContext::new(catalog);
    provide_context(ctx);
    ctx
}

/// Use the form context from anywhere in the tree.
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
