//! Character Catalog
//!
//! The set of entities a character can be assembled from: races, genders,
//! classes, armor sets, weapon sets, traits and starting locations. The page
//! that serves the app may embed its own catalog as JSON; otherwise the
//! built-in demo catalog is used.

use serde::{Deserialize, Serialize};

/// The kinds of selectable entities on the character form.
///
/// Every kind maps to one input group (`name` attribute) in the rendered
/// form. All kinds are single-choice radio groups except `Trait`, which is a
/// multi-select checkbox group capped by [`Catalog::trait_limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Race,
    Gender,
    Class,
    Armor,
    Weapon,
    Trait,
    Location,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Race => "Race",
            EntityKind::Gender => "Gender",
            EntityKind::Class => "Class",
            EntityKind::Armor => "Armor",
            EntityKind::Weapon => "Weapon",
            EntityKind::Trait => "Traits",
            EntityKind::Location => "Location",
        }
    }

    /// The `name` attribute shared by this kind's inputs.
    pub fn field_name(&self) -> &'static str {
        match self {
            EntityKind::Race => "race",
            EntityKind::Gender => "gender",
            EntityKind::Class => "class",
            EntityKind::Armor => "armor",
            EntityKind::Weapon => "weapon",
            EntityKind::Trait => "trait",
            EntityKind::Location => "location",
        }
    }

    /// Whether more than one entity of this kind can be selected.
    pub fn is_multi(&self) -> bool {
        matches!(self, EntityKind::Trait)
    }

    pub fn all() -> Vec<Self> {
        vec![
            EntityKind::Race,
            EntityKind::Gender,
            EntityKind::Class,
            EntityKind::Armor,
            EntityKind::Weapon,
            EntityKind::Trait,
            EntityKind::Location,
        ]
    }
}

/// A single selectable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDef {
    pub id: String,
    pub name: String,
    /// Shown in the description panel on hover. Entities without a
    /// description get no panel at all.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional preview asset path, relative to `/assets/`.
    #[serde(default)]
    pub preview: Option<String>,
}

/// A trait entity. The cost is display data only; the selection cap is the
/// number of traits, not their total cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitDef {
    #[serde(flatten)]
    pub info: EntityDef,
    #[serde(default)]
    pub cost: i32,
}

/// Everything the form offers, plus the trait selection limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_trait_limit")]
    pub trait_limit: usize,
    #[serde(default)]
    pub race: Vec<EntityDef>,
    #[serde(default)]
    pub gender: Vec<EntityDef>,
    #[serde(default)]
    pub class: Vec<EntityDef>,
    #[serde(default)]
    pub armor: Vec<EntityDef>,
    #[serde(default)]
    pub weapon: Vec<EntityDef>,
    #[serde(default, rename = "trait")]
    pub traits: Vec<TraitDef>,
    #[serde(default)]
    pub location: Vec<EntityDef>,
}

fn default_trait_limit() -> usize {
    2
}

impl Catalog {
    /// Unified per-kind access to entity definitions.
    pub fn entries(&self, kind: EntityKind) -> Vec<&EntityDef> {
        match kind {
            EntityKind::Race => self.race.iter().collect(),
            EntityKind::Gender => self.gender.iter().collect(),
            EntityKind::Class => self.class.iter().collect(),
            EntityKind::Armor => self.armor.iter().collect(),
            EntityKind::Weapon => self.weapon.iter().collect(),
            EntityKind::Trait => self.traits.iter().map(|t| &t.info).collect(),
            EntityKind::Location => self.location.iter().collect(),
        }
    }

    pub fn entity(&self, kind: EntityKind, id: &str) -> Option<&EntityDef> {
        self.entries(kind).into_iter().find(|e| e.id == id)
    }

    pub fn trait_def(&self, id: &str) -> Option<&TraitDef> {
        self.traits.iter().find(|t| t.info.id == id)
    }

    /// Whether a description panel exists for the given entity.
    pub fn has_panel(&self, kind: EntityKind, id: &str) -> bool {
        self.entity(kind, id)
            .map(|e| e.description.is_some())
            .unwrap_or(false)
    }

    /// Display ordering: races and classes by id, traits by descending cost
    /// then name, everything else alphabetically. Gender keeps its authored
    /// order.
    pub fn normalize(&mut self) {
        self.race.sort_by(|a, b| a.id.cmp(&b.id));
        self.class.sort_by(|a, b| a.id.cmp(&b.id));
        self.armor.sort_by(|a, b| a.name.cmp(&b.name));
        self.weapon.sort_by(|a, b| a.name.cmp(&b.name));
        self.location.sort_by(|a, b| a.name.cmp(&b.name));
        self.traits
            .sort_by(|a, b| b.cost.cmp(&a.cost).then_with(|| a.info.name.cmp(&b.info.name)));
    }

    /// Read a catalog embedded in the current document as
    /// `<script type="application/json" id="catalog-data">...</script>`.
    ///
    /// Returns `None` when there is no such element or its content does not
    /// parse; a malformed catalog is logged and ignored, never fatal.
    pub fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let node = document.get_element_by_id("catalog-data")?;
        let raw = node.text_content()?;
        match Self::parse_embedded(&raw) {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("ignoring malformed catalog data: {err}").into(),
                );
                None
            }
        }
    }

    /// Parse the JSON payload of an embedded catalog script tag.
    pub fn parse_embedded(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Page-embedded catalog if present, demo catalog otherwise.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        let mut catalog = Self::from_document().unwrap_or_else(Self::demo);
        #[cfg(not(target_arch = "wasm32"))]
        let mut catalog = Self::demo();
        catalog.normalize();
        catalog
    }

    /// Built-in catalog for running the form without a configured page.
    pub fn demo() -> Self {
        fn entity(id: &str, name: &str, description: &str) -> EntityDef {
            EntityDef {
                id: id.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                preview: None,
            }
        }

        fn gender(id: &str, glyph: &str) -> EntityDef {
            EntityDef {
                id: id.to_string(),
                name: glyph.to_string(),
                description: None,
                preview: None,
            }
        }

        fn trait_def(id: &str, name: &str, cost: i32, description: &str) -> TraitDef {
            TraitDef {
                info: entity(id, name, description),
                cost,
            }
        }

        Self {
            trait_limit: default_trait_limit(),
            race: vec![
                entity("human", "Human", "Adaptable and ambitious, found in every corner of the realm."),
                entity("orc", "Orc", "Hardy clansfolk of the steppes, bound by honor and feud."),
                entity("elf", "Elf", "Long-lived wardens of the old forests."),
                entity("gnome", "Gnome", "Small, inventive and dangerously curious."),
            ],
            gender: vec![gender("male", "\u{2642}"), gender("female", "\u{2640}")],
            class: vec![
                entity("warrior", "Warrior", "Front-line fighter trained in every weapon and shield."),
                entity("mage", "Mage", "Student of the arcane, fragile but devastating."),
                entity("rogue", "Rogue", "Knives, locks and other people's pockets."),
                entity("priest", "Priest", "Keeper of the faith, mending wounds and breaking curses."),
            ],
            armor: vec![
                entity("cloth", "Cloth vestments", "Robes and padded cloth. No protection to speak of."),
                entity("leather", "Leather set", "Supple leathers that do not slow you down."),
                entity("mail", "Mail set", "Riveted rings over padding. Solid, jangly."),
                entity("plate", "Plate set", "Full plate harness. You will be heard before you are seen."),
            ],
            weapon: vec![
                entity("sword-board", "Sword and shield", "The classic pairing. Reliable in any line of battle."),
                entity("greataxe", "Greataxe", "Two hands, one argument."),
                entity("longbow", "Longbow", "Answers questions at two hundred paces."),
                entity("staff", "Staff", "A channel for spellwork, and a walking stick besides."),
            ],
            traits: vec![
                trait_def("veteran", "Veteran", 2, "You have seen war. Start with a campaign ribbon and old aches."),
                trait_def("noble-blood", "Noble blood", 2, "A family name that opens doors, and closes some."),
                trait_def("keen-eyes", "Keen eyes", 1, "Little escapes your notice."),
                trait_def("bookish", "Bookish", 1, "You can read, and you do. Constantly."),
                trait_def("superstitious", "Superstitious", -1, "Omens rule your mornings."),
                trait_def("haunted", "Haunted", -2, "Something followed you back."),
            ],
            location: vec![
                entity("harbor", "Harbor district", "Salt, rope and rumor. Ships leave daily for the capital."),
                entity("old-quarter", "Old quarter", "Crooked streets older than the city charter."),
                entity("outskirts", "Outskirts", "Farmsteads and waystations at the edge of the wild."),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_field_names() {
        for kind in EntityKind::all() {
            assert!(!kind.field_name().is_empty());
            assert!(!kind.label().is_empty());
        }
        assert_eq!(EntityKind::Trait.field_name(), "trait");
        assert!(EntityKind::Trait.is_multi());
        assert!(!EntityKind::Race.is_multi());
    }

    #[test]
    fn test_demo_catalog_covers_every_kind() {
        let catalog = Catalog::demo();
        for kind in EntityKind::all() {
            assert!(
                !catalog.entries(kind).is_empty(),
                "demo catalog has no {} entries",
                kind.field_name()
            );
        }
        assert_eq!(catalog.trait_limit, 2);
    }

    #[test]
    fn test_entity_lookup_and_panels() {
        let catalog = Catalog::demo();
        assert!(catalog.entity(EntityKind::Race, "orc").is_some());
        assert!(catalog.entity(EntityKind::Race, "dragon").is_none());

        // Races carry descriptions, genders do not.
        assert!(catalog.has_panel(EntityKind::Race, "orc"));
        assert!(!catalog.has_panel(EntityKind::Gender, "male"));
        assert!(!catalog.has_panel(EntityKind::Race, "dragon"));
    }

    #[test]
    fn test_normalize_orders_traits_by_cost() {
        let mut catalog = Catalog::demo();
        catalog.normalize();
        let costs: Vec<i32> = catalog.traits.iter().map(|t| t.cost).collect();
        let mut sorted = costs.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(costs, sorted);
    }

    #[test]
    fn test_malformed_embedded_catalog_is_rejected() {
        assert!(Catalog::parse_embedded("{ not valid json").is_err());
        assert!(Catalog::parse_embedded(r#"{"trait_limit": "two"}"#).is_err());

        // A rejected payload never takes the form down: load() falls back
        // to the demo catalog when no document payload is usable.
        let fallback = Catalog::load();
        assert_eq!(fallback.trait_limit, 2);
        assert!(!fallback.entries(EntityKind::Race).is_empty());
    }

    #[test]
    fn test_catalog_parses_with_defaults() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "race": [{"id": "human", "name": "Human"}],
                "trait": [
                    {"id": "veteran", "name": "Veteran", "cost": 2,
                     "description": "You have seen war."}
                ]
            }"#,
        )
        .expect("minimal catalog should parse");

        assert_eq!(catalog.trait_limit, 2, "trait_limit defaults to 2");
        assert!(catalog.gender.is_empty());
        assert_eq!(catalog.trait_def("veteran").map(|t| t.cost), Some(2));
        assert!(
            catalog
                .entity(EntityKind::Race, "human")
                .and_then(|e| e.description.as_deref())
                .is_none(),
            "description is optional"
        );
    }
}
