//! Character Form Tests
//!
//! In-browser checks that the form mounts with the expected inputs, labels
//! and description panels. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use character_creator_frontend::catalog::{Catalog, EntityKind};
use character_creator_frontend::components::character_form::CharacterCreator;
use character_creator_frontend::components::design_system::{Button, ButtonVariant};
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

// Tests share one page; drop whatever a previous test mounted.
fn reset_body() {
    document().body().unwrap().set_inner_html("");
}

#[wasm_bindgen_test]
fn test_button_renders_without_panic() {
    reset_body();
    leptos::mount::mount_to_body(|| {
        view! {
            <Button variant=ButtonVariant::Secondary>
                "Done"
            </Button>
        }
    });
}

#[wasm_bindgen_test]
fn test_character_form_mounts_with_all_input_groups() {
    reset_body();
    leptos::mount::mount_to_body(CharacterCreator);

    let doc = document();
    let catalog = Catalog::demo();

    for kind in EntityKind::all() {
        let selector = format!("input[name='{}']", kind.field_name());
        let inputs = doc.query_selector_all(&selector).unwrap();
        assert_eq!(
            inputs.length() as usize,
            catalog.entries(kind).len(),
            "wrong input count for {}",
            kind.field_name()
        );
    }
}

#[wasm_bindgen_test]
fn test_every_described_entity_gets_a_panel() {
    reset_body();
    leptos::mount::mount_to_body(CharacterCreator);

    let doc = document();
    let catalog = Catalog::demo();
    let described: usize = EntityKind::all()
        .into_iter()
        .map(|kind| {
            catalog
                .entries(kind)
                .into_iter()
                .filter(|e| e.description.is_some())
                .count()
        })
        .sum();

    let panels = doc.query_selector_all(".entity-info").unwrap();
    assert_eq!(panels.length() as usize, described);

    // All panels start hidden.
    let visible = doc.query_selector_all(".entity-info:not(.hidden)").unwrap();
    assert_eq!(visible.length(), 0);
}

#[wasm_bindgen_test]
fn test_submit_serializes_draft_to_console() {
    reset_body();
    leptos::mount::mount_to_body(CharacterCreator);

    let doc = document();
    let form = doc
        .get_element_by_id("character-form")
        .expect("form missing");
    let event = web_sys::Event::new("submit").unwrap();
    // The handler serializes the draft and writes it to the console; a
    // panic anywhere in that path fails the dispatch.
    assert!(form.dispatch_event(&event).is_ok());
}

#[wasm_bindgen_test]
fn test_labels_reference_their_inputs() {
    reset_body();
    leptos::mount::mount_to_body(CharacterCreator);

    let doc = document();
    // Spot-check the label-for/input-id association the hover handlers
    // depend on.
    let label = doc.query_selector("label[for='race-orc']").unwrap();
    assert!(label.is_some(), "race-orc label missing");
    let input = doc.get_element_by_id("race-orc");
    assert!(input.is_some(), "race-orc input missing");
}
