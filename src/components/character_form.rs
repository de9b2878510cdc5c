//! Character Creator Component
//!
//! The character-creation form page: one fieldset per entity kind, the
//! shared description-panel column, and the free-text information block.

use leptos::ev;
use leptos::prelude::*;

use crate::catalog::{Catalog, EntityKind};
use crate::components::design_system::{Button, ButtonVariant, Card, CardBody, CardHeader};
use crate::components::fieldset::{EntityFieldset, TraitFieldset};
use crate::components::info_panel::InfoPanels;
use crate::services::form_state::{provide_form_context, use_form_context};

/// Character Creator page component
#[component]
pub fn CharacterCreator() -> impl IntoView {
    let ctx = provide_form_context(Catalog::load());

    // There is no backend here; a finished form is serialized and logged.
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ctx.draft();
        match serde_json::to_string_pretty(&draft) {
            Ok(json) => {
                web_sys::console::log_1(&format!("character draft:\n{json}").into())
            }
            Err(err) => web_sys::console::error_1(
                &format!("failed to serialize character draft: {err}").into(),
            ),
        }
    };

    view! {
        <div class="p-8 bg-stone-900 text-white min-h-screen font-sans">
            <div class="max-w-5xl mx-auto">
                <h1 class="text-2xl font-bold mb-8">"New Character"</h1>

                <form id="character-form" on:submit=handle_submit>
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="form-main lg:col-span-2 space-y-6">
                            <EntityFieldset kind=EntityKind::Race />
                            <EntityFieldset kind=EntityKind::Gender />
                            <EntityFieldset kind=EntityKind::Class />
                            <EntityFieldset kind=EntityKind::Armor />
                            <EntityFieldset kind=EntityKind::Weapon />
                            <TraitFieldset />
                            <EntityFieldset kind=EntityKind::Location />
                            <InformationFieldset />
                        </div>

                        <InfoPanels />
                    </div>

                    <div class="form-controls mt-6 flex justify-end">
                        <Button variant=ButtonVariant::Primary button_type="submit">
                            "Done"
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Name, description and master-group notes for the new character.
#[component]
fn InformationFieldset() -> impl IntoView {
    let ctx = use_form_context();

    view! {
        <Card>
            <CardHeader>
                <h2 class="text-lg font-semibold text-stone-200">"Information"</h2>
            </CardHeader>
            <CardBody>
                <div class="space-y-4">
                    <div class="flex gap-2">
                        <input
                            id="name"
                            type="text"
                            name="name"
                            minlength="2"
                            maxlength="12"
                            required=true
                            placeholder="Name"
                            class="p-2 bg-stone-700 rounded border border-stone-600 focus:border-amber-500 outline-none"
                            prop:value=move || ctx.name.get()
                            on:input=move |ev| ctx.name.set(event_target_value(&ev))
                        />
                        <input
                            id="name_extra"
                            type="text"
                            name="name_extra"
                            maxlength="20"
                            placeholder="Surname or byname"
                            class="p-2 bg-stone-700 rounded border border-stone-600 focus:border-amber-500 outline-none"
                            prop:value=move || ctx.name_extra.get()
                            on:input=move |ev| ctx.name_extra.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-stone-400 mb-1" for="description">
                            "Who the character is and their place in the world"
                        </label>
                        <textarea
                            id="description"
                            name="description"
                            class="w-full p-2 bg-stone-700 rounded border border-stone-600 focus:border-amber-500 outline-none"
                            prop:value=move || ctx.description.get()
                            on:input=move |ev| ctx.description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div>
                        <label class="block text-sm text-stone-400 mb-1" for="comment">
                            "Wishes and notes. Visible only to the master group, "
                            "even if the character is hidden from the public list."
                        </label>
                        <textarea
                            id="comment"
                            name="comment"
                            class="w-full p-2 bg-stone-700 rounded border border-stone-600 focus:border-amber-500 outline-none"
                            prop:value=move || ctx.comment.get()
                            on:input=move |ev| ctx.comment.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="flex items-center gap-2">
                        <input
                            id="loadup"
                            type="checkbox"
                            name="loadup"
                            prop:checked=move || ctx.loadup.get()
                            on:change=move |ev| ctx.loadup.set(event_target_checked(&ev))
                        />
                        <label class="text-sm text-stone-400" for="loadup">
                            "I want an individual load-out"
                        </label>
                    </div>
                    <div class="flex items-center gap-2">
                        <input
                            id="hidden"
                            type="checkbox"
                            name="hidden"
                            prop:checked=move || ctx.hidden_from_list.get()
                            on:change=move |ev| ctx.hidden_from_list.set(event_target_checked(&ev))
                        />
                        <label class="text-sm text-stone-400" for="hidden">
                            "Hide from the public list"
                        </label>
                    </div>
                </div>
            </CardBody>
        </Card>
    }
}
