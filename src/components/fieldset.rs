//! Selection Fieldsets
//!
//! One fieldset per entity kind: radio groups for the single-choice kinds
//! and a capped checkbox group for traits. Labels carry the pointer
//! enter/leave handlers that drive the description panels.

use leptos::prelude::*;

use crate::catalog::{EntityDef, EntityKind, TraitDef};
use crate::components::design_system::{Card, CardBody, CardHeader};
use crate::services::form_state::use_form_context;

/// Radio group for a single-choice entity kind.
#[component]
pub fn EntityFieldset(kind: EntityKind) -> impl IntoView {
    let ctx = use_form_context();
    let entries: Vec<EntityDef> =
        ctx.with_catalog(|catalog| catalog.entries(kind).into_iter().cloned().collect());

    view! {
        <Card>
            <CardHeader>
                <h2 class="text-lg font-semibold text-stone-200">{kind.label()}</h2>
            </CardHeader>
            <CardBody>
                <ul class="selection flex flex-wrap gap-x-6 gap-y-2">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let input_id = format!("{}-{}", kind.field_name(), entry.id);
                            let id_checked = entry.id.clone();
                            let id_select = entry.id.clone();
                            let id_enter = entry.id.clone();
                            let id_leave = entry.id.clone();
                            view! {
                                <li class="flex items-center gap-2">
                                    <input
                                        id=input_id.clone()
                                        type="radio"
                                        name=kind.field_name()
                                        value=entry.id.clone()
                                        prop:checked=move || {
                                            ctx.choice(kind).as_deref() == Some(id_checked.as_str())
                                        }
                                        on:change=move |_| ctx.select(kind, &id_select)
                                    />
                                    <label
                                        for=input_id
                                        class="cursor-pointer select-none text-stone-300 hover:text-white"
                                        on:mouseenter=move |_| ctx.hover_enter(kind, &id_enter)
                                        on:mouseleave=move |_| ctx.hover_leave(kind, &id_leave)
                                    >
                                        {entry.name.clone()}
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardBody>
        </Card>
    }
}

/// Checkbox group for traits, capped by the catalog's trait limit.
///
/// Reaching the limit disables every still-unchecked box; checked boxes stay
/// enabled so a pick can always be taken back.
#[component]
pub fn TraitFieldset() -> impl IntoView {
    let ctx = use_form_context();
    let traits: Vec<TraitDef> = ctx.with_catalog(|catalog| catalog.traits.clone());
    let limit = ctx.with_catalog(|catalog| catalog.trait_limit);
    let kind = EntityKind::Trait;

    view! {
        <Card>
            <CardHeader>
                <h2 class="text-lg font-semibold text-stone-200">{kind.label()}</h2>
                <span class="text-xs text-stone-400">
                    {move || {
                        let picked = ctx.traits.with(|guard| guard.checked_count());
                        format!("{picked} of {limit} picked")
                    }}
                </span>
            </CardHeader>
            <CardBody>
                <ul class="selection space-y-1">
                    {traits
                        .into_iter()
                        .map(|def| {
                            let input_id = format!("{}-{}", kind.field_name(), def.info.id);
                            let id_checked = def.info.id.clone();
                            let id_disabled = def.info.id.clone();
                            let id_toggle = def.info.id.clone();
                            let id_dim = def.info.id.clone();
                            let id_enter = def.info.id.clone();
                            let id_leave = def.info.id.clone();
                            view! {
                                <li class="flex items-center gap-2">
                                    <input
                                        id=input_id.clone()
                                        type="checkbox"
                                        name=kind.field_name()
                                        value=def.info.id.clone()
                                        prop:checked=move || ctx.trait_checked(&id_checked)
                                        prop:disabled=move || ctx.trait_disabled(&id_disabled)
                                        on:change=move |ev| {
                                            ctx.toggle_trait(&id_toggle, event_target_checked(&ev))
                                        }
                                    />
                                    <label
                                        for=input_id
                                        class="cursor-pointer select-none text-stone-300 hover:text-white"
                                        class=(
                                            "opacity-40",
                                            move || ctx.trait_disabled(&id_dim),
                                        )
                                        on:mouseenter=move |_| ctx.hover_enter(kind, &id_enter)
                                        on:mouseleave=move |_| ctx.hover_leave(kind, &id_leave)
                                    >
                                        {def.info.name.clone()}
                                        <span class="ml-1 text-xs text-stone-500">
                                            {format!("{:+}", def.cost)}
                                        </span>
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardBody>
        </Card>
    }
}
