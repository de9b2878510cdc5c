//! Description Panels
//!
//! One `.entity-info` node per catalog entity that carries a description,
//! keyed by `data-entity`. Visibility follows the hover state; entities
//! without a description get no node at all, so hovering them shows nothing.

use leptos::prelude::*;

use crate::catalog::{EntityDef, EntityKind};
use crate::services::form_state::use_form_context;

#[component]
pub fn InfoPanels() -> impl IntoView {
    let ctx = use_form_context();
    let panels: Vec<(EntityKind, EntityDef)> = ctx.with_catalog(|catalog| {
        EntityKind::all()
            .into_iter()
            .flat_map(|kind| {
                catalog
                    .entries(kind)
                    .into_iter()
                    .filter(|entry| entry.description.is_some())
                    .cloned()
                    .map(move |entry| (kind, entry))
                    .collect::<Vec<_>>()
            })
            .collect()
    });

    view! {
        <div class="form-info sticky top-8 space-y-2">
            {panels
                .into_iter()
                .map(|(kind, entry)| {
                    let id = entry.id.clone();
                    let preview = entry.preview.clone();
                    view! {
                        <div
                            class="entity-info p-4 bg-stone-800 border border-stone-700 rounded-lg"
                            data-entity=entry.id.clone()
                            data-kind=kind.field_name()
                            class:hidden=move || !ctx.panel_visible(kind, &id)
                        >
                            <div class="name font-semibold text-amber-400">{entry.name.clone()}</div>
                            <div class="description text-sm text-stone-400 mt-1">
                                {entry.description.clone().unwrap_or_default()}
                            </div>
                            {preview.map(|path| {
                                let url = format!("/assets/{path}");
                                if path.ends_with(".webm") {
                                    view! {
                                        <video class="preview mt-2 rounded" autoplay=true muted=true src=url>
                                            "[preview]"
                                        </video>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <img class="preview mt-2 rounded" src=url alt="[preview]" />
                                    }
                                        .into_any()
                                }
                            })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
