use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-amber-700 hover:bg-amber-600 text-white shadow-lg shadow-amber-900/40 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-stone-700 hover:bg-stone-600 text-stone-200 border border-stone-600"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-stone-400 hover:text-white border border-transparent"
            }
        }
    }
}

/// A styled button component
#[component]
pub fn Button(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    #[prop(into, optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    /// Whether the button is disabled
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// The `type` attribute; "submit" for form submission buttons
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Button content
    children: Children,
) -> impl IntoView {
    let base_class = "px-4 py-2 rounded transition-all duration-200 inline-flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-stone-900 focus:ring-amber-500";
    let variant_class = variant.class();

    let state_class = move || {
        if disabled.get() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !disabled.get() {
            if let Some(callback) = on_click {
                callback.run(evt);
            }
        }
    };

    view! {
        <button
            type=button_type
            class=full_class
            prop:disabled=move || disabled.get()
            on:click=handle_click
        >
            {children()}
        </button>
    }
}
