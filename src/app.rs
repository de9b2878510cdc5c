use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::character_form::CharacterCreator;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div>"404 - Page Not Found"</div> }>
                <Route path=path!("/") view=CharacterCreator />
            </Routes>
        </Router>
    }
}
