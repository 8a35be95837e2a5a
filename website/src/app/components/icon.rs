use common::nav::Icon;
use leptos::prelude::*;

#[component]
pub fn NavIcon(icon: Icon) -> impl IntoView {
    view! {
        <span class=format!("nav-icon nav-icon-{}", icon.as_ref()) aria-hidden="true"></span>
    }
}
