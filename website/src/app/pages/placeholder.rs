use leptos::prelude::*;

/// Page that only carries its title for now.
#[component]
pub fn PlaceholderPage(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="page-section">
            <h1 class="title title-lg">{title}</h1>
        </section>
    }
}
