use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-section" id="not-found-page">
            <h1 class="title title-lg">"Page not found"</h1>
            <A href="/" attr:class="btn btn-link">"Take me home"</A>
        </section>
    }
}
