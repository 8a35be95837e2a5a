use common::nav::{route_table, RouteEntry};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    // top-level destinations other than home itself
    let shortcuts = route_table()
        .iter()
        .filter(|route| !route.is_group() && route.path != "/")
        .filter_map(|RouteEntry { label, path, .. }| Some((label.clone()?, path.clone())))
        .map(|(label, path)| {
            view! {
                <li>
                    <A href=path>{label}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="page-section" id="home-page">
            <h1 class="title title-2xl">"Home"</h1>
            <ul class="home-shortcuts">{shortcuts}</ul>
        </section>
    }
}
