use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div id="settings-page">
            <Outlet />
        </div>
    }
}
