use crate::app::components::masthead::Masthead;
use crate::app::components::sidebar::Sidebar;
use common::nav::SidebarState;
use leptos::prelude::*;

pub const PAGE_ID: &str = "primary-app-container";

/// Masthead, sidebar and content region shared by every page. The sidebar
/// open/closed flag lives here and nowhere else.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let sidebar = RwSignal::new(SidebarState::default());

    view! {
        <div class="page">
            <a class="skip-to-content" href=format!("#{PAGE_ID}")>
                "Skip to Content"
            </a>
            <Masthead sidebar />
            <Show when=move || sidebar.get().is_open()>
                <Sidebar />
            </Show>
            <main id=PAGE_ID class="page-main" tabindex="-1">
                {children()}
            </main>
        </div>
    }
}
