use common::nav::SidebarState;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn Masthead(sidebar: RwSignal<SidebarState>) -> impl IntoView {
    let on_toggle = move |_| {
        sidebar.update(|state| *state = state.toggle());
        log!("sidebar {:?}", sidebar.get_untracked());
    };

    view! {
        <header class="masthead">
            <div class="masthead-main">
                <div class="masthead-toggle">
                    <button
                        class="btn btn-plain"
                        aria-label="Global navigation"
                        aria-expanded=move || sidebar.get().is_open().to_string()
                        on:click=on_toggle
                    >
                        <span class="nav-icon nav-icon-bars" aria-hidden="true"></span>
                    </button>
                </div>
                <a class="masthead-brand" href="/">
                    <BrandLogo />
                    <div class="masthead-brand-text">
                        <span class="masthead-brand-company">"Red Hat"</span>
                        <span class="masthead-brand-product">"OpenShift AI"</span>
                    </div>
                </a>
            </div>
        </header>
    }
}

#[component]
fn BrandLogo() -> impl IntoView {
    view! {
        <svg
            class="masthead-logo"
            height="32px"
            width="32px"
            viewBox="0 0 32 32"
            role="img"
            aria-label="Red Hat Fedora"
        >
            <path
                d="M16 2C8.268 2 2 8.268 2 16s6.268 14 14 14 14-6.268 14-14S23.732 2 16 2zm0 26C9.373 28 4 22.627 4 16S9.373 4 16 4s12 5.373 12 12-5.373 12-12 12z"
                fill="#CC0000"
            />
            <ellipse cx="16" cy="12" rx="10" ry="6" fill="#CC0000" />
            <path d="M6 12c0-3.314 4.477-6 10-6s10 2.686 10 6" stroke="#CC0000" stroke-width="2" fill="none" />
        </svg>
    }
}
