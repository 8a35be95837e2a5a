pub mod components;
pub mod pages;

use crate::app::components::app_layout::AppLayout;
use crate::app::pages::home::HomePage;
use crate::app::pages::not_found::NotFoundPage;
use crate::app::pages::placeholder::PlaceholderPage;
use crate::app::pages::projects::project::ProjectDetailsPage;
use crate::app::pages::projects::ProjectsPage;
use crate::app::pages::settings::SettingsPage;
use leptos::prelude::*;

use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{ParentRoute, Redirect};
use leptos_router::{
    components::{Route, Router, Routes},
    path, MatchNestedRoutes,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html class="h-full" lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="h-full">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    #[cfg(feature = "ssr")]
    crate::ssr::set_headers();

    view! {
        <Stylesheet id="leptos" href="/pkg/aihub_website.css" />

        <Title text="Red Hat OpenShift AI" />

        <Router>
            <AppLayout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("projects") view=ProjectsPage />
                    <Route path=path!("projects/:project_id") view=ProjectDetailsPage />
                    <Route
                        path=path!("ai-hub")
                        view=|| view! { <PlaceholderPage title="AI Hub" /> }
                    />
                    <Route
                        path=path!("gen-ai-studio")
                        view=|| view! { <PlaceholderPage title="Gen AI Studio" /> }
                    />
                    <Route
                        path=path!("develop-train")
                        view=|| view! { <PlaceholderPage title="Develop & Train" /> }
                    />
                    <Route
                        path=path!("observe-monitor")
                        view=|| view! { <PlaceholderPage title="Observe & Monitor" /> }
                    />
                    <Route
                        path=path!("learning-resources")
                        view=|| view! { <PlaceholderPage title="Learning Resources" /> }
                    />
                    <Route
                        path=path!("applications")
                        view=|| view! { <PlaceholderPage title="Applications" /> }
                    />
                    <SettingsRoutes />
                </Routes>
            </AppLayout>
        </Router>
    }
}

#[component(transparent)]
fn SettingsRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <ParentRoute path=path!("settings") view=SettingsPage>
            <Route path=path!("") view=|| view! { <Redirect path="/settings/cluster" /> } />
            <Route
                path=path!("cluster")
                view=|| view! { <PlaceholderPage title="Cluster settings" /> }
            />
            <Route
                path=path!("users")
                view=|| view! { <PlaceholderPage title="User management" /> }
            />
        </ParentRoute>
    }
    .into_inner()
}
