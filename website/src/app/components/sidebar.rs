use crate::app::components::icon::NavIcon;
use common::nav::{nav_items, route_table, NavItem, NavLink};
use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Two-level navigation built from the static route table. Active and
/// expanded flags are derived from the current path on every navigation.
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let items = Memo::new(move |_| {
        location
            .pathname
            .with(|path| nav_items(route_table(), path))
    });

    view! {
        <aside class="page-sidebar">
            <nav id="nav-primary-simple" aria-label="Global navigation">
                <ul id="nav-list-simple" class="nav-list">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| match item {
                                NavItem::Link(link) => Either::Left(view! { <NavLinkItem link /> }),
                                NavItem::Group { id, label, active, links } => {
                                    Either::Right(
                                        view! { <NavGroup id label active links /> },
                                    )
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
        </aside>
    }
}

#[component]
fn NavLinkItem(link: NavLink) -> impl IntoView {
    let NavLink { id, label, path, icon, active } = link;
    let class = if active { "nav-item nav-item-active" } else { "nav-item" };
    view! {
        <li id=id class=class>
            <A href=path attr:class="nav-link">
                {icon.map(|icon| view! { <NavIcon icon /> })}
                <span class="nav-link-text">{label}</span>
            </A>
        </li>
    }
}

#[component]
fn NavGroup(id: String, label: String, active: bool, links: Vec<NavLink>) -> impl IntoView {
    let class = if active {
        "nav-item nav-expandable nav-item-active"
    } else {
        "nav-item nav-expandable"
    };
    view! {
        <li id=id class=class>
            <details open=active>
                <summary class="nav-link">{label}</summary>
                <ul class="nav-list nav-list-nested">
                    {links.into_iter().map(|link| view! { <NavLinkItem link /> }).collect_view()}
                </ul>
            </details>
        </li>
    }
}
