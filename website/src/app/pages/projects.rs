use crate::app::components::pagination::{dispatch, CompactPagination};
use common::fixtures::MockProjects;
use common::list_view::{filter_by_name, ListViewAction, ListViewState};
use common::{Project, ProjectSource};
use leptos::prelude::*;
use leptos_router::components::A;

pub mod project;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let source = MockProjects;
    let state = RwSignal::new(ListViewState::default());

    let filter = Memo::new(move |_| state.read().filter.clone());
    let filtered = Memo::new(move |_| {
        filter.with(|filter| {
            filter_by_name(source.projects(), filter)
                .into_iter()
                .cloned()
                .collect::<Vec<Project>>()
        })
    });
    let item_count = Signal::derive(move || filtered.read().len());
    let paged = Memo::new(move |_| {
        filtered.with(|projects| state.read().visible(projects.as_slice()).to_vec())
    });

    view! {
        <section class="page-section" id="projects-page">
            <div class="flex items-center justify-between">
                <h1 class="title title-2xl">"Projects"</h1>
                <button id="projects-start-basic-workbench-button" class="btn btn-secondary">
                    "Start basic workbench"
                </button>
            </div>
            <div id="projects-toolbar" class="toolbar">
                <div class="toolbar-item">
                    <div class="input-group">
                        <input
                            id="projects-name-filter-input"
                            name="projects-name-filter-input"
                            type="search"
                            class="form-input"
                            aria-label="Filter by project name"
                            placeholder="Filter by name"
                            prop:value=move || filter.get()
                            on:input:target=move |e| {
                                dispatch(state, item_count, ListViewAction::SetFilter(e.target().value()));
                            }
                        />
                        <button
                            id="projects-search-button"
                            class="btn btn-control"
                            aria-label="Search projects"
                        ></button>
                    </div>
                </div>
                <div class="toolbar-item">
                    <button id="projects-create-project-button" class="btn btn-primary">
                        "Create project"
                    </button>
                </div>
                <div class="toolbar-item toolbar-item-right">
                    <CompactPagination widget_id="projects-pagination" state item_count />
                </div>
            </div>
            <table aria-label="Projects table" id="projects-table" class="table table-sticky-header">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Created"</th>
                        <th>
                            "Workbenches "
                            <button
                                id="projects-workbenches-help"
                                class="btn btn-plain"
                                aria-label="More info about workbenches"
                            >
                                <span class="nav-icon nav-icon-help" aria-hidden="true"></span>
                            </button>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|project| project.id.clone()
                        children=move |project| view! { <ProjectRow project /> }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    let href = project.href();
    let description = project
        .has_description()
        .then(|| view! { <div class="project-description">{project.description.clone()}</div> });
    let Project {
        id,
        name,
        owner,
        created_at,
        workbench_running,
        workbench_stopped,
        ..
    } = project;
    let launch_label = format!("Open workbenches for {name}");

    view! {
        <tr>
            <td data-label="Name">
                <A href=href attr:id=format!("project-link-{id}") attr:class="btn btn-link btn-inline">
                    {name.clone()}
                </A>
                <div class="project-owner">{owner}</div>
                {description}
            </td>
            <td data-label="Created">{created_at}</td>
            <td data-label="Workbenches">
                <button
                    id=format!("project-workbench-launch-{id}")
                    class="btn btn-plain"
                    aria-label=launch_label
                ></button>
                " "
                {workbench_running}
                " "
                <span aria-hidden="true">"●"</span>
                " "
                {workbench_stopped}
            </td>
        </tr>
    }
}
