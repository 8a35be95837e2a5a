use crate::{AppError, AppResult};
use common::fixtures::MockProjects;
use common::{Project, ProjectSource};
use leptos::either::Either;
use leptos::prelude::*;
use leptos::Params;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, Clone, Debug, PartialEq)]
pub struct ProjectParams {
    pub project_id: String,
}

pub fn find_project(source: &impl ProjectSource, project_id: &str) -> AppResult<Project> {
    source
        .find(project_id)
        .cloned()
        .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))
}

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let params = use_params::<ProjectParams>();
    let project = Memo::new(move |_| {
        let project_id = params
            .read()
            .as_ref()
            .map(|p| p.project_id.clone())
            .unwrap_or_default();
        find_project(&MockProjects, &project_id)
    });

    view! {
        <section class="page-section" id="project-details-page">
            <A href="/projects" attr:class="btn btn-link">"Back to projects"</A>
            {move || match project.get() {
                Ok(project) => Either::Left(view! { <ProjectDetails project /> }),
                Err(e) => Either::Right(view! { <p class="error-message">{e.to_string()}</p> }),
            }}
        </section>
    }
}

#[component]
fn ProjectDetails(project: Project) -> impl IntoView {
    let description = if project.has_description() {
        project.description
    } else {
        "No description".to_string()
    };

    view! {
        <h1 class="title title-2xl">{project.name}</h1>
        <dl class="description-list">
            <dt>"Owner"</dt>
            <dd>{project.owner}</dd>
            <dt>"Description"</dt>
            <dd>{description}</dd>
            <dt>"Created"</dt>
            <dd>{project.created_at}</dd>
            <dt>"Workbenches"</dt>
            <dd>
                {format!(
                    "{} running, {} stopped",
                    project.workbench_running,
                    project.workbench_stopped,
                )}
            </dd>
        </dl>
    }
}
