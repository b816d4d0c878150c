//! Card for one project record inside the carousel.

use leptos::prelude::*;

use crate::components::external_link::ExternalLink;
use crate::data::ProjectRecord;

#[component]
pub fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    view! {
        <article class="project-card" data-key=project.title>
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__tech">{project.tech_summary}</div>
            <ExternalLink href=project.repository_link label="View Repo →" class="project-card__link" pinned=true/>
        </article>
    }
}
