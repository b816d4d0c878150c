use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::project_carousel::ProjectCarousel;

/// "Selected Projects" section. Reveals as soon as any part is visible.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <AnimatedSection id="projects" class="projects" threshold=0.0>
            <div class="container">
                <h3 class="section-title section-title--centered">"Selected Projects"</h3>
                <ProjectCarousel/>
            </div>
        </AnimatedSection>
    }
}
