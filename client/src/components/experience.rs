use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::data::EXPERIENCE;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <AnimatedSection id="experience" class="experience" delay_ms=120>
            <div class="container">
                <h3 class="section-title">"Experience"</h3>
                {EXPERIENCE
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="experience-card">
                                <h4 class="experience-card__role">
                                    {format!("{} — {}", entry.role, entry.organization)}
                                </h4>
                                <p class="experience-card__period">{entry.period}</p>
                                <ul class="experience-card__highlights">
                                    {entry.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}
