//! Skills grid: one card per group, tags in authored order.
//!
//! Cards scale up slightly on hover (`.skill-group:hover`); nothing else is
//! interactive.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::data::SKILL_GROUPS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <AnimatedSection id="skills" class="skills" delay_ms=140>
            <div class="container">
                <h3 class="section-title">"Skills"</h3>
                <div class="skills__grid">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="skill-group" data-key=group.title>
                                    <h4 class="skill-group__title">{group.title}</h4>
                                    <div class="skill-group__items">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| view! { <span class="skill-tag">{*item}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}
