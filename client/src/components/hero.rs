//! Hero section: greeting, rotating tagline, summary and calls to action.
//!
//! DESIGN
//! ======
//! The section itself reveals on scroll like every other section; the
//! heading, copy and buttons additionally stagger in on load.

use leptos::prelude::*;

use crate::components::animated_section::{AnimatedSection, mount_revealed};
use crate::components::tagline::Tagline;
use crate::data::{IDENTITY, LINKS};
use crate::util::reveal::{Entrance, entrance_style};

const HEADING: Entrance = Entrance::POP.with_delay(50);
const SUMMARY: Entrance = Entrance::FADE.with_delay(250);
const ACTIONS: Entrance = Entrance::RISE.with_delay(350);

#[component]
pub fn Hero() -> impl IntoView {
    let revealed = mount_revealed();

    view! {
        <AnimatedSection id="hero" class="hero" delay_ms=50>
            <div class="container hero__inner">
                <h2 class="hero__title" style=move || entrance_style(HEADING, revealed.get())>
                    <span class="hero__greeting">"Hi, "</span>
                    <Tagline/>
                </h2>
                <p class="hero__summary" style=move || entrance_style(SUMMARY, revealed.get())>
                    {IDENTITY.summary}
                </p>
                <div class="hero__actions" style=move || entrance_style(ACTIONS, revealed.get())>
                    <a href="#projects" class="button button--solid">"View Projects"</a>
                    <a href=LINKS.email class="button button--outline">"Contact"</a>
                </div>
            </div>
        </AnimatedSection>
    }
}
