//! The portfolio page.

use leptos::prelude::*;

use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::data::{IDENTITY, LINKS};
use crate::util::structured_data::person_json_ld;

/// Header, then hero, projects, experience and skills inside `<main>`, then footer.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main>
            <Hero/>
            <Projects/>
            <Experience/>
            <Skills/>
        </main>
        <Footer/>
        <script type="application/ld+json" inner_html=person_json_ld(&IDENTITY, &LINKS)></script>
    }
}
