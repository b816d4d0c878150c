//! Site header: identity plus the primary outbound links.

use leptos::prelude::*;

use crate::components::animated_section::mount_revealed;
use crate::components::external_link::ExternalLink;
use crate::data::{IDENTITY, LINKS, header_links, resume_file_name};
use crate::util::reveal::{Entrance, entrance_style};

#[component]
pub fn Header() -> impl IntoView {
    let revealed = mount_revealed();

    view! {
        <header class="site-header" style=move || entrance_style(Entrance::HEADER, revealed.get())>
            <div class="container site-header__inner">
                <div>
                    <h1 class="site-header__name">{IDENTITY.name}</h1>
                    <p class="site-header__headline">{IDENTITY.headline}</p>
                </div>
                <nav class="site-header__links">
                    <a href=LINKS.resume download=resume_file_name(LINKS.resume) class="button button--primary">
                        "Download CV"
                    </a>
                    {header_links(&LINKS)
                        .into_iter()
                        .map(|(label, href)| view! { <ExternalLink href=href label=label class="site-header__link"/> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
