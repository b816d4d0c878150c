use leptos::prelude::*;

use crate::components::animated_section::mount_revealed;
use crate::components::external_link::ExternalLink;
use crate::data::{IDENTITY, LINKS, footer_links};
use crate::util::reveal::{Entrance, entrance_style};

/// Copyright line and profile links. The résumé link opens in place.
#[component]
pub fn Footer() -> impl IntoView {
    let revealed = mount_revealed();
    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <footer class="site-footer" style=move || entrance_style(Entrance::FADE, revealed.get())>
            <div class="container site-footer__inner">
                <div class="site-footer__copyright">{format!("© {year} {}", IDENTITY.name)}</div>
                <nav class="site-footer__links">
                    {footer_links(&LINKS)
                        .into_iter()
                        .map(|(label, href)| view! { <ExternalLink href=href label=label class="site-footer__link"/> })
                        .collect_view()}
                    <a href=LINKS.resume class="site-footer__link">"Resume (PDF)"</a>
                </nav>
            </div>
        </footer>
    }
}
