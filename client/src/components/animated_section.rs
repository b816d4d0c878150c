//! Entrance-animated wrappers.
//!
//! DESIGN
//! ======
//! Each wrapper owns a single `revealed` signal that only ever flips from
//! `false` to `true`; styles are derived from it via `entrance_style`. SSR
//! renders the hidden state so the first painted frame matches hydration.

use leptos::prelude::*;

use crate::util::reveal::{DEFAULT_THRESHOLD, Entrance, entrance_style};

/// Section that slides up and fades in the first time it scrolls into view.
#[component]
pub fn AnimatedSection(
    #[prop(into)] id: String,
    #[prop(into, optional)] class: String,
    /// Delay before the transition starts once triggered.
    #[prop(optional)]
    delay_ms: u32,
    /// Fraction of the section that must be visible to trigger.
    #[prop(default = DEFAULT_THRESHOLD)]
    threshold: f64,
    children: Children,
) -> impl IntoView {
    let entrance = Entrance::SECTION.with_delay(delay_ms);
    let revealed = RwSignal::new(false);
    let section_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(section) = section_ref.get() else {
                return;
            };
            if revealed.get_untracked() {
                return;
            }
            crate::util::observer::reveal_once(&section, threshold, move || revealed.set(true));
        });
    }

    view! {
        <section
            id=id
            class=class
            node_ref=section_ref
            data-reveal-threshold=threshold.to_string()
            style=move || entrance_style(entrance, revealed.get())
        >
            {children()}
        </section>
    }
}

/// Signal that turns `true` once the calling component has hydrated.
///
/// Drives above-the-fold entrances (header, hero copy, footer) that play on
/// load instead of on scroll. Stays `false` during SSR.
pub fn mount_revealed() -> RwSignal<bool> {
    let revealed = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || revealed.set(true));
    }
    revealed
}
