//! Rotating hero tagline with a typing cursor.
//!
//! The visible text is `aria-hidden`; screen readers get the full word list
//! once instead of a stream of partial words.

use leptos::prelude::*;

use crate::data::TAGLINE_WORDS;
use crate::util::typewriter::{Typewriter, TypewriterConfig};

#[component]
pub fn Tagline(
    #[prop(default = TAGLINE_WORDS)] words: &'static [&'static str],
    #[prop(optional)] config: TypewriterConfig,
) -> impl IntoView {
    let typewriter = Typewriter::new(words, config);
    let text = RwSignal::new(typewriter.text().to_owned());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let mut typewriter = typewriter;
        leptos::task::spawn_local(async move {
            let mut delay = typewriter.initial_delay();
            loop {
                gloo_timers::future::sleep(delay).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let next = typewriter.step();
                text.set(typewriter.text().to_owned());
                let Some(next) = next else {
                    break;
                };
                delay = next;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <span class="tagline">
            <span class="tagline__text" aria-hidden="true">
                {move || text.get()}
                <span class="tagline__cursor">"|"</span>
            </span>
            <span class="sr-only">{words.join(", ")}</span>
        </span>
    }
}
