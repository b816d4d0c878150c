use leptos::prelude::*;

/// Anchor that opens in a new browsing context without leaking the opener.
///
/// `pinned` turns off native link dragging, for anchors inside a draggable
/// surface.
#[component]
pub fn ExternalLink(
    href: &'static str,
    label: &'static str,
    #[prop(into, optional)] class: String,
    #[prop(optional)] pinned: bool,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noreferrer" class=class draggable=pinned.then_some("false")>
            {label}
        </a>
    }
}
