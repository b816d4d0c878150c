//! Horizontally draggable row of project cards.
//!
//! ARCHITECTURE
//! ============
//! The outer viewport clips; the inner track is translated by `offset`.
//! Bounds come from measuring the track against the viewport on mount and
//! on every size change of either element. The track is `max-content` wide
//! so late card growth (web fonts, images) resizes it, and the live offset is
//! re-clamped whenever the bounds move. Pointer handlers follow the same
//! down/move/up/cancel/leave lifecycle as the dial controls.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::data::{PROJECTS, ProjectRecord};
#[cfg(feature = "hydrate")]
use crate::util::drag_bounds::clamp_offset;
use crate::util::drag_bounds::{CarouselBounds, DragSession, track_transform};
#[cfg(feature = "hydrate")]
use crate::util::observer::{SizeWatch, measure_bounds, watch_size};

#[component]
pub fn ProjectCarousel(#[prop(default = PROJECTS)] projects: &'static [ProjectRecord]) -> impl IntoView {
    let viewport_ref = NodeRef::<leptos::html::Div>::new();
    let track_ref = NodeRef::<leptos::html::Div>::new();
    let bounds = RwSignal::new(CarouselBounds::default());
    let offset = RwSignal::new(0.0_f64);
    let drag = RwSignal::new(None::<DragSession>);

    #[cfg(feature = "hydrate")]
    {
        let size_watch = StoredValue::new_local(None::<SizeWatch>);
        Effect::new(move || {
            let (Some(viewport), Some(track)) = (viewport_ref.get(), track_ref.get()) else {
                return;
            };
            let apply = move |next: CarouselBounds| {
                bounds.set(next);
                offset.update(|current| *current = clamp_offset(*current, next));
            };
            apply(measure_bounds(&viewport, &track));

            let watched: [&web_sys::Element; 2] = [&viewport, &track];
            let (viewport_for_resize, track_for_resize) = (viewport.clone(), track.clone());
            let watch = watch_size(&watched, move || apply(measure_bounds(&viewport_for_resize, &track_for_resize)));
            size_watch.set_value(watch);
        });
    }

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        drag.set(Some(DragSession::begin(ev.pointer_id(), f64::from(ev.client_x()), offset.get_untracked())));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some(session) = drag.get_untracked() else {
            return;
        };
        if session.pointer_id != ev.pointer_id() {
            return;
        }
        ev.prevent_default();
        offset.set(session.offset_at(f64::from(ev.client_x()), bounds.get_untracked()));
    };
    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        if drag.with_untracked(|session| session.is_some_and(|s| s.pointer_id == ev.pointer_id())) {
            drag.set(None);
        }
    };

    view! {
        <div
            class="carousel"
            class:carousel--dragging=move || drag.with(Option::is_some)
            node_ref=viewport_ref
        >
            <div
                class="carousel__track"
                node_ref=track_ref
                data-max-drag=move || bounds.get().max_drag_offset().to_string()
                style=move || format!("{} touch-action: pan-y;", track_transform(offset.get()))
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_up
                on:pointerleave=on_pointer_up
            >
                {projects.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </div>
    }
}
