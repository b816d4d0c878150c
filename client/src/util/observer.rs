//! Browser observers driving reveals and carousel measurement.
//!
//! Requires a browser environment. Observer construction failures are
//! logged and degrade to "show everything" / "no drag range".

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ResizeObserver};

use crate::util::drag_bounds::CarouselBounds;
use crate::util::reveal::RevealState;

/// Call `on_reveal` the first time `element` is at least `threshold` visible,
/// then stop observing.
pub fn reveal_once<F>(element: &Element, threshold: f64, on_reveal: F)
where
    F: Fn() + Clone + 'static,
{
    let mut state = RevealState::new(threshold);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(state.threshold()));

    let reveal = on_reveal.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if state.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                    observer.disconnect();
                    reveal();
                    return;
                }
            }
        },
    );

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            // Lives until the observer disconnects itself on reveal.
            callback.forget();
        }
        Err(err) => {
            log::debug!("intersection observer unavailable, revealing immediately: {err:?}");
            on_reveal();
        }
    }
}

/// A live `ResizeObserver`; disconnects when dropped.
pub struct SizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
}

impl Drop for SizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Run `on_resize` whenever any of `elements` changes size.
pub fn watch_size<F>(elements: &[&Element], mut on_resize: F) -> Option<SizeWatch>
where
    F: FnMut() + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, ResizeObserver)>::new(
        move |_entries: js_sys::Array, _observer: ResizeObserver| on_resize(),
    );
    match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for element in elements {
                observer.observe(element);
            }
            Some(SizeWatch { observer, _callback: callback })
        }
        Err(err) => {
            log::debug!("resize observer unavailable, bounds fixed at mount: {err:?}");
            None
        }
    }
}

/// Drag bounds for `track` laid out inside `viewport`.
pub fn measure_bounds(viewport: &HtmlElement, track: &HtmlElement) -> CarouselBounds {
    CarouselBounds::measure(f64::from(track.scroll_width()), f64::from(viewport.client_width()))
}
