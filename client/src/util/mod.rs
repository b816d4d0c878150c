//! Utility helpers shared across page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure layout/timing logic lives in plain modules so it can be tested on the
//! host; `observer` isolates the browser-only glue behind the `hydrate`
//! feature.

pub mod drag_bounds;
#[cfg(feature = "hydrate")]
pub mod observer;
pub mod reveal;
pub mod structured_data;
pub mod typewriter;
