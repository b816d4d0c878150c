//! Page sections and the presentational primitives they share.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component here is a function from the constants in `data` to a
//! view tree. Only the carousel (drag offset, bounds) and the tagline
//! (displayed text) hold local state; entrance wrappers hold a one-way
//! `revealed` flag.

pub mod animated_section;
pub mod experience;
pub mod external_link;
pub mod footer;
pub mod header;
pub mod hero;
pub mod project_card;
pub mod project_carousel;
pub mod projects;
pub mod skills;
pub mod tagline;
