//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` is the composition root that stacks
//! the sections from `components` in reading order.

pub mod home;
