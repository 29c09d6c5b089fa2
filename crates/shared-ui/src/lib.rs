//! Dioxus component kit for the HR portal.
//!
//! Each component lives in `components/<name>/` next to its stylesheet and
//! wraps a `dioxus-primitives` building block where one exists.

pub mod components;

pub use components::*;
