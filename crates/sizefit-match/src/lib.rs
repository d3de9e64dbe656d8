#![deny(unsafe_code)]

//! The algorithmic core of the size-chart toolkit: nearest-value matching
//! for the unit converter and header-to-key resolution for table rendering.
//!
//! Both entry points are pure, synchronous, and total: failure modes
//! resolve to `None` or the `"-"` placeholder, never to a panic, because
//! they run once per keystroke in an interactive caller.

pub mod matcher;
pub mod resolver;

pub use matcher::{MatchResult, match_size};
pub use resolver::{PLACEHOLDER, resolve_cell, translate_header};
