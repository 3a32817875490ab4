//! Byte-level recognizer for empty SVG `<path .../>` elements.
//!
//! This crate only knows how to classify bytes; buffering and output are left to the caller. See
//! [`ScanState::step`] for the transition table.

pub mod state;

pub use state::{Action, ScanState};
