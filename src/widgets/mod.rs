//! Reusable widgets wrapping third-party building blocks.

pub mod editor;
