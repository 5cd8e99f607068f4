//! Cocktails - command line tools for a cocktail recipe library.
//!
//! The binary lives in `main.rs`; this library holds the pieces that are
//! worth testing on their own.

pub mod config;
pub mod terminal;
