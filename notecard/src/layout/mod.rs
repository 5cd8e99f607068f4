//! Text-flow layout.
//!
//! A [`TextBox`] owns styled [`Text`] segments and flows them into a
//! fixed-width region, word by word:
//!
//! ```text
//! TextBox::add(..) x N -> TextBox::render(surface, origin) -> bottom-right
//! ```
//!
//! The returned corner is what callers use to place the next box, so a
//! whole card's vertical layout falls out of chaining render calls.

pub mod text;
pub mod text_box;

pub use text::{Flow, Text};
pub use text_box::{BoxExtent, TextBox};
