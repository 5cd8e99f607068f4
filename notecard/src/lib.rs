//! Notecard: text-flow layout and index card rendering for recipes.
//!
//! Notecard lays styled text into fixed-width boxes, word by word, and
//! stacks those boxes into a printable recipe card:
//! - Word wrap with hanging indent for wrapped lines
//! - Optional box height with silent truncation on overflow
//! - Pluggable drawing surfaces (pixels, terminal cells, or a recording)
//!
//! # Architecture
//!
//! Everything is measured through the [`Font`] trait and drawn through the
//! [`Surface`] trait. A [`TextBox`] owns its segments and returns the
//! bottom-right corner it occupied, which is how [`card::compose`] places
//! the next section.
//!
//! # Usage
//!
//! ```ignore
//! use notecard::{CardFonts, CardGeometry, CardStyle, render_card};
//!
//! let style = CardStyle { geometry: CardGeometry::default(), fonts, frame: None };
//! let (image, report) = render_card(&recipe, &style);
//! notecard::export::write_pdf(&[image], notecard::export::CARD_PAGE_INCHES, "card.pdf")?;
//! ```

// Core primitives
pub mod primitives;

// Fonts and glyph coverage (fontdue integration)
pub mod text_engine;

// Drawing targets
pub mod surface;
pub mod canvas;
pub mod cells;

// Text-flow layout
pub mod layout;

// Recipe cards and output
pub mod card;
pub mod export;

pub use canvas::Canvas;
pub use card::{
    compose, render_card, CardFonts, CardGeometry, CardReport, CardStyle, Section,
    SectionExtent,
};
pub use cells::{CellFont, CellGrid};
pub use layout::{BoxExtent, Flow, Text, TextBox};
pub use primitives::{Color, Point, Rect, Size};
pub use surface::{DrawList, Surface, TextRun};
pub use text_engine::{
    FaceKind, Font, FontError, FontFamily, FontHandle, FontdueFont, GlyphMask, TextStyle,
};
