//! Text boxes: ordered segments sharing one width, height and line spacing.
//!
//! A box is laid out in a single pass. The cursor starts at the origin,
//! threads through every segment in insertion order, and the box reports
//! the bottom-right corner it occupied so callers can stack boxes.

use std::fmt;

use crate::primitives::{Color, Point, Rect};
use crate::surface::Surface;
use crate::text_engine::{FontHandle, TextStyle};

use super::text::{Flow, Text};

/// Where a box ended up after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxExtent {
    /// Bottom-right corner of the occupied region.
    pub bottom_right: Point,
    /// Cursor position when layout stopped.
    pub cursor: Point,
    /// Whether content was cut off at the bottom of the box.
    pub truncated: bool,
}

/// A layout context owning an ordered sequence of styled segments.
#[derive(Clone)]
pub struct TextBox {
    width: f32,
    /// Zero means unbounded.
    height: f32,
    line_height: f32,
    indent: f32,
    font: FontHandle,
    texts: Vec<Text>,
}

impl TextBox {
    /// Create an empty, vertically unbounded box.
    ///
    /// `font` is used by every segment added without an explicit font.
    pub fn new(width: f32, font: FontHandle) -> Self {
        Self {
            width,
            height: 0.0,
            line_height: 1.0,
            indent: 0.0,
            font,
            texts: Vec::new(),
        }
    }

    /// Limit the box height. Content that would cross the bottom edge is
    /// dropped.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Multiplier applied to the font's line advance.
    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Offset applied to lines that start because of a wrap.
    pub fn indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    pub fn font(&self) -> &FontHandle {
        &self.font
    }

    /// Append plain black text in the box's font.
    pub fn add(&mut self, content: impl Into<String>) -> &mut Self {
        self.push(Text::new(content, self.font.clone()))
    }

    /// Append text in the box's font with a color and style.
    pub fn add_styled(
        &mut self,
        content: impl Into<String>,
        color: Color,
        style: TextStyle,
    ) -> &mut Self {
        let text = Text::new(content, self.font.clone()).color(color).style(style);
        self.push(text)
    }

    /// Append a fully specified segment.
    pub fn push(&mut self, text: Text) -> &mut Self {
        self.texts.push(text);
        self
    }

    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Bounds this box occupies when placed at `origin`.
    pub fn bounds(&self, origin: Point) -> Rect {
        Rect::new(origin, self.width, self.height)
    }

    /// Lay out every segment starting at `origin`.
    ///
    /// Overflow is not an error: layout stops at the first segment that
    /// runs out of room and the box reports its nominal bottom-right.
    /// Unbounded boxes report `cursor.y` plus the last segment's line
    /// height as their bottom.
    pub fn layout<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point) -> BoxExtent {
        let Some(last) = self.texts.last() else {
            return BoxExtent {
                bottom_right: origin,
                cursor: origin,
                truncated: false,
            };
        };

        let bounds = self.bounds(origin);
        let mut cursor = origin;
        let mut truncated = false;

        for (index, text) in self.texts.iter().enumerate() {
            let flow = text.render(surface, &mut cursor, bounds, self.line_height, self.indent);
            if let Flow::Overflow(_) = flow {
                tracing::debug!(
                    segment = index,
                    dropped = self.texts.len() - index - 1,
                    "text box overflowed, truncating"
                );
                truncated = true;
                break;
            }
        }

        let mut bottom_right = bounds.bottom_right();
        if bounds.is_unbounded() {
            bottom_right.y = cursor.y + last.font().space_size().height;
        }

        BoxExtent {
            bottom_right,
            cursor,
            truncated,
        }
    }

    /// Lay out the box and return its bottom-right corner.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point) -> Point {
        self.layout(surface, origin).bottom_right
    }
}

impl fmt::Debug for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBox")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("line_height", &self.line_height)
            .field("indent", &self.indent)
            .field("texts", &self.texts)
            .finish_non_exhaustive()
    }
}
