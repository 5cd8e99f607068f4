//! Styled text segments and the word-wrap pass for a single segment.

use std::fmt;

use crate::primitives::{Color, Point, Rect};
use crate::surface::Surface;
use crate::text_engine::{FontHandle, TextStyle};

/// Outcome of laying out one segment.
///
/// Both variants carry the cursor where layout stopped. `Overflow` means
/// the next word would have crossed the bottom of the bounds and nothing
/// further from the segment was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Complete(Point),
    Overflow(Point),
}

impl Flow {
    pub fn cursor(self) -> Point {
        match self {
            Flow::Complete(cursor) | Flow::Overflow(cursor) => cursor,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Flow::Overflow(_))
    }
}

/// One styled run of text within a [`super::TextBox`].
#[derive(Clone)]
pub struct Text {
    content: String,
    font: FontHandle,
    color: Color,
    style: TextStyle,
}

impl Text {
    /// Create a plain black segment.
    pub fn new(content: impl Into<String>, font: FontHandle) -> Self {
        Self {
            content: content.into(),
            font,
            color: Color::BLACK,
            style: TextStyle::PLAIN,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.style.underline = true;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font(&self) -> &FontHandle {
        &self.font
    }

    pub fn text_color(&self) -> Color {
        self.color
    }

    pub fn text_style(&self) -> TextStyle {
        self.style
    }

    /// Lay this segment out starting at `cursor`, wrapping inside `bounds`.
    ///
    /// `cursor` is updated in place and its final value is also returned
    /// inside the [`Flow`]. Explicit newlines return to `bounds.left()`;
    /// only width-induced wraps are shifted by `indent`. A zero-height
    /// `bounds` never overflows.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cursor: &mut Point,
        bounds: Rect,
        line_height: f32,
        indent: f32,
    ) -> Flow {
        let space = self.font.space_size();
        let advance = space.height * line_height;
        // Spaces keep the underline so it stays continuous across words.
        let space_style = TextStyle {
            underline: self.style.underline,
            ..TextStyle::PLAIN
        };

        let lines: Vec<&str> = self.content.split('\n').collect();
        for (line_idx, line) in lines.iter().enumerate() {
            let words: Vec<&str> = line.split(' ').collect();
            for (word_idx, word) in words.iter().enumerate() {
                let width = self.font.measure(word, self.style).width;

                if cursor.x - bounds.left() + width > bounds.width() {
                    cursor.x = bounds.left() + indent;
                    cursor.y += advance;
                }

                if !bounds.is_unbounded() && cursor.y + space.height >= bounds.bottom() {
                    return Flow::Overflow(*cursor);
                }

                if !word.is_empty() {
                    surface.draw_text(self.font.as_ref(), word, self.style, *cursor, self.color);
                }
                cursor.x += width;

                if word_idx + 1 < words.len() {
                    surface.draw_text(self.font.as_ref(), " ", space_style, *cursor, self.color);
                    cursor.x += space.width;
                }
            }

            if line_idx + 1 < lines.len() {
                cursor.x = bounds.left();
                cursor.y += advance;
            }
        }

        Flow::Complete(*cursor)
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("content", &self.content)
            .field("color", &self.color)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
