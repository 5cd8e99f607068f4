//! Terminal cell layout.
//!
//! [`CellFont`] measures text in terminal columns (1 for Latin, 2 for CJK,
//! 0 for combining marks) so the same text-flow engine that lays out cards
//! can wrap text for a terminal. [`CellGrid`] is the matching surface: a
//! grid of styled characters that grows downward as lines are written.

use std::sync::Arc;

use unicode_width::UnicodeWidthChar;

use crate::primitives::{Color, Point, Size};
use crate::surface::Surface;
use crate::text_engine::{Font, FontHandle, GlyphMask, TextStyle};

/// Display width in cell units.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}

/// Monospace metrics: one unit per terminal column, one unit per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellFont;

impl CellFont {
    pub fn handle() -> FontHandle {
        Arc::new(CellFont)
    }
}

impl Font for CellFont {
    fn measure(&self, text: &str, _style: TextStyle) -> Size {
        Size::new(display_width(text) as f32, 1.0)
    }

    fn rasterize(&self, text: &str, style: TextStyle) -> GlyphMask {
        let mut mask = GlyphMask::new(self.measure(text, style).width as u32, 1);
        mask.fill_rows(0, 1);
        mask
    }
}

/// One occupied terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Glyph { ch: char, color: Color, style: TextStyle },
    /// Right half of a double-width glyph.
    Continuation,
}

/// A fixed-width, growable grid of styled cells.
#[derive(Debug, Clone)]
pub struct CellGrid {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl CellGrid {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Make sure at least `height` rows exist.
    pub fn ensure_height(&mut self, height: usize) {
        while self.rows.len() < height {
            self.rows.push(vec![Cell::Blank; self.width]);
        }
    }

    /// Plain text of each row, trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let line: String = row
                    .iter()
                    .filter_map(|cell| match cell {
                        Cell::Blank => Some(' '),
                        Cell::Glyph { ch, .. } => Some(*ch),
                        Cell::Continuation => None,
                    })
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    fn put(&mut self, x: usize, y: usize, cell: Cell) {
        if x >= self.width {
            return;
        }
        self.ensure_height(y + 1);
        self.rows[y][x] = cell;
    }
}

impl Surface for CellGrid {
    fn draw_text(
        &mut self,
        _font: &dyn Font,
        text: &str,
        style: TextStyle,
        position: Point,
        color: Color,
    ) {
        if position.x < 0.0 || position.y < 0.0 {
            return;
        }
        let y = position.y.round() as usize;
        let mut x = position.x.round() as usize;
        for ch in text.chars() {
            let width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if width == 0 {
                continue;
            }
            if x + width > self.width {
                break;
            }
            self.put(x, y, Cell::Glyph { ch, color, style });
            if width == 2 {
                self.put(x + 1, y, Cell::Continuation);
            }
            x += width;
        }
    }
}
