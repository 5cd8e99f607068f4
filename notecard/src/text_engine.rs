//! Text measurement and glyph coverage.
//!
//! The layout engine only ever talks to the [`Font`] trait: measure a run of
//! text in a given style, or rasterize it into a coverage mask. Style is an
//! explicit argument everywhere so measuring and drawing can never disagree.
//!
//! [`FontdueFont`] is the production implementation. Faces are parsed once
//! and shared between sizes, so a card's title, body and small fonts can all
//! come from the same file without parsing it twice.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::primitives::Size;

/// Horizontal shear applied per pixel of height when synthesizing italics.
const SYNTHETIC_SLANT: f32 = 0.2;

/// Shared, immutable font handle as stored by text segments.
pub type FontHandle = Arc<dyn Font>;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font {}: {message}", .path.display())]
    Parse { path: PathBuf, message: &'static str },

    #[error("font size must be positive, got {0}")]
    InvalidSize(f32),
}

/// Style flags applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        underline: false,
    };

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// An 8-bit coverage bitmap for one rendered run, anchored at the run's
/// top-left corner (the position passed to `draw_text`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; (width * height) as usize],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.coverage[(y * self.width + x) as usize]
    }

    /// Merge a glyph bitmap at (x, y), keeping the strongest coverage.
    /// Pixels falling outside the mask are dropped.
    pub fn stamp(&mut self, x: i32, y: i32, width: usize, height: usize, bitmap: &[u8]) {
        for row in 0..height {
            let ty = y + row as i32;
            if ty < 0 || ty >= self.height as i32 {
                continue;
            }
            for col in 0..width {
                let tx = x + col as i32;
                if tx < 0 || tx >= self.width as i32 {
                    continue;
                }
                let idx = (ty as u32 * self.width + tx as u32) as usize;
                self.coverage[idx] = self.coverage[idx].max(bitmap[row * width + col]);
            }
        }
    }

    /// Fill whole rows with full coverage (used for underlines).
    pub fn fill_rows(&mut self, top: u32, rows: u32) {
        for y in top..(top + rows).min(self.height) {
            let start = (y * self.width) as usize;
            self.coverage[start..start + self.width as usize].fill(255);
        }
    }

    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c == 0)
    }
}

/// Measurement and rasterization capability consumed by the layout engine.
pub trait Font: Send + Sync {
    /// Size of `text` rendered in `style`.
    fn measure(&self, text: &str, style: TextStyle) -> Size;

    /// Coverage mask for `text` rendered in `style`.
    fn rasterize(&self, text: &str, style: TextStyle) -> GlyphMask;

    /// Size of a plain space. The height is the base line-advance unit.
    fn space_size(&self) -> Size {
        self.measure(" ", TextStyle::PLAIN)
    }
}

// =========================================================================
// fontdue implementation
// =========================================================================

/// Which face of a family to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// Parsed faces of one family. Missing styled faces are synthesized from
/// the regular face at draw time.
pub struct FontFamily {
    regular: fontdue::Font,
    bold: Option<fontdue::Font>,
    italic: Option<fontdue::Font>,
    bold_italic: Option<fontdue::Font>,
}

impl FontFamily {
    /// Load a family from its regular face.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        Ok(Self {
            regular: parse_face(path)?,
            bold: None,
            italic: None,
            bold_italic: None,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let regular = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|message| FontError::Parse {
                path: PathBuf::from("<memory>"),
                message,
            })?;
        Ok(Self {
            regular,
            bold: None,
            italic: None,
            bold_italic: None,
        })
    }

    /// Add a styled face from a file.
    pub fn with_face(mut self, kind: FaceKind, path: &Path) -> Result<Self, FontError> {
        let face = parse_face(path)?;
        match kind {
            FaceKind::Regular => self.regular = face,
            FaceKind::Bold => self.bold = Some(face),
            FaceKind::Italic => self.italic = Some(face),
            FaceKind::BoldItalic => self.bold_italic = Some(face),
        }
        Ok(self)
    }

    /// Pick the best face for `style` and report what must be synthesized.
    fn select(&self, style: TextStyle) -> (&fontdue::Font, Synthesis) {
        match (style.bold, style.italic) {
            (true, true) => {
                if let Some(face) = &self.bold_italic {
                    (face, Synthesis::NONE)
                } else if let Some(face) = &self.bold {
                    (face, Synthesis { bold: false, italic: true })
                } else if let Some(face) = &self.italic {
                    (face, Synthesis { bold: true, italic: false })
                } else {
                    (&self.regular, Synthesis { bold: true, italic: true })
                }
            }
            (true, false) => match &self.bold {
                Some(face) => (face, Synthesis::NONE),
                None => (&self.regular, Synthesis { bold: true, italic: false }),
            },
            (false, true) => match &self.italic {
                Some(face) => (face, Synthesis::NONE),
                None => (&self.regular, Synthesis { bold: false, italic: true }),
            },
            (false, false) => (&self.regular, Synthesis::NONE),
        }
    }
}

fn parse_face(path: &Path) -> Result<fontdue::Font, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let face = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(
        |message| FontError::Parse {
            path: path.to_path_buf(),
            message,
        },
    )?;
    tracing::debug!(path = %path.display(), "loaded font face");
    Ok(face)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Synthesis {
    bold: bool,
    italic: bool,
}

impl Synthesis {
    const NONE: Self = Self { bold: false, italic: false };
}

/// A font family at a fixed pixel size.
#[derive(Clone)]
pub struct FontdueFont {
    family: Arc<FontFamily>,
    px: f32,
    ascent: f32,
    line_height: f32,
}

impl FontdueFont {
    pub fn new(family: Arc<FontFamily>, px: f32) -> Result<Self, FontError> {
        if !(px > 0.0) {
            return Err(FontError::InvalidSize(px));
        }
        let (ascent, line_height) = match family.regular.horizontal_line_metrics(px) {
            Some(metrics) => (metrics.ascent, metrics.new_line_size),
            None => (px * 0.8, px * 1.2),
        };
        Ok(Self {
            family,
            px,
            ascent,
            line_height,
        })
    }

    /// Same family at a different size.
    pub fn at_size(&self, px: f32) -> Result<Self, FontError> {
        Self::new(Arc::clone(&self.family), px)
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    pub fn into_handle(self) -> FontHandle {
        Arc::new(self)
    }

    /// Extra advance added by synthetic emboldening.
    fn embolden_offset(&self) -> f32 {
        (self.px / 24.0).max(1.0).round()
    }

    fn advance(face: &fontdue::Font, text: &str, px: f32) -> f32 {
        let mut width = 0.0;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = prev {
                width += face.horizontal_kern(left, ch, px).unwrap_or(0.0);
            }
            width += face.metrics(ch, px).advance_width;
            prev = Some(ch);
        }
        width
    }
}

impl Font for FontdueFont {
    fn measure(&self, text: &str, style: TextStyle) -> Size {
        let (face, synthesis) = self.family.select(style);
        let mut width = Self::advance(face, text, self.px);
        if synthesis.bold && !text.is_empty() {
            width += self.embolden_offset();
        }
        Size::new(width, self.line_height)
    }

    fn rasterize(&self, text: &str, style: TextStyle) -> GlyphMask {
        let (face, synthesis) = self.family.select(style);
        let size = self.measure(text, style);
        let slant_room = if synthesis.italic { self.ascent * SYNTHETIC_SLANT } else { 0.0 };
        let mut mask = GlyphMask::new(
            (size.width + slant_room).ceil().max(0.0) as u32,
            size.height.ceil().max(0.0) as u32,
        );
        if mask.width == 0 || mask.height == 0 {
            return mask;
        }

        let baseline = self.ascent;
        let mut pen = 0.0f32;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = prev {
                pen += face.horizontal_kern(left, ch, self.px).unwrap_or(0.0);
            }
            let (metrics, bitmap) = face.rasterize(ch, self.px);
            let glyph_x = (pen + metrics.xmin as f32).round() as i32;
            let glyph_y = (baseline - (metrics.ymin as f32 + metrics.height as f32)).round() as i32;

            if synthesis.italic {
                // Shear row by row: rows above the baseline lean right.
                for row in 0..metrics.height {
                    let row_y = glyph_y + row as i32;
                    let shift = ((baseline - row_y as f32) * SYNTHETIC_SLANT).round() as i32;
                    let start = row * metrics.width;
                    let line = &bitmap[start..start + metrics.width];
                    mask.stamp(glyph_x + shift, row_y, metrics.width, 1, line);
                    if synthesis.bold {
                        let offset = self.embolden_offset() as i32;
                        mask.stamp(glyph_x + shift + offset, row_y, metrics.width, 1, line);
                    }
                }
            } else {
                mask.stamp(glyph_x, glyph_y, metrics.width, metrics.height, &bitmap);
                if synthesis.bold {
                    let offset = self.embolden_offset() as i32;
                    mask.stamp(glyph_x + offset, glyph_y, metrics.width, metrics.height, &bitmap);
                }
            }

            pen += metrics.advance_width;
            prev = Some(ch);
        }

        if style.underline {
            let thickness = (self.px / 16.0).max(1.0).round() as u32;
            let top = (baseline + thickness as f32).round() as u32;
            mask.fill_rows(top, thickness);
        }

        mask
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Fixed-metric fonts for layout tests.

    use std::collections::HashMap;
    use std::sync::Arc;

    use super::{Font, FontHandle, GlyphMask, TextStyle};
    use crate::primitives::Size;

    /// Every character is `char_width` wide unless the whole word has an
    /// explicit width. Bold adds `bold_extra` to non-empty runs.
    #[derive(Debug, Clone)]
    pub struct StubFont {
        pub char_width: f32,
        pub space_width: f32,
        pub line: f32,
        pub bold_extra: f32,
        pub words: HashMap<String, f32>,
    }

    impl StubFont {
        pub fn new(char_width: f32, space_width: f32, line: f32) -> Self {
            Self {
                char_width,
                space_width,
                line,
                bold_extra: 0.0,
                words: HashMap::new(),
            }
        }

        pub fn word(mut self, word: &str, width: f32) -> Self {
            self.words.insert(word.to_string(), width);
            self
        }

        pub fn bold_extra(mut self, extra: f32) -> Self {
            self.bold_extra = extra;
            self
        }

        pub fn handle(self) -> FontHandle {
            Arc::new(self)
        }
    }

    impl Font for StubFont {
        fn measure(&self, text: &str, style: TextStyle) -> Size {
            let mut width = if text == " " {
                self.space_width
            } else if let Some(&w) = self.words.get(text) {
                w
            } else {
                text.chars().count() as f32 * self.char_width
            };
            if style.bold && !text.is_empty() {
                width += self.bold_extra;
            }
            Size::new(width, self.line)
        }

        fn rasterize(&self, text: &str, style: TextStyle) -> GlyphMask {
            let size = self.measure(text, style);
            GlyphMask::new(size.width as u32, size.height as u32)
        }
    }
}
