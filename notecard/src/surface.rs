//! Drawing targets for laid-out text.
//!
//! The layout engine draws through the [`Surface`] trait. [`DrawList`]
//! records every call without rasterizing, which is what tests and the
//! card composer's dry runs use; [`crate::canvas::Canvas`] paints pixels.

use crate::primitives::{Color, Point, Rect};
use crate::text_engine::{Font, TextStyle};

/// Something text can be drawn onto.
pub trait Surface {
    /// Draw `text` with its top-left corner at `position`.
    fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        style: TextStyle,
        position: Point,
        color: Color,
    );
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        style: TextStyle,
        position: Point,
        color: Color,
    ) {
        (**self).draw_text(font, text, style, position, color);
    }
}

/// A pre-positioned text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub width: f32,
    pub color: Color,
    pub style: TextStyle,
}

impl TextRun {
    pub fn bounds(&self, line_height: f32) -> Rect {
        Rect::new(self.position, self.width, line_height)
    }
}

/// Records draw calls in order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    runs: Vec<TextRun>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Runs that contain something other than whitespace.
    pub fn words(&self) -> impl Iterator<Item = &TextRun> {
        self.runs.iter().filter(|run| !run.text.trim().is_empty())
    }

    /// Find the first run with exactly this text.
    pub fn find(&self, text: &str) -> Option<&TextRun> {
        self.runs.iter().find(|run| run.text == text)
    }

    /// Distinct line tops, in drawing order.
    pub fn line_tops(&self) -> Vec<f32> {
        let mut tops: Vec<f32> = Vec::new();
        for run in self.words() {
            if !tops.contains(&run.position.y) {
                tops.push(run.position.y);
            }
        }
        tops
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

impl Surface for DrawList {
    fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        style: TextStyle,
        position: Point,
        color: Color,
    ) {
        let width = font.measure(text, style).width;
        self.runs.push(TextRun {
            text: text.to_string(),
            position,
            width,
            color,
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_engine::test_support::StubFont;

    #[test]
    fn records_runs_in_order() {
        let font = StubFont::new(5.0, 2.0, 10.0);
        let mut list = DrawList::new();
        list.draw_text(&font, "ab", TextStyle::PLAIN, Point::new(1.0, 2.0), Color::BLACK);
        list.draw_text(&font, " ", TextStyle::PLAIN, Point::new(11.0, 2.0), Color::BLACK);
        list.draw_text(&font, "c", TextStyle::PLAIN.bold(), Point::new(13.0, 12.0), Color::GRAY);

        assert_eq!(list.runs().len(), 3);
        assert_eq!(list.runs()[0].width, 10.0);
        assert_eq!(list.words().count(), 2);
        assert_eq!(list.line_tops(), vec![2.0, 12.0]);
        assert_eq!(list.find("c").map(|r| r.color), Some(Color::GRAY));
    }

    #[test]
    fn mutable_reference_is_a_surface() {
        fn draw_into(mut surface: impl Surface, font: &dyn Font) {
            surface.draw_text(font, "x", TextStyle::PLAIN, Point::ORIGIN, Color::BLACK);
        }

        let font = StubFont::new(5.0, 2.0, 10.0);
        let mut list = DrawList::new();
        draw_into(&mut list, &font);
        assert_eq!(list.runs().len(), 1);
        let run = &list.runs()[0];
        assert_eq!(run.bounds(10.0), Rect::new(Point::ORIGIN, 5.0, 10.0));
    }
}
