//! Raster canvas backed by an RGB image buffer.

use image::imageops::{self, FilterType};
use image::{RgbImage, RgbaImage};

use crate::primitives::{Color, Point, Rect, Size};
use crate::surface::Surface;
use crate::text_engine::{Font, GlyphMask, TextStyle};

/// An opaque RGB drawing surface.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.image.get_pixel(x, y)).into()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = color.into();
        }
    }

    /// Fill `rect`, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, color.into());
            }
        }
    }

    /// Draw the outline of `rect` with the given stroke thickness.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        let t = thickness.max(1.0);
        let left = rect.left();
        let top = rect.top();
        self.fill_rect(Rect::new(rect.top_left, rect.width(), t), color);
        self.fill_rect(Rect::new(Point::new(left, rect.bottom() - t), rect.width(), t), color);
        self.fill_rect(Rect::new(rect.top_left, t, rect.height()), color);
        self.fill_rect(Rect::new(Point::new(rect.right() - t, top), t, rect.height()), color);
    }

    /// Scale `source` into `dest`, alpha-compositing over what is there.
    pub fn blit_scaled(&mut self, source: &RgbaImage, dest: Rect) {
        let width = dest.width().round() as u32;
        let height = dest.height().round() as u32;
        if width == 0 || height == 0 {
            return;
        }
        let scaled = imageops::resize(source, width, height, FilterType::Triangle);
        let ox = dest.left().round() as i64;
        let oy = dest.top().round() as i64;
        for (sx, sy, pixel) in scaled.enumerate_pixels() {
            let x = ox + sx as i64;
            let y = oy + sy as i64;
            if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
                continue;
            }
            let [r, g, b, a] = pixel.0;
            let under = self.pixel(x as u32, y as u32);
            let over = Color::rgb8(r, g, b).blend_over(under, a);
            self.image.put_pixel(x as u32, y as u32, over.into());
        }
    }

    /// Paint a coverage mask with its top-left corner at `position`.
    pub fn blend_mask(&mut self, mask: &GlyphMask, position: Point, color: Color) {
        let ox = position.x.round() as i64;
        let oy = position.y.round() as i64;
        for my in 0..mask.height {
            let y = oy + my as i64;
            if y < 0 || y >= self.height() as i64 {
                continue;
            }
            for mx in 0..mask.width {
                let x = ox + mx as i64;
                if x < 0 || x >= self.width() as i64 {
                    continue;
                }
                let coverage = mask.get(mx, my);
                if coverage == 0 {
                    continue;
                }
                let under = self.pixel(x as u32, y as u32);
                let over = color.blend_over(under, coverage);
                self.image.put_pixel(x as u32, y as u32, over.into());
            }
        }
    }

    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.left().round().max(0.0) as u32;
        let y0 = rect.top().round().max(0.0) as u32;
        let x1 = (rect.right().round().max(0.0) as u32).min(self.width());
        let y1 = (rect.bottom().round().max(0.0) as u32).min(self.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

impl Surface for Canvas {
    fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        style: TextStyle,
        position: Point,
        color: Color,
    ) {
        let mask = font.rasterize(text, style);
        self.blend_mask(&mask, position, color);
    }
}
