//! Recipe index card composition.
//!
//! A card is a column of text boxes stacked top to bottom. Each box is laid
//! out unbounded and the next one starts below the previous box's
//! bottom-right corner, plus a fixed gap. Ingredients and details share a
//! row and the row ends below whichever column is taller.

use std::sync::Arc;

use cocktails_recipe::{title_case, Ingredient, Recipe};
use image::{RgbImage, RgbaImage};

use crate::canvas::Canvas;
use crate::layout::TextBox;
use crate::primitives::{Color, Point, Rect};
use crate::surface::Surface;
use crate::text_engine::{FontError, FontFamily, FontHandle, FontdueFont, TextStyle};

/// Frame artwork size the layout constants were tuned for, in pixels.
pub const DEFAULT_FRAME_SIZE: (u32, u32) = (3600, 2400);

/// Scale applied to the frame artwork and every layout constant.
pub const DEFAULT_SCALE: f32 = 0.5;

/// Card size and the spacing derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl CardGeometry {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self { width, height, scale }
    }

    /// Geometry for frame artwork of the given pixel size.
    pub fn for_frame(frame_width: u32, frame_height: u32, scale: f32) -> Self {
        Self::new(frame_width as f32 * scale, frame_height as f32 * scale, scale)
    }

    /// White space around the frame artwork.
    pub fn border(&self) -> f32 {
        100.0 * self.scale
    }

    /// Distance from the card edge to the text.
    pub fn margin(&self) -> f32 {
        200.0 * self.scale + self.border()
    }

    /// Vertical gap between sections.
    pub fn spacing(&self) -> f32 {
        60.0 * self.scale
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margin() * 2.0
    }

    /// Top edge of the source line, which is pinned to the bottom margin.
    pub fn footer_top(&self) -> f32 {
        self.height - self.margin()
    }

    /// Where the frame artwork is drawn.
    pub fn frame_rect(&self) -> Rect {
        Rect::new(Point::ORIGIN, self.width, self.height).inset(self.border())
    }

    /// Whole-pixel canvas size.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }
}

impl Default for CardGeometry {
    fn default() -> Self {
        Self::for_frame(DEFAULT_FRAME_SIZE.0, DEFAULT_FRAME_SIZE.1, DEFAULT_SCALE)
    }
}

/// The three type sizes a card uses.
#[derive(Clone)]
pub struct CardFonts {
    pub title: FontHandle,
    pub body: FontHandle,
    pub small: FontHandle,
}

impl CardFonts {
    pub fn new(title: FontHandle, body: FontHandle, small: FontHandle) -> Self {
        Self { title, body, small }
    }

    /// Title at 150, body at 75 and small print at 50 pixels, all scaled.
    pub fn from_families(
        title: Arc<FontFamily>,
        body: Arc<FontFamily>,
        scale: f32,
    ) -> Result<Self, FontError> {
        let body_font = FontdueFont::new(body, 75.0 * scale)?;
        Ok(Self {
            title: FontdueFont::new(title, 150.0 * scale)?.into_handle(),
            small: body_font.at_size(50.0 * scale)?.into_handle(),
            body: body_font.into_handle(),
        })
    }
}

/// Everything needed to paint a card besides the recipe.
#[derive(Clone)]
pub struct CardStyle {
    pub geometry: CardGeometry,
    pub fonts: CardFonts,
    /// Decorative frame drawn inside the border. A thin rule is drawn
    /// instead when absent.
    pub frame: Option<RgbaImage>,
}

/// Named regions of a card, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Author,
    Version,
    Title,
    Description,
    Ingredients,
    Details,
    Instructions,
    Notes,
    Source,
}

/// Vertical span a section occupied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f32,
    pub bottom: f32,
}

/// Result of composing one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardReport {
    pub sections: Vec<SectionExtent>,
    /// Layout cursor after the last flowing section.
    pub bottom: f32,
    /// Flowing content reached the source line.
    pub overflow: bool,
}

impl CardReport {
    pub fn section(&self, section: Section) -> Option<&SectionExtent> {
        self.sections.iter().find(|extent| extent.section == section)
    }
}

/// Append one ingredient line: bullet, measure, bold name, then the
/// suggestion, other examples and notes in italics.
pub fn add_ingredient(text_box: &mut TextBox, ingredient: &Ingredient, bullet: &str) {
    add_ingredient_with_measure(text_box, ingredient, bullet, &ingredient.measure_label());
}

/// Like [`add_ingredient`], with the quantity and unit text supplied by the
/// caller.
pub fn add_ingredient_with_measure(
    text_box: &mut TextBox,
    ingredient: &Ingredient,
    bullet: &str,
    measure: &str,
) {
    let mut lead = format!("{bullet} ");
    if !measure.is_empty() {
        lead.push_str(measure);
        lead.push(' ');
    }
    text_box.add(lead);
    text_box.add_styled(ingredient.ingredient.as_str(), Color::BLACK, TextStyle::PLAIN.bold());

    let italic = TextStyle::PLAIN.italic();
    if let Some(suggested) = &ingredient.suggested {
        text_box.add_styled(format!(" ({suggested})"), Color::BLACK, italic);
    }
    let others = ingredient.other_examples();
    if !others.is_empty() {
        text_box.add_styled(format!(" [e.g. {}]", others.join(", ")), Color::BLACK, italic);
    }
    if let Some(notes) = &ingredient.notes {
        text_box.add_styled(format!(", {notes}"), Color::GRAY, italic);
    }
    text_box.add("\n");
}

/// Detail lines shown beside the ingredients: yield, preparation, how it
/// is served and the glass. Empty when the recipe records none of them.
pub fn detail_lines(recipe: &Recipe) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(yields) = recipe.yield_label() {
        lines.push(format!("Yield: {yields}"));
    }
    if let Some(preparation) = recipe.preparation {
        lines.push(format!("Preparation: {}", title_case(preparation.as_str())));
    }
    if let Some(served) = recipe.served {
        lines.push(format!("Served: {}", title_case(served.as_str())));
    }
    if let Some(glass) = recipe.glass {
        lines.push(format!("In a: {} Glass", title_case(glass.as_str())));
    }
    lines
}

/// Lay a recipe out onto `surface`.
pub fn compose<S: Surface + ?Sized>(
    recipe: &Recipe,
    fonts: &CardFonts,
    geometry: &CardGeometry,
    surface: &mut S,
) -> CardReport {
    let margin = geometry.margin();
    let spacing = geometry.spacing();
    let content_width = geometry.content_width();
    let italic = TextStyle::PLAIN.italic();

    let mut sections = Vec::new();
    let mut y = margin;

    if let Some(author) = &recipe.author {
        let mut text_box = TextBox::new(content_width, fonts.body.clone());
        text_box.add_styled(format!("{author}'s"), Color::GRAY, italic);
        y = place(&mut sections, surface, Section::Author, &text_box, Point::new(margin, y));
    }

    // Right-aligned by eye; the box is a quarter of the card wide.
    let mut version = TextBox::new(geometry.width / 4.0, fonts.small.clone());
    version.add_styled(format!("Version: {}", recipe.version), Color::GRAY, italic);
    let version_x = geometry.width - margin - 200.0 * geometry.scale;
    place(&mut sections, surface, Section::Version, &version, Point::new(version_x, y));

    let mut title = TextBox::new(content_width, fonts.title.clone());
    title.add_styled(recipe.title.as_str(), Color::BLACK, TextStyle::PLAIN.underline());
    y = place(&mut sections, surface, Section::Title, &title, Point::new(margin, y)) + spacing;

    if let Some(description) = &recipe.description {
        let mut text_box = TextBox::new(content_width, fonts.body.clone());
        text_box.add(description.as_str());
        let origin = Point::new(margin, y);
        y = place(&mut sections, surface, Section::Description, &text_box, origin) + spacing;
    }

    let mut ingredients = TextBox::new(geometry.width / 2.0, fonts.body.clone())
        .line_height(1.2)
        .indent(20.0);
    for ingredient in &recipe.ingredients {
        add_ingredient(&mut ingredients, ingredient, "•");
    }
    let origin = Point::new(margin, y);
    let left = place(&mut sections, surface, Section::Ingredients, &ingredients, origin);

    let details = detail_lines(recipe);
    let right = if details.is_empty() {
        y
    } else {
        let mut text_box = TextBox::new(geometry.width / 2.0 - margin * 2.0, fonts.body.clone())
            .line_height(1.2)
            .indent(20.0);
        for line in details {
            text_box.add(format!("{line}\n"));
        }
        let origin = Point::new(geometry.width / 2.0 + margin * 2.0, y);
        place(&mut sections, surface, Section::Details, &text_box, origin)
    };
    y = left.max(right) + spacing;

    let mut instructions = TextBox::new(content_width, fonts.body.clone())
        .line_height(1.2)
        .indent(20.0);
    for step in recipe.numbered_instructions() {
        instructions.add(format!("{step}\n"));
    }
    let origin = Point::new(margin, y);
    y = place(&mut sections, surface, Section::Instructions, &instructions, origin) + spacing;

    if let Some(notes) = &recipe.notes {
        let mut text_box = TextBox::new(content_width, fonts.body.clone());
        text_box.add_styled(notes.as_str(), Color::BLACK, TextStyle::PLAIN.italic());
        y = place(&mut sections, surface, Section::Notes, &text_box, Point::new(margin, y));
    }

    let footer_top = geometry.footer_top();
    if let Some(source) = &recipe.source {
        let mut text_box = TextBox::new(content_width, fonts.small.clone());
        text_box.add_styled(format!("Source: {source}"), Color::GRAY, italic);
        let origin = Point::new(margin, footer_top);
        place(&mut sections, surface, Section::Source, &text_box, origin);
    }

    let overflow = y > footer_top;
    if overflow {
        tracing::warn!(
            title = %recipe.title,
            bottom = y,
            limit = footer_top,
            "card content overflows"
        );
    }

    CardReport {
        sections,
        bottom: y,
        overflow,
    }
}

/// Render `text_box` at `origin` and record the span it covered.
fn place<S: Surface + ?Sized>(
    sections: &mut Vec<SectionExtent>,
    surface: &mut S,
    section: Section,
    text_box: &TextBox,
    origin: Point,
) -> f32 {
    let bottom = text_box.render(surface, origin).y;
    sections.push(SectionExtent {
        section,
        top: origin.y,
        bottom,
    });
    bottom
}

/// Paint a complete card: white background, frame, then the recipe text.
pub fn render_card(recipe: &Recipe, style: &CardStyle) -> (RgbImage, CardReport) {
    let geometry = &style.geometry;
    let (width, height) = geometry.pixel_size();
    let mut canvas = Canvas::new(width, height, Color::WHITE);

    let frame_rect = geometry.frame_rect();
    match &style.frame {
        Some(frame) => canvas.blit_scaled(frame, frame_rect),
        None => canvas.stroke_rect(frame_rect, 4.0 * geometry.scale, Color::GRAY),
    }

    let report = compose(recipe, &style.fonts, geometry, &mut canvas);
    tracing::debug!(title = %recipe.title, width, height, "rendered card");
    (canvas.into_image(), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawList;
    use crate::text_engine::test_support::StubFont;
    use cocktails_recipe::{Glass, Unit};

    fn fonts() -> CardFonts {
        CardFonts::new(
            StubFont::new(20.0, 10.0, 40.0).handle(),
            StubFont::new(10.0, 5.0, 20.0).handle(),
            StubFont::new(6.0, 3.0, 10.0).handle(),
        )
    }

    fn geometry() -> CardGeometry {
        CardGeometry::new(1800.0, 1200.0, 0.5)
    }

    fn ingredient(name: &str, quantity: f64) -> Ingredient {
        let mut ingredient = Ingredient::new(name);
        ingredient.quantity = Some(quantity);
        ingredient.unit = Some(Unit::Ounce);
        ingredient
    }

    fn highball() -> Recipe {
        let mut recipe = Recipe::new("House Highball", 2);
        recipe.author = Some("Bob".into());
        recipe.yields = Some(1);
        recipe.glass = Some(Glass::Highball);
        recipe.source = Some("House book".into());
        recipe.ingredients = vec![ingredient("Gin", 2.0), ingredient("Tonic", 4.0)];
        recipe.instructions = vec!["Build over ice.".into()];
        recipe
    }

    fn position(list: &DrawList, text: &str) -> Point {
        list.find(text).map(|run| run.position).unwrap()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[test]
    fn geometry_scales_constants() {
        let geometry = geometry();
        assert_eq!(geometry.border(), 50.0);
        assert_eq!(geometry.margin(), 150.0);
        assert_eq!(geometry.spacing(), 30.0);
        assert_eq!(geometry.content_width(), 1500.0);
        assert_eq!(geometry.footer_top(), 1050.0);
        assert_eq!(geometry.frame_rect(), Rect::new(Point::new(50.0, 50.0), 1700.0, 1100.0));
    }

    #[test]
    fn default_geometry_is_a_six_by_four_card() {
        let geometry = CardGeometry::default();
        assert_eq!(geometry.pixel_size(), (1800, 1200));
    }

    // =========================================================================
    // Composition
    // =========================================================================

    #[test]
    fn header_stacks_author_version_and_title() {
        let mut list = DrawList::new();
        compose(&highball(), &fonts(), &geometry(), &mut list);

        let author = list.find("Bob's").unwrap();
        assert_eq!(author.position, Point::new(150.0, 150.0));
        assert_eq!(author.color, Color::GRAY);
        assert!(author.style.italic);

        assert_eq!(position(&list, "Version:"), Point::new(1550.0, 170.0));

        let title = list.find("House").unwrap();
        assert_eq!(title.position, Point::new(150.0, 170.0));
        assert!(title.style.underline);
    }

    #[test]
    fn ingredients_and_details_share_a_row() {
        let mut list = DrawList::new();
        let report = compose(&highball(), &fonts(), &geometry(), &mut list);

        assert_eq!(position(&list, "•"), Point::new(150.0, 240.0));
        let gin = list.find("Gin").unwrap();
        assert_eq!(gin.position, Point::new(245.0, 240.0));
        assert!(gin.style.bold);
        assert_eq!(position(&list, "Tonic"), Point::new(245.0, 264.0));

        assert_eq!(position(&list, "Yield:"), Point::new(1200.0, 240.0));
        assert_eq!(position(&list, "In"), Point::new(1200.0, 264.0));

        let ingredients = report.section(Section::Ingredients).unwrap();
        assert_eq!((ingredients.top, ingredients.bottom), (240.0, 308.0));
        assert_eq!(report.section(Section::Details).map(|s| s.bottom), Some(308.0));
    }

    #[test]
    fn instructions_follow_taller_column() {
        let mut list = DrawList::new();
        let report = compose(&highball(), &fonts(), &geometry(), &mut list);

        assert_eq!(position(&list, "1."), Point::new(150.0, 338.0));
        assert_eq!(report.bottom, 412.0);
        assert!(!report.overflow);
    }

    #[test]
    fn source_is_pinned_to_bottom_margin() {
        let mut list = DrawList::new();
        compose(&highball(), &fonts(), &geometry(), &mut list);

        let source = list.find("Source:").unwrap();
        assert_eq!(source.position, Point::new(150.0, 1050.0));
        assert_eq!(source.color, Color::GRAY);
    }

    #[test]
    fn optional_sections_are_skipped() {
        let mut recipe = highball();
        recipe.author = None;
        recipe.source = None;
        recipe.yields = None;
        recipe.glass = None;

        let mut list = DrawList::new();
        let report = compose(&recipe, &fonts(), &geometry(), &mut list);

        assert!(report.section(Section::Author).is_none());
        assert!(report.section(Section::Details).is_none());
        assert!(report.section(Section::Source).is_none());
        assert_eq!(position(&list, "Version:"), Point::new(1550.0, 150.0));
        assert_eq!(position(&list, "House"), Point::new(150.0, 150.0));
        assert!(list.find("Yield:").is_none());
        assert!(list.find("In").is_none());
    }

    #[test]
    fn description_and_notes() {
        let mut recipe = highball();
        recipe.description = Some("Tall and cold.".into());
        recipe.notes = Some("Use fresh tonic.".into());

        let mut list = DrawList::new();
        let report = compose(&recipe, &fonts(), &geometry(), &mut list);

        // Title ends at 210, plus spacing.
        assert_eq!(position(&list, "Tall"), Point::new(150.0, 240.0));
        let notes = report.section(Section::Notes).unwrap();
        let use_run = list.find("Use").unwrap();
        assert_eq!(use_run.position.y, notes.top);
        assert!(use_run.style.italic);
        assert_eq!(report.bottom, notes.bottom);
    }

    #[test]
    fn long_recipes_report_overflow() {
        let mut recipe = highball();
        recipe.instructions = (0..40).map(|i| format!("Step {i}.")).collect();

        let report = compose(&recipe, &fonts(), &geometry(), &mut DrawList::new());
        assert!(report.overflow);
        assert!(report.bottom > 1050.0);
    }

    #[test]
    fn ingredient_line_extras() {
        let mut rum = ingredient("Rum", 1.5);
        rum.suggested = Some("Appleton".into());
        rum.examples = vec!["Appleton".into(), "Doorly's".into()];
        rum.notes = Some("aged".into());

        let font = StubFont::new(10.0, 5.0, 20.0).handle();
        let mut text_box = TextBox::new(2000.0, font);
        add_ingredient(&mut text_box, &rum, "-");

        let contents: Vec<&str> = text_box.texts().iter().map(|t| t.content()).collect();
        assert_eq!(
            contents,
            vec!["- 1 1/2 ounces ", "Rum", " (Appleton)", " [e.g. Doorly's]", ", aged", "\n"]
        );
        assert_eq!(text_box.texts()[4].text_color(), Color::GRAY);
    }

    #[test]
    fn details_use_title_case() {
        let mut recipe = highball();
        recipe.served = Some(cocktails_recipe::Served::OnTheRocks);
        recipe.yields = Some(2);
        assert_eq!(
            detail_lines(&recipe),
            vec!["Yield: 2 drinks", "Served: On The Rocks", "In a: Highball Glass"]
        );
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn style(frame: Option<RgbaImage>) -> CardStyle {
        CardStyle {
            geometry: CardGeometry::new(600.0, 400.0, 0.25),
            fonts: fonts(),
            frame,
        }
    }

    #[test]
    fn render_without_frame_draws_rule() {
        let (image, report) = render_card(&highball(), &style(None));
        assert_eq!(image.dimensions(), (600, 400));
        assert_eq!(Color::from(*image.get_pixel(25, 200)), Color::GRAY);
        assert_eq!(Color::from(*image.get_pixel(10, 10)), Color::WHITE);
        assert_eq!(Color::from(*image.get_pixel(300, 390)), Color::WHITE);
        assert!(report.section(Section::Title).is_some());
    }

    #[test]
    fn render_with_frame_fills_inside_border() {
        let frame = RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        let (image, _) = render_card(&highball(), &style(Some(frame)));
        assert_eq!(Color::from(*image.get_pixel(10, 10)), Color::WHITE);
        assert_eq!(Color::from(*image.get_pixel(300, 200)), Color::RED);
    }
}
