//! Recipe panels for the terminal.
//!
//! Text is laid out with the same text boxes that compose printed cards,
//! measured in terminal columns, then painted row by row.

use colored::{ColoredString, Colorize};
use cocktails_recipe::{title_case, Recipe};
use notecard::card::{add_ingredient_with_measure, detail_lines};
use notecard::cells::{display_width, Cell};
use notecard::{CellFont, CellGrid, Color, Point, TextBox, TextStyle};

/// Narrowest panel that still fits three columns.
pub const MIN_WIDTH: usize = 40;

const COLUMN_GAP: usize = 2;

/// Render `recipe` as a rounded panel `width` columns wide.
///
/// With `color` off every line is plain text; otherwise styles are applied
/// with ANSI escapes.
pub fn render_recipe(recipe: &Recipe, width: usize, color: bool) -> Vec<String> {
    let width = width.max(MIN_WIDTH);
    let inner = width - 4;
    let mut lines = Vec::new();

    lines.push(top_border(recipe, width, color));

    if let Some(description) = &recipe.description {
        let mut text_box = TextBox::new(inner as f32, CellFont::handle());
        text_box.add(description.as_str());
        push_grid(&mut lines, &layout(&text_box, inner), color);
        lines.push(framed(" ".repeat(inner)));
    }

    let column = (inner - COLUMN_GAP * 2) / 3;
    let last_column = inner - COLUMN_GAP * 2 - column * 2;

    let mut ingredients = TextBox::new(column as f32, CellFont::handle()).indent(2.0);
    for ingredient in &recipe.ingredients {
        let measure = title_case(&ingredient.measure_label());
        add_ingredient_with_measure(&mut ingredients, ingredient, "-", &measure);
    }

    let mut instructions = TextBox::new(column as f32, CellFont::handle()).indent(3.0);
    for step in recipe.numbered_instructions() {
        instructions.add(format!("{step}\n"));
    }

    let mut details = TextBox::new(last_column as f32, CellFont::handle()).indent(2.0);
    details.add(format!("Version: {}\n", recipe.version));
    for line in detail_lines(recipe) {
        details.add(format!("{line}\n"));
    }

    let grids = [
        layout(&ingredients, column),
        layout(&instructions, column),
        layout(&details, last_column),
    ];
    let rows = grids.iter().map(CellGrid::height).max().unwrap_or(0);
    let gap = " ".repeat(COLUMN_GAP);
    for row in 0..rows {
        let cells: Vec<String> = grids.iter().map(|grid| grid_row(grid, row, color)).collect();
        lines.push(framed(cells.join(&gap)));
    }

    if let Some(notes) = &recipe.notes {
        lines.push(framed(" ".repeat(inner)));
        let mut text_box = TextBox::new(inner as f32, CellFont::handle());
        text_box.add_styled(notes.as_str(), Color::BLACK, TextStyle::PLAIN.italic());
        push_grid(&mut lines, &layout(&text_box, inner), color);
    }

    lines.push(bottom_border(recipe.source.as_deref(), width));
    lines
}

fn layout(text_box: &TextBox, width: usize) -> CellGrid {
    let mut grid = CellGrid::new(width);
    text_box.render(&mut grid, Point::ORIGIN);
    grid
}

fn push_grid(lines: &mut Vec<String>, grid: &CellGrid, color: bool) {
    for row in 0..grid.height() {
        lines.push(framed(grid_row(grid, row, color)));
    }
}

fn framed(content: String) -> String {
    format!("│ {content} │")
}

fn top_border(recipe: &Recipe, width: usize, color: bool) -> String {
    let budget = width - 5;
    let author = recipe
        .author
        .as_ref()
        .map(|author| fit(&format!("{author}'s "), budget))
        .unwrap_or_default();
    let title = fit(&recipe.title, budget - display_width(&author));
    let fill = budget - display_width(&author) - display_width(&title);

    let heading = if color {
        format!("{}{}", author.italic(), title.bold().magenta())
    } else {
        format!("{author}{title}")
    };
    format!("╭─ {heading} {}╮", "─".repeat(fill))
}

fn bottom_border(source: Option<&str>, width: usize) -> String {
    match source {
        Some(source) => {
            let source = fit(source, width - 5);
            let fill = width - 5 - display_width(&source);
            format!("╰─ {source} {}╯", "─".repeat(fill))
        }
        None => format!("╰{}╯", "─".repeat(width - 2)),
    }
}

/// Cut `text` to at most `max` columns, marking the cut with an ellipsis.
fn fit(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = display_width(ch.encode_utf8(&mut [0; 4]));
        if used + ch_width > max - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

/// One row of a grid, padded to the grid width.
fn grid_row(grid: &CellGrid, row: usize, color: bool) -> String {
    let Some(cells) = grid.rows().get(row) else {
        return " ".repeat(grid.width());
    };

    let mut out = String::new();
    let mut run = String::new();
    let mut current: Option<(Color, TextStyle)> = None;
    for cell in cells {
        let (ch, key) = match cell {
            Cell::Blank => (' ', None),
            Cell::Glyph { ch, color, style } => (*ch, Some((*color, *style))),
            Cell::Continuation => continue,
        };
        if key != current {
            out.push_str(&paint(&run, current, color));
            run.clear();
            current = key;
        }
        run.push(ch);
    }
    out.push_str(&paint(&run, current, color));
    out
}

fn paint(text: &str, key: Option<(Color, TextStyle)>, color: bool) -> String {
    let Some((fg, style)) = key.filter(|_| color && !text.is_empty()) else {
        return text.to_string();
    };

    let mut painted: ColoredString = text.normal();
    if style.bold {
        painted = painted.bold();
    }
    if style.italic {
        painted = painted.italic();
    }
    if style.underline {
        painted = painted.underline();
    }
    painted = match fg {
        Color::GRAY => painted.bright_black(),
        Color::MAGENTA => painted.magenta(),
        Color::RED => painted.red(),
        _ => painted,
    };
    painted.to_string()
}
