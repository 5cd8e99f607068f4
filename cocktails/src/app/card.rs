use anyhow::{Context, Result, bail};
use cocktails::config::Config;
use cocktails_recipe::load_recipe;
use notecard::card::DEFAULT_FRAME_SIZE;
use notecard::export::{CARD_PAGE_INCHES, save_png, write_pdf};
use notecard::{CardFonts, CardGeometry, CardStyle, FaceKind, FontFamily, render_card};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::expand_recipe_args;

pub struct CardOptions {
    pub output: Option<PathBuf>,
    pub png: bool,
}

pub fn run(config: &Config, args: &[String], options: CardOptions) -> Result<()> {
    let files = expand_recipe_args(args)?;
    if files.is_empty() {
        bail!("No recipes to render");
    }
    let style = card_style(config)?;

    let mut pages = Vec::with_capacity(files.len());
    for file in &files {
        let recipe = load_recipe(file)
            .with_context(|| format!("Failed to load recipe: {}", file.display()))?;
        let (image, report) = render_card(&recipe, &style);
        if report.overflow {
            println!("{} does not fit on one card", file.display());
        }

        let stem = output_stem(file);
        if options.png {
            let path = add_extension(&stem, "png");
            save_png(&image, &path)?;
            println!("Wrote {}", path.display());
        }
        if options.output.is_none() {
            let path = add_extension(&stem, "pdf");
            write_pdf(std::slice::from_ref(&image), CARD_PAGE_INCHES, &path)?;
            println!("Wrote {}", path.display());
        }
        pages.push(image);
    }

    if let Some(output) = options.output {
        let path = with_pdf_extension(output);
        write_pdf(&pages, CARD_PAGE_INCHES, &path)?;
        println!("Wrote {} ({} cards)", path.display(), pages.len());
    }
    Ok(())
}

fn card_style(config: &Config) -> Result<CardStyle> {
    let scale = config.card_scale();
    let fonts = config.fonts();
    let (Some(title), Some(body)) = (fonts.title, fonts.body) else {
        bail!("Card fonts are not configured; set [fonts] title and body in the config file");
    };

    let mut family = FontFamily::load(&body)?;
    for (kind, path) in [
        (FaceKind::Bold, fonts.body_bold),
        (FaceKind::Italic, fonts.body_italic),
        (FaceKind::BoldItalic, fonts.body_bold_italic),
    ] {
        if let Some(path) = path {
            family = family.with_face(kind, &path)?;
        }
    }
    let title = Arc::new(FontFamily::load(&title)?);
    let fonts = CardFonts::from_families(title, Arc::new(family), scale)?;

    let frame = match config.frame_path() {
        Some(path) => Some(
            image::open(&path)
                .with_context(|| format!("Failed to open card frame: {}", path.display()))?
                .to_rgba8(),
        ),
        None => None,
    };
    let geometry = match &frame {
        Some(frame) => CardGeometry::for_frame(frame.width(), frame.height(), scale),
        None => CardGeometry::for_frame(DEFAULT_FRAME_SIZE.0, DEFAULT_FRAME_SIZE.1, scale),
    };

    Ok(CardStyle {
        geometry,
        fonts,
        frame,
    })
}

/// Cards are written to the current directory, named after the recipe file.
fn output_stem(file: &Path) -> PathBuf {
    PathBuf::from(file.file_stem().unwrap_or(file.as_os_str()))
}

fn with_pdf_extension(path: PathBuf) -> PathBuf {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf { path } else { add_extension(&path, "pdf") }
}

/// Append `.{extension}` to the file name, keeping any dots already in it.
fn add_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
