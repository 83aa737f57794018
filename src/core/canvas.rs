//! Canvas drawing: font loading, text measurement and label placement.

use crate::domain::model::{FaviconDesign, Label, Rgb, TextBounds};
use crate::utils::error::{FaviconError, Result};
use crate::utils::validation::validate_font_file;
use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::RgbImage;
use imageproc::drawing::draw_text_mut;
use std::path::Path;

pub fn load_font(path: &Path) -> Result<FontVec> {
    validate_font_file(path)?;

    let data = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FaviconError::FontNotFound {
            path: path.to_path_buf(),
        },
        _ => FaviconError::IoError(e),
    })?;

    tracing::debug!("Loaded font {} ({} bytes)", path.display(), data.len());

    FontVec::try_from_vec(data).map_err(|e| FaviconError::InvalidFont {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Converts a pixels-per-em font size into the line-height scale `ab_glyph` expects.
pub fn scale_for(font: &impl Font, font_size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(font_size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(font_size),
    }
}

/// 量測文字實際墨跡範圍
///
/// The origin is the top-left of the line box: glyph baselines sit one ascent
/// below it, the same convention `draw_text_mut` uses when drawing.
pub fn measure_text(font: &impl Font, scale: PxScale, text: &str) -> TextBounds {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;
    let mut bounds: Option<TextBounds> = None;

    for c in text.chars() {
        let glyph_id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(glyph_id);
        previous = Some(glyph_id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let rect = outlined.px_bounds();
            bounds = Some(match bounds {
                None => TextBounds {
                    min_x: rect.min.x,
                    min_y: rect.min.y,
                    max_x: rect.max.x,
                    max_y: rect.max.y,
                },
                Some(b) => TextBounds {
                    min_x: b.min_x.min(rect.min.x),
                    min_y: b.min_y.min(rect.min.y),
                    max_x: b.max_x.max(rect.max.x),
                    max_y: b.max_y.max(rect.max.y),
                },
            });
        }
    }

    bounds.unwrap_or_default()
}

/// `x = (size - width) / 2`, `y = (size - height) / 2 - lift`
pub fn center_position(canvas_size: u32, bounds: &TextBounds, lift: f32) -> (f32, f32) {
    let size = canvas_size as f32;
    let x = (size - bounds.width()) / 2.0;
    let y = (size - bounds.height()) / 2.0 - lift;
    (x, y)
}

pub fn new_canvas(size: u32, background: Rgb) -> RgbImage {
    RgbImage::from_pixel(size, size, background.to_pixel())
}

pub fn draw_label(canvas: &mut RgbImage, font: &impl Font, label: &Label, x: f32, y: f32) {
    let scale = scale_for(font, label.font_size);
    draw_text_mut(
        canvas,
        label.color.to_pixel(),
        x.round() as i32,
        y.round() as i32,
        scale,
        font,
        &label.text,
    );
}

/// Where each label's top-left origin lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub title: (f32, f32),
    pub subtitle: (f32, f32),
}

/// 計算兩行文字的位置: "dev" 只取水平置中, 垂直位置跟著 "{Z}"
pub fn layout_design(design: &FaviconDesign, font: &impl Font) -> Layout {
    let title_bounds = measure_text(
        font,
        scale_for(font, design.title.font_size),
        &design.title.text,
    );
    let subtitle_bounds = measure_text(
        font,
        scale_for(font, design.subtitle.font_size),
        &design.subtitle.text,
    );

    let title = center_position(design.canvas_size, &title_bounds, design.vertical_lift);
    let (subtitle_x, _) =
        center_position(design.canvas_size, &subtitle_bounds, design.vertical_lift);

    Layout {
        title,
        subtitle: (subtitle_x, title.1 + design.subtitle_offset),
    }
}

pub fn render_design(design: &FaviconDesign, font: &impl Font) -> RgbImage {
    let mut canvas = new_canvas(design.canvas_size, design.background);
    let layout = layout_design(design, font);

    tracing::debug!(
        "Placing {:?} at {:?} and {:?} at {:?}",
        design.title.text,
        layout.title,
        design.subtitle.text,
        layout.subtitle
    );

    draw_label(&mut canvas, font, &design.title, layout.title.0, layout.title.1);
    draw_label(
        &mut canvas,
        font,
        &design.subtitle,
        layout.subtitle.0,
        layout.subtitle.1,
    );

    canvas
}
