//! Per-slice render planning
//!
//! Combines the wedge geometry with the label-wrapping engine: for each
//! section, decides where the title, optional description, and optional
//! image sit (placement radii depend on which optional fields are present),
//! derives the character budget from the slice's chord length, and emits a
//! plain-data render plan the host rasterizes. Invoked once per render
//! pass; independent of the rotation controller.

pub mod geometry;
pub mod wrap;

pub use geometry::{WedgePath, chord_length, slice_angle, wedge_path, wedge_span};
pub use wrap::wrap_label;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::section::Section;

/// Wedge outline stroke color (matches the white separators of the rim)
pub const WEDGE_STROKE_COLOR: &str = "#fff";
/// Text color fallback when a section specifies none
pub const DEFAULT_TEXT_COLOR: &str = "#fff";

/// One positioned, rotated line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    /// Anchor point (text centered on it), wheel center at the origin
    pub pos: Vec2,
    pub font_size: f32,
    /// Rotation about `pos`, aligning the baseline with the slice
    pub rotation_deg: f32,
}

/// A positioned, rotated image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    pub href: String,
    /// Center point of the image
    pub pos: Vec2,
    /// Edge length of the square image box
    pub size: f32,
    pub rotation_deg: f32,
}

/// Everything a renderer needs for one slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceLayout {
    /// Section id this plan belongs to
    pub id: String,
    pub path: WedgePath,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
    pub text_color: String,
    /// Title lines (at most two)
    pub title: Vec<TextRun>,
    /// Description lines (at most two; empty when the section has none)
    pub description: Vec<TextRun>,
    pub image: Option<ImagePlacement>,
}

/// Placement radii as fractions of the wheel radius, chosen from which
/// optional content the section carries.
fn placement_radii(has_image: bool, has_description: bool) -> (f32, Option<f32>, Option<f32>) {
    match (has_image, has_description) {
        (false, false) => (0.75, None, None),
        (true, true) => (0.85, Some(0.65), Some(0.40)),
        (true, false) => (0.80, None, Some(0.50)),
        (false, true) => (0.80, Some(0.60), None),
    }
}

/// Character budget for a text run at `label_radius` with `font_size`.
///
/// `CHORD_MARGIN` reserves side margin; `GLYPH_WIDTH_FRACTION` approximates
/// the average glyph width as a fraction of the font size.
pub fn char_budget(label_radius: f32, slice_angle_deg: f32, font_size: f32) -> usize {
    let chord = chord_length(label_radius, slice_angle_deg);
    ((chord * CHORD_MARGIN / (font_size * GLYPH_WIDTH_FRACTION)).floor() as usize).max(1)
}

/// Lay out every section of the wheel. Pure; call once per render pass.
pub fn layout_sections(sections: &[Section], config: &WheelConfig) -> Vec<SliceLayout> {
    let n = sections.len();
    let slice = slice_angle(n);
    let radius = config.radius();

    sections
        .iter()
        .enumerate()
        .map(|(i, section)| layout_slice(section, i, n, slice, radius, config))
        .collect()
}

fn layout_slice(
    section: &Section,
    index: usize,
    n: usize,
    slice: f32,
    radius: f32,
    config: &WheelConfig,
) -> SliceLayout {
    let mid = index as f32 * slice;
    let (start, end) = wedge_span(index, n);

    let (title_frac, desc_frac, image_frac) =
        placement_radii(section.image.is_some(), section.description.is_some());

    let title_font = config.title_font_size.unwrap_or(radius * TITLE_FONT_FRACTION);
    let desc_font = config
        .description_font_size
        .unwrap_or(radius * DESCRIPTION_FONT_FRACTION);

    let title_radius = radius * title_frac;
    let title_budget = char_budget(title_radius, slice, title_font);
    let title = text_runs(&section.title, title_budget, title_radius, mid, title_font);

    let description = match (&section.description, desc_frac) {
        (Some(text), Some(frac)) => {
            let desc_radius = radius * frac;
            let budget = char_budget(desc_radius, slice, desc_font);
            text_runs(text, budget, desc_radius, mid, desc_font)
        }
        _ => Vec::new(),
    };

    let image = match (&section.image, image_frac) {
        (Some(href), Some(frac)) => Some(ImagePlacement {
            href: href.clone(),
            pos: polar_to_cartesian(radius * frac, mid),
            size: radius * IMAGE_SIZE_FRACTION,
            rotation_deg: mid,
        }),
        _ => None,
    };

    SliceLayout {
        id: section.id.clone(),
        path: wedge_path(radius, start, end),
        fill: section.background_color.clone(),
        stroke: WEDGE_STROKE_COLOR.to_string(),
        stroke_width: config.stroke_width,
        text_color: section
            .text_color
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
        title,
        description,
        image,
    }
}

/// Wrap `text` and place each line around the anchor at `(label_radius,
/// mid_deg)`. A lone line sits on the anchor; a pair straddles it, offset
/// perpendicular to the baseline (the offset rotates with the slice).
fn text_runs(
    text: &str,
    max_chars: usize,
    label_radius: f32,
    mid_deg: f32,
    font_size: f32,
) -> Vec<TextRun> {
    let lines = wrap_label(text, max_chars);
    let anchor = polar_to_cartesian(label_radius, mid_deg);
    let rot = Vec2::from_angle(mid_deg.to_radians());
    let two_lines = lines.len() == 2;

    lines
        .into_iter()
        .enumerate()
        .map(|(line_index, line)| {
            let offset = if two_lines {
                let sign = if line_index == 0 { -1.0 } else { 1.0 };
                sign * font_size * LINE_OFFSET_FRACTION
            } else {
                0.0
            };
            TextRun {
                text: line,
                pos: anchor + rot.rotate(Vec2::new(0.0, offset)),
                font_size,
                rotation_deg: mid_deg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WheelConfig;

    fn sections_plain(n: usize) -> Vec<Section> {
        (0..n)
            .map(|i| Section::new(format!("s{i}"), format!("Prize {i}"), "#222"))
            .collect()
    }

    #[test]
    fn test_layout_one_per_section() {
        let sections = sections_plain(6);
        let layouts = layout_sections(&sections, &WheelConfig::default());
        assert_eq!(layouts.len(), 6);
        for (layout, section) in layouts.iter().zip(&sections) {
            assert_eq!(layout.id, section.id);
            assert!(!layout.title.is_empty());
            assert!(layout.description.is_empty());
            assert!(layout.image.is_none());
        }
    }

    #[test]
    fn test_placement_radii_table() {
        assert_eq!(placement_radii(false, false), (0.75, None, None));
        assert_eq!(placement_radii(true, true), (0.85, Some(0.65), Some(0.40)));
        assert_eq!(placement_radii(true, false), (0.80, None, Some(0.50)));
        assert_eq!(placement_radii(false, true), (0.80, Some(0.60), None));
    }

    #[test]
    fn test_title_anchor_on_slice_midline() {
        let sections = sections_plain(4);
        let config = WheelConfig::default();
        let layouts = layout_sections(&sections, &config);

        // Slice 1 of 4 is centered at 90 degrees; title radius 0.75 * 150
        let run = &layouts[1].title[0];
        let expected = polar_to_cartesian(0.75 * config.radius(), 90.0);
        assert!((run.pos - expected).length() < 1e-2);
        assert_eq!(run.rotation_deg, 90.0);
    }

    #[test]
    fn test_two_line_title_straddles_anchor() {
        let mut sections = sections_plain(8);
        sections[0].title = "Grand Prize Winner Bonanza".to_string();
        let config = WheelConfig::default();
        let layouts = layout_sections(&sections, &config);

        let title = &layouts[0].title;
        assert_eq!(title.len(), 2);
        let anchor = polar_to_cartesian(0.75 * config.radius(), 0.0);
        // Lines sit symmetrically about the anchor
        let mid = (title[0].pos + title[1].pos) / 2.0;
        assert!((mid - anchor).length() < 1e-2);
        let gap = (title[1].pos - title[0].pos).length();
        assert!((gap - 2.0 * LINE_OFFSET_FRACTION * title[0].font_size).abs() < 1e-2);
    }

    #[test]
    fn test_font_size_defaults_and_overrides() {
        let sections = vec![
            Section::new("a", "A", "#111").with_description("details"),
            Section::new("b", "B", "#222").with_description("details"),
        ];
        let config = WheelConfig::default();
        let layouts = layout_sections(&sections, &config);
        let r = config.radius();
        assert!((layouts[0].title[0].font_size - r * TITLE_FONT_FRACTION).abs() < 1e-4);
        assert!((layouts[0].description[0].font_size - r * DESCRIPTION_FONT_FRACTION).abs() < 1e-4);

        let config = WheelConfig {
            title_font_size: Some(20.0),
            description_font_size: Some(9.0),
            ..WheelConfig::default()
        };
        let layouts = layout_sections(&sections, &config);
        assert_eq!(layouts[0].title[0].font_size, 20.0);
        assert_eq!(layouts[0].description[0].font_size, 9.0);
    }

    #[test]
    fn test_image_placement() {
        let sections = vec![
            Section::new("a", "A", "#111").with_image("star.png"),
            Section::new("b", "B", "#222"),
        ];
        let config = WheelConfig::default();
        let layouts = layout_sections(&sections, &config);
        let r = config.radius();

        let image = layouts[0].image.as_ref().unwrap();
        assert_eq!(image.href, "star.png");
        assert_eq!(image.size, r * IMAGE_SIZE_FRACTION);
        // Image-only slice places the image at 0.50 R on the midline (0 deg
        // for slice 0)
        assert!((image.pos - Vec2::new(0.50 * r, 0.0)).length() < 1e-2);
        assert!(layouts[1].image.is_none());
    }

    #[test]
    fn test_text_color_fallback() {
        let sections = vec![
            Section::new("a", "A", "#111").with_text_color("#000"),
            Section::new("b", "B", "#222"),
        ];
        let layouts = layout_sections(&sections, &WheelConfig::default());
        assert_eq!(layouts[0].text_color, "#000");
        assert_eq!(layouts[1].text_color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn test_char_budget_shrinks_with_narrow_slices() {
        let r = 150.0;
        let font = r * TITLE_FONT_FRACTION;
        let wide = char_budget(0.75 * r, slice_angle(4), font);
        let narrow = char_budget(0.75 * r, slice_angle(24), font);
        assert!(wide > narrow);
        // Never below one character
        assert!(char_budget(0.75 * r, slice_angle(360), font) >= 1);
    }

    #[test]
    fn test_layout_serializes() {
        let layouts = layout_sections(&sections_plain(3), &WheelConfig::default());
        let json = serde_json::to_string(&layouts).unwrap();
        let back: Vec<SliceLayout> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layouts);
    }
}
