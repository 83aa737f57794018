use crate::utils::error::{FaviconError, Result};
use std::path::PathBuf;

/// 畫布邊長 (像素)
pub const CANVAS_SIZE: u32 = 256;
pub const BACKGROUND_COLOR: &str = "#2C3E50";

pub const TITLE_TEXT: &str = "{Z}";
pub const TITLE_FONT_SIZE: f32 = 180.0;
pub const TITLE_COLOR: &str = "#ECF0F1";

pub const SUBTITLE_TEXT: &str = "dev";
pub const SUBTITLE_FONT_SIZE: f32 = 80.0;
pub const SUBTITLE_COLOR: &str = "#3498DB";

/// 置中後再往上移的距離
pub const VERTICAL_LIFT: f32 = 40.0;
/// "dev" 相對於 "{Z}" 的垂直偏移
pub const SUBTITLE_OFFSET: f32 = 150.0;

pub const OUTPUT_SIZES: [(u32, u32); 5] = [(16, 16), (32, 32), (48, 48), (64, 64), (128, 128)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// 解析 `#RRGGBB` 格式的顏色
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = |reason: &str| FaviconError::InvalidConfigValueError {
            field: "color".to_string(),
            value: hex.to_string(),
            reason: reason.to_string(),
        };

        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| invalid("Color must start with '#'"))?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("Color must have exactly six hex digits"));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| invalid(&e.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Pixels per em.
    pub font_size: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaviconDesign {
    pub canvas_size: u32,
    pub background: Rgb,
    pub title: Label,
    pub subtitle: Label,
    pub vertical_lift: f32,
    pub subtitle_offset: f32,
    pub output_sizes: Vec<(u32, u32)>,
}

impl FaviconDesign {
    /// 固定的 `{Z}` / `dev` 設計
    pub fn standard() -> Result<Self> {
        Ok(Self {
            canvas_size: CANVAS_SIZE,
            background: Rgb::from_hex(BACKGROUND_COLOR)?,
            title: Label {
                text: TITLE_TEXT.to_string(),
                font_size: TITLE_FONT_SIZE,
                color: Rgb::from_hex(TITLE_COLOR)?,
            },
            subtitle: Label {
                text: SUBTITLE_TEXT.to_string(),
                font_size: SUBTITLE_FONT_SIZE,
                color: Rgb::from_hex(SUBTITLE_COLOR)?,
            },
            vertical_lift: VERTICAL_LIFT,
            subtitle_offset: SUBTITLE_OFFSET,
            output_sizes: OUTPUT_SIZES.to_vec(),
        })
    }
}

/// Ink bounding box of a laid-out string, relative to the draw origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// One resampled copy of the canvas, ready to be written or embedded.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
    pub rgba: Vec<u8>,
}

impl RenderedIcon {
    pub fn file_name(&self) -> String {
        format!("favicon-{}x{}.png", self.width, self.height)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub png_paths: Vec<PathBuf>,
    pub ico_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            Rgb::from_hex("#2C3E50").unwrap(),
            Rgb { r: 0x2c, g: 0x3e, b: 0x50 }
        );
        assert_eq!(
            Rgb::from_hex("#3498db").unwrap(),
            Rgb { r: 0x34, g: 0x98, b: 0xdb }
        );
        assert!(Rgb::from_hex("2C3E50").is_err());
        assert!(Rgb::from_hex("#2C3E5").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_standard_design() {
        let design = FaviconDesign::standard().unwrap();

        assert_eq!(design.canvas_size, 256);
        assert_eq!(design.title.text, "{Z}");
        assert_eq!(design.subtitle.text, "dev");
        assert_eq!(design.title.color, Rgb { r: 0xec, g: 0xf0, b: 0xf1 });
        assert_eq!(
            design.output_sizes,
            vec![(16, 16), (32, 32), (48, 48), (64, 64), (128, 128)]
        );
    }

    #[test]
    fn test_icon_file_name() {
        let icon = RenderedIcon {
            width: 48,
            height: 48,
            png: vec![],
            rgba: vec![],
        };
        assert_eq!(icon.file_name(), "favicon-48x48.png");
    }
}
