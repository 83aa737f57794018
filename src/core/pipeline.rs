use crate::core::canvas::{load_font, render_design};
use crate::core::{FaviconDesign, GenerationReport, PathProvider, Pipeline, RenderedIcon, Storage};
use crate::utils::error::Result;
use crate::utils::validation::{validate_output_sizes, Validate};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

pub struct FaviconPipeline<S: Storage, P: PathProvider> {
    storage: S,
    paths: P,
    design: FaviconDesign,
}

impl<S: Storage, P: PathProvider> FaviconPipeline<S, P> {
    pub fn new(storage: S, paths: P, design: FaviconDesign) -> Self {
        Self {
            storage,
            paths,
            design,
        }
    }
}

impl<S: Storage, P: PathProvider> Validate for FaviconPipeline<S, P> {
    fn validate(&self) -> Result<()> {
        validate_output_sizes("output_sizes", &self.design.output_sizes)
    }
}

/// Lanczos 縮圖並編碼成 PNG
pub fn resample(canvas: &RgbImage, width: u32, height: u32) -> Result<RenderedIcon> {
    let resized = DynamicImage::ImageRgb8(imageops::resize(
        canvas,
        width,
        height,
        FilterType::Lanczos3,
    ));

    let mut png = Vec::new();
    resized.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(RenderedIcon {
        width,
        height,
        png,
        rgba: resized.to_rgba8().into_raw(),
    })
}

/// 將所有尺寸包進同一個 ICO
pub fn encode_ico(icons: &[RenderedIcon]) -> Result<Vec<u8>> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for icon in icons {
        let image = IconImage::from_rgba_data(icon.width, icon.height, icon.rgba.clone());
        icon_dir.add_entry(IconDirEntry::encode(&image)?);
    }

    let mut data = Vec::new();
    icon_dir.write(&mut data)?;
    Ok(data)
}

impl<S: Storage, P: PathProvider> Pipeline for FaviconPipeline<S, P> {
    fn design(&self) -> &FaviconDesign {
        &self.design
    }

    fn render(&self) -> Result<RgbImage> {
        let font = load_font(self.paths.font_path())?;
        Ok(render_design(&self.design, &font))
    }

    fn derive(&self, canvas: &RgbImage) -> Result<Vec<RenderedIcon>> {
        self.design
            .output_sizes
            .iter()
            .map(|&(width, height)| resample(canvas, width, height))
            .collect()
    }

    fn write(&self, icons: &[RenderedIcon]) -> Result<GenerationReport> {
        let image_dir = self.paths.image_dir();
        let mut png_paths = Vec::with_capacity(icons.len());

        for icon in icons {
            let path = image_dir.join(icon.file_name());
            self.storage.write_file(&path, &icon.png)?;
            png_paths.push(path);
        }

        let ico_path = self.paths.ico_path();
        let ico_data = encode_ico(icons)?;
        tracing::debug!("ICO file with {} entries ({} bytes)", icons.len(), ico_data.len());
        self.storage.write_file(&ico_path, &ico_data)?;

        Ok(GenerationReport {
            png_paths,
            ico_path,
        })
    }
}
