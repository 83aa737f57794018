use crate::domain::model::{FaviconDesign, GenerationReport, RenderedIcon};
use crate::utils::error::Result;
use image::RgbImage;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Writes `data` to `path`, creating parent directories as needed.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait PathProvider {
    fn font_path(&self) -> &Path;
    fn image_dir(&self) -> PathBuf;
    fn ico_path(&self) -> PathBuf;
}

pub trait Pipeline {
    fn design(&self) -> &FaviconDesign;
    fn render(&self) -> Result<RgbImage>;
    fn derive(&self, canvas: &RgbImage) -> Result<Vec<RenderedIcon>>;
    fn write(&self, icons: &[RenderedIcon]) -> Result<GenerationReport>;
}
