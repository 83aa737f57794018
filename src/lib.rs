pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, SitePaths};
pub use core::{generator::FaviconGenerator, pipeline::FaviconPipeline};
pub use domain::model::{FaviconDesign, GenerationReport};
pub use utils::error::{FaviconError, Result};

/// 以固定設計產生整組 favicon
pub fn generate(paths: SitePaths) -> Result<GenerationReport> {
    use utils::validation::Validate;

    paths.validate()?;
    let pipeline = FaviconPipeline::new(LocalStorage::new(), paths, FaviconDesign::standard()?);
    pipeline.validate()?;

    FaviconGenerator::new(pipeline).run()
}
