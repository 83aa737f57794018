use crate::core::{GenerationReport, Pipeline};
use crate::utils::error::Result;

pub struct FaviconGenerator<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FaviconGenerator<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<GenerationReport> {
        let design = self.pipeline.design();

        // 繪製
        tracing::info!(
            "Rendering {}x{} canvas",
            design.canvas_size,
            design.canvas_size
        );
        let canvas = self.pipeline.render()?;

        // 縮圖
        tracing::info!("Resampling {} sizes", design.output_sizes.len());
        let icons = self.pipeline.derive(&canvas)?;

        // 寫檔
        tracing::info!("Writing PNG and ICO files");
        let report = self.pipeline.write(&icons)?;
        tracing::info!(
            "Wrote {} PNG files and {}",
            report.png_paths.len(),
            report.ico_path.display()
        );

        Ok(report)
    }
}
