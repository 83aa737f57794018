pub mod canvas;
pub mod generator;
pub mod pipeline;

pub use crate::domain::model::{FaviconDesign, GenerationReport, RenderedIcon};
pub use crate::domain::ports::{PathProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
