use crate::utils::error::{FaviconError, Result};
use std::path::Path;

/// ICO directory entries store each dimension in one byte (0 meaning 256).
pub const MAX_ICO_DIMENSION: u32 = 256;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(FaviconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(FaviconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FaviconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_output_sizes(field_name: &str, sizes: &[(u32, u32)]) -> Result<()> {
    if sizes.is_empty() {
        return Err(FaviconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one output size is required".to_string(),
        });
    }

    for &(width, height) in sizes {
        validate_range(field_name, width, 1, MAX_ICO_DIMENSION)?;
        validate_range(field_name, height, 1, MAX_ICO_DIMENSION)?;
    }

    Ok(())
}

/// 字型檔必須存在才開始繪製
pub fn validate_font_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(FaviconError::FontNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
