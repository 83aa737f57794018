use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaviconError {
    #[error("Font file not found: {}", path.display())]
    FontNotFound { path: PathBuf },

    #[error("Invalid font file {}: {message}", path.display())]
    InvalidFont { path: PathBuf, message: String },

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FaviconError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FaviconError::FontNotFound { path } => {
                format!("找不到字型檔: {}", path.display())
            }
            FaviconError::InvalidFont { path, .. } => {
                format!("無法解析字型檔: {}", path.display())
            }
            FaviconError::ImageError(e) => format!("圖片處理失敗: {}", e),
            FaviconError::IoError(e) => format!("檔案寫入失敗: {}", e),
            FaviconError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值 {} 無效: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FaviconError::FontNotFound { .. } => {
                "Install Consolas or point WINDIR at a directory containing Fonts/consola.ttf"
            }
            FaviconError::InvalidFont { .. } => "Make sure the font file is a valid TrueType font",
            FaviconError::ImageError(_) => "Re-run the generator; the canvas may be corrupt",
            FaviconError::IoError(_) => "Check that the output directory is writable",
            FaviconError::InvalidConfigValueError { .. } => "Fix the design constants and rebuild",
        }
    }
}

pub type Result<T> = std::result::Result<T, FaviconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_not_found_message() {
        let err = FaviconError::FontNotFound {
            path: PathBuf::from("C:/Windows/Fonts/consola.ttf"),
        };

        assert_eq!(
            err.to_string(),
            "Font file not found: C:/Windows/Fonts/consola.ttf"
        );
        assert!(err.user_friendly_message().contains("consola.ttf"));
        assert!(err.recovery_suggestion().contains("WINDIR"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FaviconError = io.into();
        assert!(matches!(err, FaviconError::IoError(_)));
    }

    #[test]
    fn test_every_variant_has_guidance() {
        let errors = vec![
            FaviconError::FontNotFound {
                path: PathBuf::from("consola.ttf"),
            },
            FaviconError::InvalidFont {
                path: PathBuf::from("consola.ttf"),
                message: "bad table".to_string(),
            },
            FaviconError::ImageError(image::ImageError::Limits(
                image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError),
            )),
            FaviconError::IoError(std::io::Error::other("disk full")),
            FaviconError::InvalidConfigValueError {
                field: "output_sizes".to_string(),
                value: "512".to_string(),
                reason: "too large".to_string(),
            },
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
            assert!(!err.user_friendly_message().is_empty());
            assert!(!err.recovery_suggestion().is_empty());
        }
    }
}
