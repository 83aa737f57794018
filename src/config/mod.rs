pub mod cli;

use crate::domain::ports::PathProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};

pub const FONT_DIR_ENV: &str = "WINDIR";
pub const DEFAULT_SYSTEM_ROOT: &str = "C:/Windows";
pub const FONT_FILE_NAME: &str = "consola.ttf";

/// Image directory, relative to the site root.
pub const IMAGE_DIR: &str = "assets/images";
pub const ICO_FILE_NAME: &str = "favicon.ico";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "favicon-gen")]
#[command(about = "Generate the favicon PNG set and ICO file", version)]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 字型與輸出位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub site_root: PathBuf,
    pub font_path: PathBuf,
}

impl SitePaths {
    /// 以目前目錄為網站根目錄, 字型目錄取自 `WINDIR`
    pub fn from_env() -> Self {
        let system_root = std::env::var(FONT_DIR_ENV).ok();
        Self::with_root(".", font_path_for(system_root.as_deref()))
    }

    pub fn with_root(site_root: impl Into<PathBuf>, font_path: impl Into<PathBuf>) -> Self {
        Self {
            site_root: site_root.into(),
            font_path: font_path.into(),
        }
    }
}

/// `<system root>/Fonts/consola.ttf`, falling back to `C:/Windows` when unset or empty.
pub fn font_path_for(system_root: Option<&str>) -> PathBuf {
    let root = system_root
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(DEFAULT_SYSTEM_ROOT);
    Path::new(root).join("Fonts").join(FONT_FILE_NAME)
}

impl PathProvider for SitePaths {
    fn font_path(&self) -> &Path {
        &self.font_path
    }

    fn image_dir(&self) -> PathBuf {
        self.site_root.join(IMAGE_DIR)
    }

    fn ico_path(&self) -> PathBuf {
        self.site_root.join(ICO_FILE_NAME)
    }
}

impl Validate for SitePaths {
    fn validate(&self) -> Result<()> {
        validate_path("site_root", &self.site_root)?;
        validate_path("font_path", &self.font_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_path_fallback() {
        assert_eq!(
            font_path_for(None),
            Path::new("C:/Windows").join("Fonts").join("consola.ttf")
        );
        assert_eq!(font_path_for(Some("")), font_path_for(None));
        assert_eq!(
            font_path_for(Some("D:/WINNT")),
            Path::new("D:/WINNT").join("Fonts").join("consola.ttf")
        );
    }

    #[test]
    fn test_output_locations() {
        let paths = SitePaths::with_root("/srv/site", "/fonts/mono.ttf");

        assert_eq!(paths.image_dir(), Path::new("/srv/site/assets/images"));
        assert_eq!(paths.ico_path(), Path::new("/srv/site/favicon.ico"));
        assert_eq!(paths.font_path(), Path::new("/fonts/mono.ttf"));
        assert!(paths.validate().is_ok());
    }

    #[test]
    fn test_empty_font_path_is_invalid() {
        let paths = SitePaths::with_root(".", "");
        assert!(paths.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        use clap::Parser;

        let config = CliConfig::parse_from(["favicon-gen"]);
        assert!(!config.verbose);

        let config = CliConfig::parse_from(["favicon-gen", "--verbose"]);
        assert!(config.verbose);

        assert!(CliConfig::try_parse_from(["favicon-gen", "--size", "32"]).is_err());
    }
}
