use clap::Parser;
use favicon_gen::utils::logger;
use favicon_gen::{CliConfig, SitePaths};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting favicon-gen");

    let paths = SitePaths::from_env();
    tracing::debug!("Resolved paths: {:?}", paths);

    match favicon_gen::generate(paths) {
        Ok(report) => {
            for path in &report.png_paths {
                tracing::debug!("📁 {}", path.display());
            }
            tracing::debug!("📁 {}", report.ico_path.display());
            println!("Favicon generated successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Favicon generation failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
