//! VSAVM documentation site generator CLI.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use vsavm_site::{BuildConfig, SiteBuilder};

#[derive(Parser)]
#[command(name = "vsavm-docs")]
#[command(about = "Regenerates the VSAVM theory and wiki documentation tree")]
#[command(version)]
struct Cli {
    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Docs root override (directory containing assets/, theory/, wiki/)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_docs_dir")]
    dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
        }
    }
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &PathBuf) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let file_config = load_config(&cli.config)?;
    let docs_dir = cli
        .root
        .unwrap_or_else(|| PathBuf::from(file_config.site.dir));

    let result = SiteBuilder::new(BuildConfig { docs_dir }).build()?;

    tracing::info!(
        "Built {} pages in {}ms under {}",
        result.pages,
        result.duration_ms,
        result.docs_dir.display()
    );

    Ok(())
}
