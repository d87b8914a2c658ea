use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::ai::studio::image_extension;
use crate::ai::{GeminiClient, Resolution};
use crate::config::Config;

const DEFAULT_STEM: &str = "oastudio-render";

pub fn run(prompt: &str, resolution: Resolution, output: Option<PathBuf>) -> Result<()> {
    let client = client()?;

    println!(
        "Rendering {} at {}...",
        format!("\"{prompt}\"").bold(),
        resolution.image_size()
    );
    let bytes = client.generate_image(prompt, resolution)?;

    let path = output.unwrap_or_else(|| default_output(&bytes));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

pub(crate) fn client() -> Result<GeminiClient> {
    let config = Config::load_or_default();
    GeminiClient::from_config(&config.ai()).ok_or_else(|| {
        anyhow::anyhow!(
            "No API key found. Run `brandeck ai init` or set the GEMINI_API_KEY environment variable."
        )
    })
}

fn default_output(bytes: &[u8]) -> PathBuf {
    PathBuf::from(format!("{DEFAULT_STEM}.{}", image_extension(bytes)))
}
