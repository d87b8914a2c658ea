use anyhow::Result;
use colored::Colorize;
use inquire::{Confirm, Password, PasswordDisplayMode, Text};

use crate::cli::AiCommands;
use crate::commands::config::mask_key;
use crate::config::{AiConfig, Config, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};

pub fn run(command: AiCommands) -> Result<()> {
    match command {
        AiCommands::Init => init(),
        AiCommands::Status => status(),
        AiCommands::Remove => remove(),
    }
}

fn init() -> Result<()> {
    let mut config = Config::load_or_default();
    let current = config.ai();

    println!("{}", "Set up Gemini for the AI studio".bold());
    println!(
        "{}",
        "Get a key at https://aistudio.google.com/apikey".dimmed()
    );
    println!();

    let api_key = Password::new("Gemini API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    let image_model = Text::new("Image model:")
        .with_default(current.image_model())
        .prompt()?;
    let text_model = Text::new("Text model:")
        .with_default(current.text_model())
        .prompt()?;

    config.ai = Some(AiConfig {
        api_key: Some(api_key),
        image_model: non_default(image_model, DEFAULT_IMAGE_MODEL),
        text_model: non_default(text_model, DEFAULT_TEXT_MODEL),
    });
    let path = config.save()?;

    println!();
    println!(
        "{} {}",
        "AI configuration saved to".green(),
        path.display()
    );
    Ok(())
}

fn status() -> Result<()> {
    let config = Config::load_or_default();
    let ai = config.ai();

    let key_source = match &ai.api_key {
        Some(key) if !key.is_empty() => Some(format!("{} (config)", mask_key(key))),
        _ => ai.resolve_api_key().map(|key| format!("{} (environment)", mask_key(&key))),
    };

    match key_source {
        Some(source) => println!("{} {source}", "API key:".bold()),
        None => println!(
            "{} {}",
            "API key:".bold(),
            "not set. Run `brandeck ai init` or set GEMINI_API_KEY.".yellow()
        ),
    }
    println!("{} {}", "Image model:".bold(), ai.image_model());
    println!("{} {}", "Text model:".bold(), ai.text_model());
    Ok(())
}

fn remove() -> Result<()> {
    let mut config = Config::load_or_default();
    if config.ai.is_none() {
        println!("{}", "No AI configuration to remove.".yellow());
        return Ok(());
    }

    let confirmed = Confirm::new("Remove the stored API key and model settings?")
        .with_default(false)
        .prompt()?;
    if !confirmed {
        println!("Cancelled.");
        return Ok(());
    }

    config.ai = None;
    config.save()?;
    println!("{}", "AI configuration removed.".green());
    Ok(())
}

/// Only persist a model name when it differs from the built-in default.
fn non_default(value: String, default: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == default {
        None
    } else {
        Some(value.to_string())
    }
}
