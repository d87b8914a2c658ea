use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let yaml = serde_yaml::to_string(&redacted(config))?;

    println!("{} {}", "Config file:".dimmed(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    print!("{yaml}");
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    tracing::debug!(key, path = %path.display(), "config updated");
    println!("{} {key} = {value}", "Set".green().bold());
    Ok(())
}

/// Stored API keys are never echoed back in full.
fn redacted(mut config: Config) -> Config {
    if let Some(ai) = config.ai.as_mut() {
        if let Some(key) = ai.api_key.as_mut() {
            *key = mask_key(key);
        }
    }
    config
}

/// Keep the last four characters of a key visible.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("AIzaSyExample1234"), "*************1234");
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key(""), "");
    }

    #[test]
    fn test_show_redacts_api_key() {
        let config = Config {
            ai: Some(AiConfig {
                api_key: Some("secret-key-9876".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&redacted(config)).unwrap();
        assert!(!yaml.contains("secret"), "key leaked: {yaml}");
        assert!(yaml.contains("9876"));
    }
}
