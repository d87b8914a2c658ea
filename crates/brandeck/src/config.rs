use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::deck::NavigationTuning;
use crate::theme::{Accent, Appearance, FontTheme, ThemeMode};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "brandeck";

/// Environment variables consulted, in order, when no key is configured.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationTuning>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontTheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key. If not set, falls back to GEMINI_API_KEY, then API_KEY.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_model: Option<String>,
}

impl AiConfig {
    /// Resolve API key from config or environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
    }

    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `brandeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    /// A missing file is the normal first-run case; an unreadable or
    /// malformed one is reported, since the user's settings are being ignored.
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config file: {e:#}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# brandeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn appearance(&self) -> Appearance {
        let defaults = self.defaults.clone().unwrap_or_default();
        Appearance {
            mode: defaults.theme.unwrap_or_default(),
            accent: defaults.accent.unwrap_or_default(),
            font: defaults.font.unwrap_or_default(),
        }
    }

    pub fn tuning(&self) -> NavigationTuning {
        self.navigation.unwrap_or_default()
    }

    pub fn ai(&self) -> AiConfig {
        self.ai.clone().unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                let theme = ThemeMode::from_name(value).ok_or_else(|| {
                    anyhow::anyhow!("Invalid theme: {value}. Must be 'dark' or 'light'.")
                })?;
                self.defaults_mut().theme = Some(theme);
            }
            "defaults.accent" => {
                let accent = Accent::from_name(value).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid accent: {value}. Must be 'lime', 'orange', 'blue', or 'purple'."
                    )
                })?;
                self.defaults_mut().accent = Some(accent);
            }
            "defaults.font" => {
                let font = FontTheme::from_name(value).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid font: {value}. Must be 'manrope', 'outfit', 'ubuntu', or 'oswald'."
                    )
                })?;
                self.defaults_mut().font = Some(font);
            }
            "navigation.wheel_debounce_ms" => {
                let ms: u64 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid wheel_debounce_ms: {value}. Must be whole milliseconds.")
                })?;
                self.navigation_mut().wheel_debounce_ms = ms;
            }
            "navigation.wheel_threshold" => {
                self.navigation_mut().wheel_threshold = parse_threshold(key, value)?;
            }
            "navigation.swipe_threshold" => {
                self.navigation_mut().swipe_threshold = parse_threshold(key, value)?;
            }
            "navigation.edge_epsilon" => {
                self.navigation_mut().edge_epsilon = parse_threshold(key, value)?;
            }
            "ai.image_model" => {
                self.ai.get_or_insert_with(AiConfig::default).image_model = Some(value.to_string());
            }
            "ai.text_model" => {
                self.ai.get_or_insert_with(AiConfig::default).text_model = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.accent, defaults.font, \
                 navigation.wheel_debounce_ms, navigation.wheel_threshold, navigation.swipe_threshold, \
                 navigation.edge_epsilon, ai.image_model, ai.text_model"
            ),
        }
        Ok(())
    }

    fn defaults_mut(&mut self) -> &mut DefaultsConfig {
        self.defaults.get_or_insert_with(DefaultsConfig::default)
    }

    fn navigation_mut(&mut self) -> &mut NavigationTuning {
        self.navigation.get_or_insert_with(NavigationTuning::default)
    }
}

fn parse_threshold(key: &str, value: &str) -> Result<f32> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => anyhow::bail!("Invalid {key}: {value}. Must be a non-negative number."),
    }
}
