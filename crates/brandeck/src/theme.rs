use eframe::egui::{Color32, FontFamily, FontId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    Lime,
    Orange,
    Blue,
    Purple,
}

impl Accent {
    pub fn all() -> &'static [Accent] {
        &[Accent::Lime, Accent::Orange, Accent::Blue, Accent::Purple]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lime => "lime",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Lime => "Acid Lime",
            Self::Orange => "Hyper Orange",
            Self::Blue => "Electric Blue",
            Self::Purple => "Cyber Purple",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Lime => "#D4FF00",
            Self::Orange => "#FF4D00",
            Self::Blue => "#0066FF",
            Self::Purple => "#BD00FF",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Self::Lime => Color32::from_rgb(0xD4, 0xFF, 0x00),
            Self::Orange => Color32::from_rgb(0xFF, 0x4D, 0x00),
            Self::Blue => Color32::from_rgb(0x00, 0x66, 0xFF),
            Self::Purple => Color32::from_rgb(0xBD, 0x00, 0xFF),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Lime => Self::Orange,
            Self::Orange => Self::Blue,
            Self::Blue => Self::Purple,
            Self::Purple => Self::Lime,
        }
    }
}

impl std::fmt::Display for Accent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontTheme {
    #[default]
    Manrope,
    Outfit,
    Ubuntu,
    Oswald,
}

impl FontTheme {
    pub fn all() -> &'static [FontTheme] {
        &[
            FontTheme::Manrope,
            FontTheme::Outfit,
            FontTheme::Ubuntu,
            FontTheme::Oswald,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Manrope => "manrope",
            Self::Outfit => "outfit",
            Self::Ubuntu => "ubuntu",
            Self::Oswald => "oswald",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manrope => "Manrope",
            Self::Outfit => "Outfit",
            Self::Ubuntu => "Ubuntu",
            Self::Oswald => "Oswald",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Manrope => Self::Outfit,
            Self::Outfit => Self::Ubuntu,
            Self::Ubuntu => Self::Oswald,
            Self::Oswald => Self::Manrope,
        }
    }

    /// egui ships one proportional and one monospace face, so font themes
    /// map onto a family plus a display size factor.
    pub fn display_family(&self) -> FontFamily {
        match self {
            Self::Ubuntu => FontFamily::Monospace,
            _ => FontFamily::Proportional,
        }
    }

    pub fn display_scale(&self) -> f32 {
        match self {
            Self::Manrope => 1.0,
            Self::Outfit => 1.06,
            Self::Ubuntu => 0.9,
            Self::Oswald => 1.14,
        }
    }

    /// Oswald is a condensed uppercase display face.
    pub fn uppercase_titles(&self) -> bool {
        matches!(self, Self::Oswald)
    }
}

/// The three user-cycled appearance settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Appearance {
    pub mode: ThemeMode,
    pub accent: Accent,
    pub font: FontTheme,
}

impl Appearance {
    pub fn theme(&self) -> Theme {
        Theme::new(self.mode, self.accent, self.font)
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub font: FontTheme,
    pub background: Color32,
    pub foreground: Color32,
    pub secondary: Color32,
    pub border: Color32,
    pub panel: Color32,
    pub accent: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub body_size: f32,
    pub label_size: f32,
}

impl Theme {
    pub fn new(mode: ThemeMode, accent: Accent, font: FontTheme) -> Self {
        let base = match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        };
        Self {
            accent: accent.color(),
            font,
            ..base
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            font: FontTheme::default(),
            background: Color32::BLACK,
            foreground: Color32::WHITE,
            secondary: Color32::from_rgb(0x6B, 0x72, 0x80),
            border: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x1A),
            panel: Color32::from_rgba_unmultiplied(0x00, 0x00, 0x00, 0xCC),
            accent: Accent::default().color(),
            h1_size: 120.0,
            h2_size: 72.0,
            body_size: 40.0,
            label_size: 16.0,
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            font: FontTheme::default(),
            background: Color32::WHITE,
            foreground: Color32::BLACK,
            secondary: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            border: Color32::from_rgba_unmultiplied(0x00, 0x00, 0x00, 0x1A),
            panel: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0xCC),
            accent: Accent::default().color(),
            h1_size: 120.0,
            h2_size: 72.0,
            body_size: 40.0,
            label_size: 16.0,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    pub fn display_font(&self, size: f32) -> FontId {
        FontId::new(size * self.font.display_scale(), self.font.display_family())
    }

    pub fn mono_font(&self, size: f32) -> FontId {
        FontId::monospace(size)
    }

    pub fn title_text(&self, text: &str) -> String {
        if self.font.uppercase_titles() {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }

    /// Text color that stays readable on top of `fill`.
    pub fn contrast_on(fill: Color32) -> Color32 {
        let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
        if luma > 140.0 {
            Color32::BLACK
        } else {
            Color32::WHITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_cycle_visits_all() {
        let mut accent = Accent::Lime;
        let mut seen = vec![accent];
        for _ in 0..3 {
            accent = accent.next();
            seen.push(accent);
        }
        assert_eq!(seen, Accent::all());
        assert_eq!(accent.next(), Accent::Lime);
    }

    #[test]
    fn test_font_cycle_order() {
        let f = FontTheme::Manrope;
        assert_eq!(f.next(), FontTheme::Outfit);
        assert_eq!(f.next().next(), FontTheme::Ubuntu);
        assert_eq!(f.next().next().next(), FontTheme::Oswald);
        assert_eq!(f.next().next().next().next(), FontTheme::Manrope);
    }

    #[test]
    fn test_names_round_trip() {
        for accent in Accent::all() {
            assert_eq!(Accent::from_name(accent.name()), Some(*accent));
        }
        for font in FontTheme::all() {
            assert_eq!(FontTheme::from_name(font.name()), Some(*font));
        }
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("sepia"), None);
    }

    #[test]
    fn test_theme_carries_accent() {
        let theme = Appearance {
            mode: ThemeMode::Light,
            accent: Accent::Blue,
            font: FontTheme::Oswald,
        }
        .theme();
        assert_eq!(theme.accent, Color32::from_rgb(0x00, 0x66, 0xFF));
        assert_eq!(theme.background, Color32::WHITE);
        assert_eq!(theme.title_text("Vision"), "VISION");
    }

    #[test]
    fn test_contrast_on_accents() {
        assert_eq!(Theme::contrast_on(Accent::Lime.color()), Color32::BLACK);
        assert_eq!(Theme::contrast_on(Color32::BLACK), Color32::WHITE);
    }
}
