use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::theme::ThemeMode;

const BUNDLED_DECK: &str = include_str!("../decks/oastudio.yaml");

/// Title of the menu group holding slides that come before the first section.
const PROLOGUE: &str = "Prologue";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub kind: SlideKind,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,

    /// Preferred theme for the slide. Informational only; the viewer theme wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Welcome,
    Cover,
    SectionHeader,
    ContentText,
    ContentList,
    Palette,
    Typography,
    GridSystem,
    Ending,
}

impl SlideKind {
    /// Slides of these kinds open a new group in the menu.
    pub fn starts_section(&self) -> bool {
        matches!(self, Self::SectionHeader | Self::Welcome | Self::Ending)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

/// A menu group: a section title and the catalog indices that belong to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub slides: Vec<usize>,
}

impl Catalog {
    /// The OAStudio deck compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_DECK).context("Bundled deck is invalid")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        if catalog.slides.is_empty() {
            anyhow::bail!("Deck contains no slides");
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("brandeck")
    }

    /// Group slides for the menu. A section starts at every section header,
    /// welcome or ending slide; repeated titles merge into the earlier group.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        let mut current: &str = PROLOGUE;

        for (index, slide) in self.slides.iter().enumerate() {
            if slide.kind.starts_section() {
                current = slide.title.as_str();
            }
            match sections.iter_mut().find(|s| s.title == current) {
                Some(section) => section.slides.push(index),
                None => sections.push(Section {
                    title: current.to_string(),
                    slides: vec![index],
                }),
            }
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_deck_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.slides[0].kind, SlideKind::Cover);
        assert_eq!(catalog.slides[17].kind, SlideKind::Ending);
        assert_eq!(catalog.display_title(), "OAStudio Brand Guidelines");
    }

    #[test]
    fn test_content_variants() {
        let catalog = Catalog::bundled().unwrap();
        let mission = catalog.slides.iter().find(|s| s.id == "1.1").unwrap();
        assert!(matches!(mission.content, Some(Content::Text(ref t)) if t.starts_with("To design")));

        let vision = catalog.slides.iter().find(|s| s.id == "1.2").unwrap();
        assert!(matches!(vision.content, Some(Content::List(ref items)) if items.len() == 5));

        let values = catalog.slides.iter().find(|s| s.id == "1.3").unwrap();
        assert!(values.content.is_none());
        assert_eq!(values.details.len(), 5);
        assert_eq!(values.details[0].label, "A");
        assert_eq!(values.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn test_sections_grouping() {
        let catalog = Catalog::bundled().unwrap();
        let sections = catalog.sections();
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Prologue",
                "Brand Foundations",
                "Brand Story",
                "Voice & Tone",
                "Logo System",
                "Color System",
                "Typography",
                "Imagery",
                "Thank You",
            ]
        );
        assert_eq!(sections[0].slides, vec![0]);
        assert_eq!(sections[1].slides, vec![1, 2, 3, 4]);
        assert_eq!(sections[8].slides, vec![17]);
        let total: usize = sections.iter().map(|s| s.slides.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_repeated_section_title_merges() {
        let yaml = r#"
slides:
  - { id: a, kind: section-header, title: One }
  - { id: b, kind: content-text, title: B, content: text }
  - { id: c, kind: section-header, title: Two }
  - { id: d, kind: section-header, title: One }
  - { id: e, kind: palette, title: E }
"#;
        let sections = Catalog::parse(yaml).unwrap().sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].slides, vec![0, 1, 3, 4]);
        assert_eq!(sections[1].slides, vec![2]);
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = Catalog::parse("slides: []").unwrap_err();
        assert!(err.to_string().contains("no slides"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let yaml = "slides:\n  - { id: x, kind: carousel, title: X }\n";
        assert!(Catalog::parse(yaml).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/deck.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
