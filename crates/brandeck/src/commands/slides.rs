use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::catalog::{Catalog, Slide};
use crate::render::text::padded;

/// Load a deck file, or the bundled deck when no path is given.
pub fn load_catalog(deck: Option<&Path>) -> Result<Catalog> {
    match deck {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            Catalog::load(path)
        }
        None => Catalog::bundled(),
    }
}

pub fn run(deck: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(deck)?;

    println!(
        "{} ({} slides)",
        catalog.display_title().bold(),
        catalog.len()
    );

    for section in catalog.sections() {
        println!();
        println!("{}", section.title.to_uppercase().cyan().bold());
        for &index in &section.slides {
            if let Some(slide) = catalog.get(index) {
                println!("  {}", slide_line(index, slide));
            }
        }
    }
    println!();

    Ok(())
}

/// One listing row: 1-indexed number, title, and subtitle if any.
fn slide_line(index: usize, slide: &Slide) -> String {
    let number = padded(index + 1);
    match &slide.subtitle {
        Some(subtitle) => format!("{}  {}  {}", number.dimmed(), slide.title, subtitle.dimmed()),
        None => format!("{}  {}", number.dimmed(), slide.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled_when_no_path() {
        let catalog = load_catalog(None).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_deck_reports_path() {
        let err = load_catalog(Some(Path::new("/nonexistent/deck.yaml"))).unwrap_err();
        assert!(err.to_string().contains("File not found"), "got: {err}");
    }

    #[test]
    fn test_load_external_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.yaml");
        std::fs::write(
            &path,
            "title: Mini\nslides:\n  - id: a\n    kind: cover\n    title: Hello\n",
        )
        .unwrap();
        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.display_title(), "Mini");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_slide_line_is_one_indexed() {
        colored::control::set_override(false);
        let catalog = Catalog::bundled().unwrap();
        let line = slide_line(0, catalog.get(0).unwrap());
        assert!(line.starts_with("01  "), "got: {line}");
    }
}
