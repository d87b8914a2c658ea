use anyhow::Result;
use colored::Colorize;

use crate::ai::CopyKind;

pub fn run(topic: &str, kind: CopyKind) -> Result<()> {
    let client = super::image::client()?;

    eprintln!("{}", format!("Drafting {} about \"{topic}\"...", kind.label()).dimmed());
    let text = client.generate_copy(topic, kind)?;

    println!("{text}");
    Ok(())
}
