use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::ai::{CopyKind, Resolution};

#[derive(Parser)]
#[command(name = "brandeck")]
#[command(author, version, about)]
#[command(long_about = "A slide-based brand guidelines deck.\n\n\
    Present the OAStudio brand book, or any deck in the same YAML format,\n\
    and draft on-brand renders and copy with Gemini.\n\n\
    Examples:\n  \
    brandeck                        Launch the bundled deck (fullscreen)\n  \
    brandeck deck.yaml --windowed   Launch a custom deck in a window\n  \
    brandeck slides                 List slides grouped by section\n  \
    brandeck image \"cliff house\"    Generate an architectural render")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// YAML deck to present (defaults to the bundled OAStudio deck)
    pub deck: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Increase output verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the slides of a deck, grouped into menu sections
    Slides {
        /// YAML deck (defaults to the bundled deck)
        deck: Option<PathBuf>,
    },

    /// Configure the Gemini API key for the AI studio
    Ai {
        #[command(subcommand)]
        command: AiCommands,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate an on-brand architectural render
    Image {
        /// What to render
        prompt: String,

        /// Output resolution
        #[arg(short, long, value_enum, default_value = "1k")]
        resolution: Resolution,

        /// Output file (defaults to oastudio-render.<ext> in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draft brand copy in the studio voice
    Copy {
        /// What to write about
        topic: String,

        /// Kind of copy
        #[arg(short, long, value_enum, default_value = "social")]
        kind: CopyKind,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum AiCommands {
    /// Store a Gemini API key and choose models
    Init,

    /// Show current AI configuration
    Status,

    /// Remove AI configuration
    Remove,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.accent, navigation.wheel_debounce_ms)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Slides { deck }) => crate::commands::slides::run(deck.as_deref()),
            Some(Commands::Ai { command }) => crate::commands::ai::run(command),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Image {
                prompt,
                resolution,
                output,
            }) => crate::commands::image::run(&prompt, resolution, output),
            Some(Commands::Copy { topic, kind }) => crate::commands::copy::run(&topic, kind),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => {
                let catalog = crate::commands::slides::load_catalog(self.deck.as_deref())?;
                let config = crate::config::Config::load_or_default();
                crate::app::run(catalog, self.windowed, self.slide, &config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_launch_flags() {
        let cli = Cli::try_parse_from(["brandeck", "deck.yaml", "--windowed", "--slide", "4"])
            .unwrap();
        assert_eq!(cli.deck, Some(PathBuf::from("deck.yaml")));
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(4));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_image_defaults() {
        let cli = Cli::try_parse_from(["brandeck", "image", "glass pavilion"]).unwrap();
        match cli.command {
            Some(Commands::Image {
                prompt,
                resolution,
                output,
            }) => {
                assert_eq!(prompt, "glass pavilion");
                assert_eq!(resolution, Resolution::OneK);
                assert!(output.is_none());
            }
            _ => panic!("expected image command"),
        }
    }

    #[test]
    fn test_copy_kind_values() {
        let cli = Cli::try_parse_from(["brandeck", "copy", "new office", "--kind", "email"]).unwrap();
        match cli.command {
            Some(Commands::Copy { kind, .. }) => assert_eq!(kind, CopyKind::Email),
            _ => panic!("expected copy command"),
        }
        assert!(Cli::try_parse_from(["brandeck", "copy", "x", "--kind", "tweet"]).is_err());
    }

    #[test]
    fn test_global_verbosity() {
        let cli = Cli::try_parse_from(["brandeck", "slides", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }
}
