mod ai;
mod app;
mod catalog;
mod cli;
mod commands;
mod config;
mod deck;
mod logging;
mod render;
mod theme;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_config = logging::LogConfig::from_flags(cli.verbose, cli.quiet).with_ansi(!cli.no_color);
    logging::init_logging(&log_config);

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
