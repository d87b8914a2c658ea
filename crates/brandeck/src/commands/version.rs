use colored::Colorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!();
    println!("  {}  {}", "brandeck".bold(), format!("v{VERSION}").dimmed());
    println!("  {}", "OAStudio brand guidelines deck".dimmed());
    println!();
}
