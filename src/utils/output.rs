// Colored stderr messages for the CLI's own diagnostics
use colored::Colorize;

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

pub fn print_hint(msg: &str) {
    eprintln!("{} {}", "hint:".yellow(), msg);
}
