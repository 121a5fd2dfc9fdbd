//! Small helpers for colored terminal output

use colored::*;

pub fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

pub fn field(label: &str, value: &str) {
    println!("  {:<22} {}", format!("{}:", label).cyan(), value);
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
