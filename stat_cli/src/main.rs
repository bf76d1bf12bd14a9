//! # Centrum CLI Application
//!
//! Terminal front-end for the central tendency calculator. Reads a
//! comma-separated list of numbers from stdin and prints the descriptive
//! summary plus its JSON form for scripting.

use std::io::{self, BufRead, Write};

use stat_core::descriptive::Summary;
use stat_core::sample::Sample;

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    }
}

fn main() {
    println!("Centrum CLI - Central Tendency Calculator");
    println!("=========================================");
    println!();

    let input = prompt_line("Enter data (comma-separated): ");

    match Sample::parse(&input).map(|sample| Summary::compute(&sample)) {
        Ok(summary) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  DESCRIPTIVE SUMMARY");
            println!("═══════════════════════════════════════");
            println!();
            println!("Central Tendency:");
            println!("  {}", summary.mean_label());
            println!("  {}", summary.median_label());
            println!("  {}", summary.mode_label());
            println!();
            println!("Spread:");
            println!("  Count:   {}", summary.count);
            println!("  Min:     {}", summary.min);
            println!("  Max:     {}", summary.max);
            println!("  Range:   {}", summary.range);
            println!("  Std Dev: {}", format_optional(summary.std_dev));
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for scripting):");
            if let Ok(json) = serde_json::to_string_pretty(&summary) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
