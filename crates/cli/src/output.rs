//! `[+]`/`[-]` status lines and pretty JSON payloads.

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

pub fn print_status(title: &str, detail: impl AsRef<str>) {
    println!("{} {}", format!("[+] {title}:").green().bold(), detail.as_ref());
}

pub fn print_error(title: &str, detail: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        format!("[-] {title}:").red().bold(),
        detail.as_ref().yellow()
    );
}

/// Pretty-print a payload to stdout.
pub fn print_json(payload: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
