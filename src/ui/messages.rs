//! User-facing status lines (info / success / warning / error).

use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Column at which narratives are wrapped.
const WRAP_WIDTH: usize = 78;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header, e.g. `====== 🔍 Analysis Result`
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "\n{}",
        Colour::Purple.bold().paint(format!("====== {}", msg))
    );
}

/// Print a `label:` followed by free text wrapped to the terminal width.
pub fn paragraph<T: AsRef<str>>(label: &str, text: T) {
    println!("{}", Style::new().bold().paint(format!("{label}:")));
    for line in textwrap::wrap(text.as_ref(), WRAP_WIDTH) {
        println!("  {line}");
    }
}
