//! Version command

use console::{style, Emoji};

static WOLF: Emoji = Emoji(" 🐺", "");

/// Version banner
#[must_use]
pub fn banner() -> String {
    format!("LupettoGo CLI v{}", env!("CARGO_PKG_VERSION"))
}

/// Print the version banner
pub fn execute() {
    println!("{}{}", style(banner()).bold(), WOLF);
}
