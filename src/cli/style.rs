//! Terminal styling for status lines

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Check mark shown before successful outcomes
pub const CHECK: &str = "✓";

/// Semantic styles, applied only when the stream supports color
pub trait Stylize {
    /// De-emphasized informational text
    fn muted(&self) -> String;
    /// Identifiers worth noticing (page IDs)
    fn emphasis(&self) -> String;
    /// Links
    fn accent(&self) -> String;
    /// Error prefix, for stderr
    fn failure(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }

    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    fn failure(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red())
            .to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK
        .if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}
