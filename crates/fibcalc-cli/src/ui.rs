//! Error display on stderr.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render an error line, styled unless `plain` is set.
#[must_use]
pub fn render_error(text: &str, plain: bool) -> String {
    if plain {
        format!("error: {text}")
    } else {
        format!("{} {text}", style("error:").for_stderr().red().bold())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", render_error(text, is_color_disabled()));
}
