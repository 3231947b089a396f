//! Terminal UI helpers shared by both subcommands.

pub mod format;

/// Decide whether ANSI colors should be emitted.
///
/// `--no-color` always wins; otherwise this defers to `NO_COLOR`/`FORCE_COLOR`
/// and finally actual terminal capability detection.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::Term::stdout().features().colors_supported()
}
