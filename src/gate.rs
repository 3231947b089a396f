//! Confirms before `assets --delete` removes a
//! file. The interactive prompt library is out of scope, so this is a small
//! trait the CLI runner supplies an implementation of.

use std::path::Path;

pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Terminal implementation: reads a `y/N` line from stdin.
pub struct TerminalConfirm;

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        let term = console::Term::stdout();
        let _ = term.write_line(&format!("{message} [y/N] "));
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Non-interactive implementation for scripted `--yes`-style runs and tests.
pub struct NoConfirm {
    pub auto_approve: bool,
}

impl ConfirmPrompt for NoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.auto_approve
    }
}

/// Deletes `paths` after confirmation, skipping (never deleting) anything
/// the caller didn't classify as unused.
pub fn delete_unused_assets(paths: &[&Path], prompt: &dyn ConfirmPrompt) -> std::io::Result<usize> {
    if paths.is_empty() {
        return Ok(0);
    }
    let message = format!("Delete {} unused asset file(s)?", paths.len());
    if !prompt.confirm(&message) {
        return Ok(0);
    }
    let mut deleted = 0;
    for path in paths {
        std::fs::remove_file(path)?;
        deleted += 1;
    }
    Ok(deleted)
}
