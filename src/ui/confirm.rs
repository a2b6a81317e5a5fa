//! Confirmation capability
//!
//! Deletes require interactive confirmation. The capability is injected so
//! the widget stays testable without a real prompt.

/// Answers yes/no confirmation prompts
pub trait Confirm {
    /// Present `prompt` and return whether the user accepted
    fn confirm(&self, prompt: &str) -> bool;
}

/// Accepts every prompt without asking
///
/// For non-interactive hosts (scripts, `--yes` flows).
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
