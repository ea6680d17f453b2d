//! What the composer currently shows.

use derive_getters::Getters;

/// Message shown for any relay failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate prompts. Please try again.";

/// Result or error from the last generate action.
///
/// At most one of `prompts` and `error` is set, and neither while `loading`.
/// `copied` is only ever true alongside `prompts`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct ComposerView {
    /// Generated prompts, verbatim
    prompts: Option<String>,
    /// User-facing failure message
    error: Option<String>,
    /// A request is in flight
    loading: bool,
    /// The current prompts were copied to the clipboard
    copied: bool,
}

impl ComposerView {
    /// View holding generated prompts.
    pub fn with_prompts(prompts: impl Into<String>) -> Self {
        Self {
            prompts: Some(prompts.into()),
            ..Self::default()
        }
    }

    /// View holding the generic failure message.
    pub fn failed() -> Self {
        Self {
            error: Some(GENERIC_FAILURE_MESSAGE.to_string()),
            ..Self::default()
        }
    }

    /// View while waiting on the relay.
    pub fn in_flight() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Same view, flagged as copied.
    pub(crate) fn mark_copied(&mut self) {
        self.copied = self.prompts.is_some();
    }

    /// True when nothing has been generated, nothing failed and nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_none() && self.error.is_none() && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_is_not_empty() {
        let view = ComposerView::in_flight();
        assert!(*view.loading());
        assert!(!view.is_empty());
        assert_eq!(*view.prompts(), None);
    }

    #[test]
    fn test_copied_requires_prompts() {
        let mut failed = ComposerView::failed();
        failed.mark_copied();
        assert!(!*failed.copied());

        let mut done = ComposerView::with_prompts("1. A");
        done.mark_copied();
        assert!(*done.copied());
    }
}
