//! Immutable form state and submission-time resolution.

use derive_getters::Getters;
use derive_setters::Setters;
use journal_guru_core::{GenerationRequest, OTHER};
use journal_guru_error::{ComposerError, ComposerErrorKind};

/// Everything the user has entered so far.
///
/// Each `with_*` call returns a new value; the previous one is untouched.
/// The custom fields only matter when their selection is [`OTHER`].
///
/// # Examples
///
/// ```
/// use journal_guru_composer::FormState;
///
/// let empty = FormState::default();
/// let filled = empty
///     .clone()
///     .with_age("26-35")
///     .with_issue("Other")
///     .with_custom_issue("moving abroad")
///     .with_lens("stoic")
///     .with_num_prompts("1");
///
/// assert!(empty.age().is_empty());
/// let request = filled.resolve().unwrap();
/// assert_eq!(request.issue(), "moving abroad");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Getters, Setters)]
#[setters(prefix = "with_", into)]
pub struct FormState {
    /// Selected age range
    age: String,
    /// Selected issue, possibly the sentinel
    issue: String,
    /// Free-text issue used when `issue` is the sentinel
    custom_issue: String,
    /// Selected lens, possibly the sentinel
    lens: String,
    /// Free-text lens used when `lens` is the sentinel
    custom_lens: String,
    /// Selected prompt count
    num_prompts: String,
}

impl FormState {
    /// Whether the custom issue field should be shown.
    pub fn wants_custom_issue(&self) -> bool {
        self.issue == OTHER
    }

    /// Whether the custom lens field should be shown.
    pub fn wants_custom_lens(&self) -> bool {
        self.lens == OTHER
    }

    /// Validates the form and produces the request to send.
    ///
    /// Custom text is forwarded exactly as typed.
    ///
    /// # Errors
    ///
    /// - `IncompleteForm` when any selection is empty
    /// - `MissingCustomIssue` / `MissingCustomLens` when "Other" is chosen and
    ///   its text is blank
    pub fn resolve(&self) -> Result<GenerationRequest, ComposerError> {
        if self.age.is_empty()
            || self.issue.is_empty()
            || self.lens.is_empty()
            || self.num_prompts.is_empty()
        {
            return Err(ComposerError::new(ComposerErrorKind::IncompleteForm));
        }
        if self.wants_custom_issue() && self.custom_issue.trim().is_empty() {
            return Err(ComposerError::new(ComposerErrorKind::MissingCustomIssue));
        }
        if self.wants_custom_lens() && self.custom_lens.trim().is_empty() {
            return Err(ComposerError::new(ComposerErrorKind::MissingCustomLens));
        }

        let issue = if self.wants_custom_issue() {
            &self.custom_issue
        } else {
            &self.issue
        };
        let lens = if self.wants_custom_lens() {
            &self.custom_lens
        } else {
            &self.lens
        };

        Ok(GenerationRequest::new(
            self.age.clone(),
            issue.clone(),
            lens.clone(),
            self.num_prompts.clone(),
        ))
    }
}
