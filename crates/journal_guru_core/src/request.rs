//! Request and result types exchanged between composer and relay.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The four user choices forwarded to the relay.
///
/// Absent JSON fields deserialize to empty strings so the relay can report
/// them as missing instead of rejecting the body outright.
///
/// # Examples
///
/// ```
/// use journal_guru_core::GenerationRequest;
///
/// let request: GenerationRequest =
///     serde_json::from_str(r#"{"age":"26-35","issue":"new job"}"#).unwrap();
/// assert_eq!(request.age(), "26-35");
/// assert!(request.lens().is_empty());
/// assert!(!request.is_complete());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[serde(default, rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Age-range label
    age: String,
    /// Resolved life issue
    issue: String,
    /// Resolved philosophical lens
    lens: String,
    /// Prompt count as display text
    num_prompts: String,
}

impl GenerationRequest {
    /// Creates a request from already-resolved values.
    pub fn new(
        age: impl Into<String>,
        issue: impl Into<String>,
        lens: impl Into<String>,
        num_prompts: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            issue: issue.into(),
            lens: lens.into(),
            num_prompts: num_prompts.into(),
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// True when every field is non-empty.
    ///
    /// Values are not trimmed: a field holding only whitespace counts as present.
    pub fn is_complete(&self) -> bool {
        !self.age.is_empty()
            && !self.issue.is_empty()
            && !self.lens.is_empty()
            && !self.num_prompts.is_empty()
    }
}

/// Generated prompts, passed through exactly as the provider returned them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    prompts: String,
}

impl GenerationResult {
    /// Wraps provider text without modification.
    pub fn new(prompts: impl Into<String>) -> Self {
        Self {
            prompts: prompts.into(),
        }
    }

    /// Consumes the result, returning the prompt text.
    pub fn into_prompts(self) -> String {
        self.prompts
    }
}
