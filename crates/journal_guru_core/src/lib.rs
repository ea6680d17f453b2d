//! Core data types for the Journal Guru prompt relay.
//!
//! This crate holds the request and result shapes shared by the composer and
//! the relay endpoint, the preset choices offered by the form, and the fixed
//! instruction template sent to the generation provider.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod choices;
mod instruction;
mod observability;
mod request;

pub use choices::{AgeRange, Choice, ISSUE_CHOICES, LENS_CHOICES, OTHER, PromptCount};
pub use instruction::{prompt_count_phrase, render_instruction};
pub use observability::init_tracing;
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationResult};
