//! Fixed instruction template sent to the generation provider.

use crate::GenerationRequest;

/// Display text for a prompt count.
///
/// `"3-5"` reads as `"3 to 5"`; every other value passes through untouched.
///
/// # Examples
///
/// ```
/// use journal_guru_core::prompt_count_phrase;
///
/// assert_eq!(prompt_count_phrase("3-5"), "3 to 5");
/// assert_eq!(prompt_count_phrase("10"), "10");
/// ```
pub fn prompt_count_phrase(num_prompts: &str) -> &str {
    if num_prompts == "3-5" {
        "3 to 5"
    } else {
        num_prompts
    }
}

fn prompt_noun(num_prompts: &str) -> &'static str {
    if num_prompts == "1" { "prompt" } else { "prompts" }
}

/// Renders the journaling-coach instruction for a request.
///
/// Field values are inserted verbatim.
///
/// # Examples
///
/// ```
/// use journal_guru_core::{GenerationRequest, render_instruction};
///
/// let request = GenerationRequest::new("26-35", "new job", "stoic", "1");
/// let instruction = render_instruction(&request);
/// assert!(instruction.contains("create 1 journal prompt for"));
/// ```
pub fn render_instruction(request: &GenerationRequest) -> String {
    let age = request.age();
    let issue = request.issue();
    let lens = request.lens();
    let num_prompts = request.num_prompts();
    let count = prompt_count_phrase(num_prompts);
    let noun = prompt_noun(num_prompts);

    format!(
        "You are a thoughtful journaling coach helping someone develop meaningful self-reflection practices. \
Please create {count} journal {noun} for the following person:

Age Range: {age}
Life Situation: {issue}
Philosophical/Spiritual Lens: {lens}

Requirements:
- Tailor the language and complexity to be age-appropriate for someone in the {age} age range
- Focus specifically on helping them explore \"{issue}\"
- Frame the prompts through a {lens} perspective, incorporating relevant principles and wisdom from this tradition
- Make each prompt open-ended to encourage deep reflection
- Ensure prompts are specific enough to be actionable but broad enough to allow personal interpretation
- Include gentle guidance on how to approach the prompt if helpful

Please provide thoughtful, compassionate prompts that will genuinely help this person gain insight and clarity."
    )
}
