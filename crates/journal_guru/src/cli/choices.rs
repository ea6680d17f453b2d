//! Lists the preset options.

use journal_guru_core::{AgeRange, Choice, ISSUE_CHOICES, LENS_CHOICES, PromptCount};
use journal_guru_error::JournalGuruResult;
use std::fmt::Write;
use strum::IntoEnumIterator;

fn section(out: &mut String, title: &str, rows: impl IntoIterator<Item = (&'static str, &'static str)>) {
    let _ = writeln!(out, "{}:", title);
    for (value, label) in rows {
        if value == label {
            let _ = writeln!(out, "  {}", value);
        } else {
            let _ = writeln!(out, "  {:<26} {}", value, label);
        }
    }
}

fn choice_rows(choices: &'static [Choice]) -> impl Iterator<Item = (&'static str, &'static str)> {
    choices.iter().map(|c| (c.value, c.label))
}

/// Preset options as printable text, wire value first.
pub fn render_choices() -> String {
    let mut out = String::new();
    section(&mut out, "Age ranges", AgeRange::iter().map(|a| (a.as_str(), a.label())));
    section(&mut out, "Issues", choice_rows(ISSUE_CHOICES));
    section(&mut out, "Lenses", choice_rows(LENS_CHOICES));
    section(
        &mut out,
        "Prompt counts",
        PromptCount::iter().map(|c| (c.as_str(), c.as_str())),
    );
    out
}

/// Handle the `choices` command
pub fn handle_choices_command() -> JournalGuruResult<()> {
    print!("{}", render_choices());
    Ok(())
}
