//! Composer command handler.

use super::ComposeArgs;
use journal_guru_composer::{Composer, FormState, HttpRelayTransport};
use journal_guru_error::JournalGuruResult;

/// Builds the form a user would have filled in from command-line values.
pub fn form_from_args(args: &ComposeArgs) -> FormState {
    FormState::default()
        .with_age(args.age.as_str())
        .with_issue(args.issue.clone())
        .with_custom_issue(args.custom_issue.clone())
        .with_lens(args.lens.clone())
        .with_custom_lens(args.custom_lens.clone())
        .with_num_prompts(args.count.as_str())
}

/// Handle the `compose` command
///
/// Prints the generated prompts verbatim on stdout.
pub async fn handle_compose_command(args: ComposeArgs) -> JournalGuruResult<()> {
    let mut composer = Composer::new(HttpRelayTransport::new(args.relay_url.clone()));
    composer.set_form(form_from_args(&args));

    let outcome = composer.generate().await.map(str::to_owned);
    match outcome {
        Ok(prompts) => print!("{}", prompts),
        Err(e) if e.kind().is_validation() => return Err(e.into()),
        Err(e) => {
            if let Some(message) = composer.view().error() {
                eprintln!("{}", message);
            }
            return Err(e.into());
        }
    }

    if args.copy {
        copy_to_clipboard(&mut composer)?;
    }
    Ok(())
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard<T>(composer: &mut Composer<T>) -> JournalGuruResult<()>
where
    T: journal_guru_composer::RelayTransport,
{
    let mut clipboard = journal_guru_composer::ArboardClipboard::new()?;
    composer.copy_result(&mut clipboard)?;
    tracing::info!("Prompts copied to clipboard");
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn copy_to_clipboard<T>(_composer: &mut Composer<T>) -> JournalGuruResult<()>
where
    T: journal_guru_composer::RelayTransport,
{
    Err(journal_guru_error::ComposerError::new(
        journal_guru_error::ComposerErrorKind::Clipboard(
            "built without clipboard support".to_string(),
        ),
    )
    .into())
}
