//! Argument definitions.

use clap::{Args, Parser, Subcommand};
use journal_guru_composer::DEFAULT_RELAY_URL;
use journal_guru_core::{AgeRange, PromptCount};
use strum::IntoEnumIterator;

/// Journaling prompts tailored by age, life situation and philosophical lens.
#[derive(Parser, Debug)]
#[command(name = "journal-guru")]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the relay endpoint
    Serve(ServeArgs),
    /// Request prompts from a running relay
    Compose(ComposeArgs),
    /// List the preset options the form offers
    Choices,
}

/// Options for `serve`.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Bind host, overriding JOURNAL_GURU_HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overriding JOURNAL_GURU_PORT
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Options for `compose`.
#[derive(Args, Debug, Clone)]
pub struct ComposeArgs {
    /// Age range
    #[arg(long, value_parser = parse_age)]
    pub age: AgeRange,

    /// Issue to explore, or "Other" together with --custom-issue
    #[arg(long)]
    pub issue: String,

    /// Free-text issue used when --issue is "Other"
    #[arg(long, default_value = "")]
    pub custom_issue: String,

    /// Philosophical lens, or "Other" together with --custom-lens
    #[arg(long)]
    pub lens: String,

    /// Free-text lens used when --lens is "Other"
    #[arg(long, default_value = "")]
    pub custom_lens: String,

    /// Number of prompts: 1, 3-5, 10 or 15
    #[arg(long, value_parser = parse_count)]
    pub count: PromptCount,

    /// Relay base URL
    #[arg(long, env = "JOURNAL_GURU_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    pub relay_url: String,

    /// Also copy the prompts to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

fn expected<I: IntoIterator<Item = &'static str>>(values: I) -> String {
    format!("expected one of: {}", values.into_iter().collect::<Vec<_>>().join(", "))
}

fn parse_age(raw: &str) -> Result<AgeRange, String> {
    raw.parse::<AgeRange>()
        .map_err(|_| expected(AgeRange::iter().map(|a| a.as_str())))
}

fn parse_count(raw: &str) -> Result<PromptCount, String> {
    raw.parse::<PromptCount>()
        .map_err(|_| expected(PromptCount::iter().map(|c| c.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compose_parses_form_values() {
        let cli = Cli::try_parse_from([
            "journal-guru",
            "compose",
            "--age",
            "over 55",
            "--issue",
            "Other",
            "--custom-issue",
            "retirement",
            "--lens",
            "stoic",
            "--count",
            "3-5",
        ])
        .unwrap();

        let Commands::Compose(args) = cli.command else {
            panic!("expected compose");
        };
        assert_eq!(args.age, AgeRange::Over55);
        assert_eq!(args.count, PromptCount::ThreeToFive);
        assert_eq!(args.custom_issue, "retirement");
        assert!(!args.copy);
    }

    #[test]
    fn test_compose_rejects_unknown_count() {
        let result = Cli::try_parse_from([
            "journal-guru", "compose", "--age", "26-35", "--issue", "new job", "--lens", "stoic",
            "--count", "7",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_age_error_lists_options() {
        let err = parse_age("99").unwrap_err();
        assert_eq!(err, "expected one of: 15-25, 26-35, 36-45, 46-55, over 55");
    }

    #[test]
    fn test_serve_accepts_port_override() {
        let cli = Cli::try_parse_from(["journal-guru", "serve", "--port", "4000"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, Some(4000));
        assert_eq!(args.host, None);
    }
}
