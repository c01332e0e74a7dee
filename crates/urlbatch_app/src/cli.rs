use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use urlbatch_core::{FilterError, FilterSpec, Settings};

#[derive(Debug, Parser)]
#[command(
    name = "urlbatch",
    version,
    about = "Open a filtered batch of links from a text file in your browser"
)]
pub struct Cli {
    /// Settings file (RON). Defaults to ./.urlbatch_settings.ron
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write the log to ./urlbatch.log
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the selected links in the browser.
    Open(OpenArgs),
    /// Print the links that `open` would use.
    List(ListArgs),
    /// Show or change stored settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Link list; one `<url> [comment]` per line. Defaults to the last file used.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub overrides: SettingsOverrides,

    /// Answer yes to the batch-size confirmation.
    #[arg(short, long)]
    pub yes: bool,

    /// Print the links instead of launching a browser.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Link list. Defaults to the last file used.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub dashes: DashArgs,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print every setting.
    Show,
    /// Print one setting.
    Get { key: String },
    /// Change one setting and save it.
    Set { key: String, value: String },
}

/// Only one filter can be active at a time.
#[derive(Debug, Args, Default)]
#[group(multiple = false)]
pub struct FilterArgs {
    /// Keep links whose comment contains TEXT.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,

    /// Keep links whose URL contains TEXT.
    #[arg(long, value_name = "TEXT")]
    pub domain: Option<String>,

    /// Keep links at positions START-END (1-based, inclusive).
    #[arg(long, value_name = "START-END")]
    pub lines: Option<String>,
}

impl FilterArgs {
    pub fn to_spec(&self) -> Result<FilterSpec, FilterError> {
        if let Some(phrase) = &self.phrase {
            Ok(FilterSpec::Phrase(phrase.clone()))
        } else if let Some(domain) = &self.domain {
            Ok(FilterSpec::Domain(domain.clone()))
        } else if let Some(lines) = &self.lines {
            FilterSpec::parse_range(lines)
        } else {
            Ok(FilterSpec::None)
        }
    }
}

#[derive(Debug, Args, Default)]
pub struct DashArgs {
    /// Skip links ending in `--`.
    #[arg(long, conflicts_with = "keep_dashes")]
    pub ignore_dashes: bool,

    /// Open links ending in `--` with the dashes removed.
    #[arg(long)]
    pub keep_dashes: bool,
}

impl DashArgs {
    pub fn resolve(&self, stored: bool) -> bool {
        if self.ignore_dashes {
            true
        } else if self.keep_dashes {
            false
        } else {
            stored
        }
    }
}

/// Per-run overrides; they are not written back to the settings file.
#[derive(Debug, Args, Default)]
pub struct SettingsOverrides {
    #[command(flatten)]
    pub dashes: DashArgs,

    /// Milliseconds to wait between two links.
    #[arg(long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Ask before opening at least N links (0 never asks).
    #[arg(long, value_name = "N")]
    pub batch_warning: Option<u32>,

    /// Browser executable to launch.
    #[arg(long, value_name = "PATH")]
    pub browser: Option<String>,
}

impl SettingsOverrides {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        settings.ignore_dashes = self.dashes.resolve(settings.ignore_dashes);
        if let Some(delay) = self.delay {
            settings.delay_ms = delay;
        }
        if let Some(batch_warning) = self.batch_warning {
            settings.batch_warning = batch_warning;
        }
        if let Some(browser) = &self.browser {
            settings.browser = Some(browser.clone());
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filters_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "urlbatch", "open", "x.txt", "--phrase", "a", "--domain", "b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn lines_filter_becomes_a_range() {
        let cli = Cli::try_parse_from(["urlbatch", "list", "x.txt", "--lines", "2-4"]).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(
            args.filter.to_spec(),
            Ok(FilterSpec::LineRange { start: 2, end: 4 })
        );
    }

    #[test]
    fn overrides_apply_on_top_of_stored_settings() {
        let cli = Cli::try_parse_from([
            "urlbatch",
            "open",
            "--keep-dashes",
            "--delay",
            "0",
            "--batch-warning",
            "3",
        ])
        .unwrap();
        let Commands::Open(args) = cli.command else {
            panic!("expected open");
        };
        assert_eq!(args.file, None);

        let settings = args.overrides.apply(Settings::default());
        assert!(!settings.ignore_dashes);
        assert_eq!(settings.delay_ms, 0);
        assert_eq!(settings.batch_warning, 3);
        assert_eq!(settings.browser, None);
    }

    #[test]
    fn dash_flags_conflict() {
        let result = Cli::try_parse_from(["urlbatch", "open", "--ignore-dashes", "--keep-dashes"]);
        assert!(result.is_err());
    }
}
