use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mvo` binary.
#[derive(Debug, Parser)]
#[command(name = "mvo", version, about = "MVO - inspect idea feeds")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON catalog file (defaults to config, then the bundled catalog)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Answer immediately instead of simulating network latency
    #[arg(long, global = true)]
    pub no_latency: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            catalog: self.catalog.clone(),
            no_latency: self.no_latency,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{FeedCommands, FeedKindArg, IdeasCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "mvo",
            "--format",
            "table",
            "--limit",
            "10",
            "--no-latency",
            "ideas",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.no_latency);
        assert!(matches!(
            cli.command,
            Commands::Ideas {
                action: IdeasCommands::List { offset: 0 }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mvo", "ideas", "more", "--count", "5", "--verbose"])
            .expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Ideas {
                action: IdeasCommands::More { count: 5 }
            }
        ));
    }

    #[test]
    fn featured_accepts_offset() {
        let cli = Cli::try_parse_from(["mvo", "feed", "featured", "--offset", "1"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Feed {
                action: FeedCommands::Featured { offset: 1 }
            }
        ));
    }

    #[test]
    fn simulate_accepts_kind_and_cap() {
        let cli = Cli::try_parse_from([
            "mvo",
            "feed",
            "simulate",
            "for-you",
            "--max-items",
            "12",
            "--remount",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Feed {
                action:
                    FeedCommands::Simulate {
                        kind,
                        max_items,
                        remount,
                    },
            } => {
                assert_eq!(kind, FeedKindArg::ForYou);
                assert_eq!(max_items, Some(12));
                assert!(remount);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
