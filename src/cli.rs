use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::rules::TableVariant;

#[derive(Parser, Debug)]
#[command(name = "propinfer")]
#[command(about = "Infer prop types from naming conventions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the nearest .propinfer.toml)
    #[arg(long, global = true, env = "PROPINFER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify identifiers and show the type each one implies
    Classify {
        /// Identifiers to classify
        #[arg(required = true)]
        identifiers: Vec<String>,

        /// Rule table variant
        #[arg(short, long, value_enum)]
        table: Option<TableVariant>,

        /// Type already declared for the identifiers (TypeScript syntax)
        #[arg(short, long)]
        declared: Option<String>,

        /// Show which rule matched
        #[arg(long)]
        explain: bool,
    },

    /// Infer prop types for the shapes declared in a source file
    Infer {
        /// JavaScript or TypeScript file
        path: PathBuf,

        /// Rule table variant
        #[arg(short, long, value_enum)]
        table: Option<TableVariant>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep declared `any` as a deliberate open type
        #[arg(long)]
        keep_any: bool,
    },

    /// List a rule table's categories in priority order
    Rules {
        /// Rule table variant
        #[arg(short, long, value_enum)]
        table: Option<TableVariant>,
    },

    /// Write a default .propinfer.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Log level for the verbosity count; `RUST_LOG` overrides it.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
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
    fn test_parse_classify() {
        let cli = Cli::try_parse_from([
            "propinfer", "-vv", "classify", "onClick", "isOpen", "--table", "props",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        match cli.command {
            Commands::Classify {
                identifiers, table, ..
            } => {
                assert_eq!(identifiers, vec!["onClick", "isOpen"]);
                assert_eq!(table, Some(TableVariant::Props));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_infer_format() {
        let cli =
            Cli::try_parse_from(["propinfer", "infer", "Card.tsx", "--format", "ts"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Infer {
                format: OutputFormat::TypeScript,
                keep_any: false,
                ..
            }
        ));
    }

    #[test]
    fn test_classify_requires_an_identifier() {
        assert!(Cli::try_parse_from(["propinfer", "classify"]).is_err());
    }
}
