use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use propinfer::cli::{Cli, Commands};
use propinfer::commands::{self, ClassifyConfig, InferConfig};
use propinfer::config::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Classify {
            identifiers,
            table,
            declared,
            explain,
        } => {
            let table = config.rule_table(config.table_variant(table));
            let classify_config = ClassifyConfig {
                identifiers,
                declared,
                explain,
            };
            let mut out = io::stdout().lock();
            commands::classify_identifiers(&classify_config, &table, &mut out)?;
        }
        Commands::Infer {
            path,
            table,
            format,
            output,
            keep_any,
        } => {
            let table = config.rule_table(config.table_variant(table));
            let mut options = config.translate_options();
            if keep_any {
                options.treat_any_as_unknown = false;
            }
            let infer_config = InferConfig {
                path,
                format,
                options,
            };

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    commands::infer_file(&infer_config, &table, &mut writer)?;
                    writer.flush()?;
                }
                None => commands::infer_file(&infer_config, &table, io::stdout().lock())?,
            }
        }
        Commands::Rules { table } => {
            let table = config.rule_table(config.table_variant(table));
            commands::list_rules(&table, &mut io::stdout().lock())?;
        }
        Commands::Init { force } => {
            let dir = std::env::current_dir().context("Failed to get current directory")?;
            let path = commands::init_config(&dir, force)?;
            println!("Created {}", path.display());
        }
    }
    Ok(())
}

fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
