use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use passbook_core::{ParseResult, signatures};
use passbook_export::{within_period, write_csv};
use passbook_ingest::{identify_statement, parse_statement, registry};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

use config::{Config, OutputFormat};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PASSBOOK_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "passbook",
    version = VERSION,
    about = "Parse Indian bank statement PDFs into transactions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Identify and parse one or more statements (PDF or .json extraction dump)
    Parse {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,

        /// Output format (default from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Keep transactions on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Keep transactions on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Report which bank issued a statement
    Identify {
        file: PathBuf,

        #[arg(long)]
        password: Option<String>,
    },

    /// List the banks in the catalog and whether they can be parsed
    Banks,

    /// Manage ~/.passbook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_tracing(&cfg.log.filter);

    match cli.command {
        Command::Parse {
            files,
            password,
            format,
            output,
            from,
            to,
        } => {
            let format = format.unwrap_or(cfg.output.format);
            parse_files(&cfg, files, password, format, output, from, to).await?;
        }

        Command::Identify { file, password } => {
            let bank = identify_statement(&file, password.as_deref())
                .with_context(|| format!("opening {}", file.display()))?;
            match bank {
                Some(tag) => {
                    let parsable = if registry().supports(tag) { "" } else { " (identify only)" };
                    println!("{tag}{parsable}");
                }
                None => println!("{}", passbook_core::UNKNOWN_BANK),
            }
        }

        Command::Banks => {
            for sig in signatures() {
                let status = if registry().supports(sig.tag) { "parse" } else { "identify only" };
                println!("{:<10} {:<32} {}", sig.tag, sig.name, status);
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

/// Parse every file on the blocking pool, then report in argument order.
async fn parse_files(
    cfg: &Config,
    files: Vec<PathBuf>,
    password: Option<String>,
    format: OutputFormat,
    output: Option<PathBuf>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let handles: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| {
            let password = password.clone();
            tokio::task::spawn_blocking(move || parse_statement(&path, password.as_deref()))
        })
        .collect();

    let mut parsed = Vec::new();
    let mut failed = 0;
    for (path, handle) in files.iter().zip(handles) {
        match handle.await.context("parser task panicked")? {
            Ok(result) => parsed.push((path.clone(), restrict(result, from, to))),
            Err(e) => {
                failed += 1;
                error!(path = %path.display(), error = %e, "statement failed");
                eprintln!("{}: {e}", path.display());
            }
        }
    }
    info!(parsed = parsed.len(), failed, "done");

    let mut out: Box<dyn Write> = match &output {
        Some(p) => Box::new(
            std::fs::File::create(p).with_context(|| format!("create {}", p.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    write_results(&mut out, cfg, format, &parsed)?;
    out.flush()?;

    if failed > 0 {
        bail!("{failed} of {} statements failed", files.len());
    }
    Ok(())
}

/// Drop transactions outside `[from, to]`, keeping the count in step.
fn restrict(
    mut result: ParseResult,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> ParseResult {
    if from.is_none() && to.is_none() {
        return result;
    }
    result.transactions = within_period(&result.transactions, from, to)
        .into_iter()
        .cloned()
        .collect();
    result.total_transactions = result.transactions.len();
    result
}

fn write_results<W: Write>(
    out: &mut W,
    cfg: &Config,
    format: OutputFormat,
    parsed: &[(PathBuf, ParseResult)],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let results: Vec<&ParseResult> = parsed.iter().map(|(_, r)| r).collect();
            let value = match results.as_slice() {
                [single] => serde_json::to_value(single)?,
                _ => serde_json::to_value(&results)?,
            };
            if cfg.output.pretty {
                serde_json::to_writer_pretty(&mut *out, &value)?;
            } else {
                serde_json::to_writer(&mut *out, &value)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let txns: Vec<_> = parsed
                .iter()
                .flat_map(|(_, r)| r.transactions.iter().cloned())
                .collect();
            write_csv(&mut *out, &txns)?;
        }
        OutputFormat::Table => {
            let tz = cfg.timezone()?;
            for (i, (path, result)) in parsed.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                render::render_table(out, &display_name(path), result, tz)?;
            }
        }
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
