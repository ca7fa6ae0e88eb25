use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use folio::{BuildConfig, Error, Portfolio};

#[derive(Parser)]
#[command(name = "folio", version, about = "Build a static portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the portfolio into the page skeleton and write the page
    Build {
        /// Portfolio content (.toml or .json); the sample portfolio if omitted
        #[arg(long)]
        content: Option<PathBuf>,
        /// Page skeleton; the built-in one if omitted
        #[arg(long)]
        skeleton: Option<PathBuf>,
        #[arg(long, default_value = "dist/index.html")]
        out: PathBuf,
        /// Footer year; the current year if omitted
        #[arg(long)]
        year: Option<i32>,
        /// Fail when the content check reports warnings
        #[arg(long)]
        strict: bool,
    },
    /// Check content for unknown icons, unfiltered categories and bad links
    Check {
        #[arg(long)]
        content: Option<PathBuf>,
        #[arg(long)]
        skeleton: Option<PathBuf>,
        /// Exit non-zero when warnings are found
        #[arg(long)]
        strict: bool,
    },
    /// Write the sample portfolio as a starting point
    Init {
        #[arg(long, default_value = "portfolio.toml")]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Build {
            content,
            skeleton,
            out,
            year,
            strict,
        } => {
            let config = BuildConfig {
                content,
                skeleton,
                output: out,
                year,
                strict,
            };
            let report = folio::build(&config).context("build failed")?;
            println!("{} {}", report.digest, report.output.display());
        }
        Command::Check {
            content,
            skeleton,
            strict,
        } => {
            let config = BuildConfig {
                content,
                skeleton,
                strict,
                ..Default::default()
            };
            let portfolio = config.load_portfolio()?;
            let skeleton = config.load_skeleton()?;
            let warnings = folio::site::check(&portfolio, &skeleton)?;
            if warnings.is_empty() {
                println!("content ok");
            } else {
                for w in &warnings {
                    println!("warning: {}", w);
                }
                if strict {
                    return Err(Error::ContentWarnings(warnings).into());
                }
            }
        }
        Command::Init { out, format } => {
            if out.exists() {
                anyhow::bail!("{} already exists", out.display());
            }
            let sample = Portfolio::sample();
            let text = match format {
                Format::Toml => sample.to_toml_string()?,
                Format::Json => sample.to_json_string()?,
            };
            std::fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {}", out.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
