//! CLI Adapter.

mod check;
mod diff;
mod list;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::api;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "reqfile")]
#[command(version)]
#[command(about = "Parse, lint, and diff ordered dependency manifests", long_about = None)]
struct Cli {
    /// Manifest to operate on (defaults to reqfile.toml's manifest.path or requirements.txt)
    #[arg(short = 'f', long = "file", global = true, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a bundled manifest template
    #[clap(visible_alias = "i")]
    Init {
        /// Template name (see `reqfile templates`)
        #[arg(short, long)]
        template: Option<String>,
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },
    /// List bundled manifest templates
    #[clap(visible_alias = "t")]
    Templates,
    /// Print entries in declared order with the manifest fingerprint
    #[clap(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lint the manifest
    #[clap(visible_alias = "c")]
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Test a candidate version against a package's declared constraint
    #[clap(visible_alias = "e")]
    Eval {
        /// Package name (case and separator insensitive)
        name: String,
        /// Candidate version
        version: String,
    },
    /// Rewrite the manifest in canonical form
    Fmt {
        /// Report whether the file is canonical without writing
        #[arg(long)]
        check: bool,
    },
    /// Compare two manifests
    Diff {
        old: PathBuf,
        new: PathBuf,
        /// Exit with status 1 when the edit changes install order
        #[arg(long)]
        deny_reorder: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let file = cli.file.as_deref();
    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { template, force } => run_init(file, template.as_deref(), force).map(|_| 0),
        Commands::Templates => run_templates().map(|_| 0),
        Commands::List { format } => list::run_list(file, format.into()).map(|_| 0),
        Commands::Check { strict } => check::run_check(file, strict),
        Commands::Eval { name, version } => run_eval(file, &name, &version),
        Commands::Fmt { check } => run_fmt(file, check),
        Commands::Diff { old, new, deny_reorder } => diff::run_diff(&old, &new, deny_reorder),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

impl From<OutputFormat> for api::ListFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => api::ListFormat::Text,
            OutputFormat::Json => api::ListFormat::Json,
        }
    }
}

fn run_init(file: Option<&Path>, template: Option<&str>, force: bool) -> Result<(), AppError> {
    let outcome = api::init(file, template, force)?;
    let verb = if outcome.overwritten { "Replaced" } else { "Created" };
    println!(
        "✅ {} {} from template '{}' ({} entries)",
        verb,
        outcome.path.display(),
        outcome.template,
        outcome.entries
    );
    Ok(())
}

fn run_templates() -> Result<(), AppError> {
    let templates = api::templates()?;
    println!("Available templates:");
    for template in templates {
        println!("  {} - {} ({} entries)", template.name, template.summary, template.entries);
    }
    Ok(())
}

fn run_eval(file: Option<&Path>, name: &str, version: &str) -> Result<i32, AppError> {
    let outcome = api::eval(file, name, version)?;
    let requirement = format!("{}{}", outcome.name, outcome.constraint);
    match &outcome.verdict {
        api::Verdict::Accepted => {
            println!("{} accepts {}", requirement, outcome.version);
            Ok(0)
        }
        api::Verdict::Rejected { failing } => {
            println!("{} rejects {} (fails {})", requirement, outcome.version, failing.join(", "));
            Ok(1)
        }
    }
}

fn run_fmt(file: Option<&Path>, check: bool) -> Result<i32, AppError> {
    let outcome = api::fmt(file, api::FmtOptions { check })?;
    let path = outcome.path.display();
    if !outcome.changed {
        println!("✅ {} is already canonical", path);
        return Ok(0);
    }
    if outcome.written {
        println!("✅ Formatted {}", path);
        Ok(0)
    } else {
        eprintln!("{} is not in canonical form (run `reqfile fmt` to rewrite)", path);
        Ok(1)
    }
}
