//! Command-line surface and dispatch.

pub mod ops;
pub mod prompt;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::debug;

use crate::catalog::RecordError;
use crate::config::Config;
use crate::page::PatchError;
use crate::store::StoreError;

use ops::Paths;
use prompt::Prompter;

/// Relative locations probed for the page when neither `--html` nor the
/// config names one.
const HTML_CANDIDATES: [&str; 3] = ["index.html", "../index.html", "../../index.html"];

/// Maintains the tool and template catalogue embedded in a static HTML page.
///
/// Inserts or removes entries in the page's embedded `aiTools` and
/// `learningTemplates` arrays, keeps the statistics counters in sync, and
/// backs the page up before every write.
#[derive(Parser, Debug)]
#[command(name = "catalog-edit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The operations offered by the CLI.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a tool to the aiTools array
    AddTool {
        /// Path to a JSON file containing the tool record (interactive
        /// prompts when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Path to the catalogue HTML page
        #[arg(long)]
        html: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Add a learning template to the learningTemplates array
    AddTemplate {
        /// Path to a JSON file containing the template record (interactive
        /// prompts when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Path to the catalogue HTML page
        #[arg(long)]
        html: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete every tool matching a name
    DeleteTool {
        /// Tool name to delete
        #[arg(long)]
        name: String,

        /// Path to the catalogue HTML page
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Delete every template matching a title
    DeleteTemplate {
        /// Template title to delete
        #[arg(long)]
        title: String,

        /// Path to the catalogue HTML page
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

/// How an operation finished. All of these are exit-code 0; failures
/// surface as [`CliError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page was updated.
    Done,
    /// The operator declined the confirmation prompt; nothing was written.
    Cancelled,
    /// The delete key matched nothing; nothing was written.
    NotFound,
}

/// Errors from any stage of an operation, unified for `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Record loading or validation failed.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The page does not contain the expected array literal.
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// Backup, write, or journal I/O failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading interactive input failed.
    #[error("failed to read input")]
    Input(#[from] io::Error),

    /// No page was found at the explicit path or any probed candidate.
    #[error("catalogue page not found (tried {tried}); pass --html or set html_path in the config")]
    PageNotFound {
        /// The paths that were probed, for the diagnostic.
        tried: String,
    },
}

/// Resolves the page path: explicit flag first, then the config, then the
/// fixed candidate list relative to the working directory.
///
/// # Errors
///
/// Returns [`CliError::PageNotFound`] when nothing resolves to an existing
/// file.
pub fn resolve_html_path(flag: Option<&Path>, config: &Config) -> Result<PathBuf, CliError> {
    let mut tried = Vec::new();

    for candidate in flag
        .map(Path::to_path_buf)
        .into_iter()
        .chain(config.html_path.clone())
        .chain(HTML_CANDIDATES.iter().map(PathBuf::from))
    {
        if candidate.is_file() {
            debug!(page = %candidate.display(), "resolved catalogue page");
            return Ok(candidate);
        }
        tried.push(candidate.display().to_string());
    }

    Err(CliError::PageNotFound {
        tried: tried.join(", "),
    })
}

/// Builds the per-invocation paths from the resolved page location.
fn paths_for(html: PathBuf, config: &Config) -> Paths {
    let data_dir = config.data_dir.clone().unwrap_or_else(|| {
        html.parent()
            .map_or_else(|| PathBuf::from("data"), |p| p.join("data"))
    });
    Paths { html, data_dir }
}

/// Runs the selected subcommand.
///
/// # Errors
///
/// Propagates any [`CliError`] from the operation.
pub fn run(cli: &Cli, config: &Config) -> Result<Outcome, CliError> {
    let mut prompter = Prompter::stdin();

    match &cli.command {
        Command::AddTool { file, html, yes } => {
            let paths = paths_for(resolve_html_path(html.as_deref(), config)?, config);
            println!("HTML file: {}\n", paths.html.display());
            ops::add_tool(&paths, file.as_deref(), *yes, &mut prompter)
        }
        Command::AddTemplate { file, html, yes } => {
            let paths = paths_for(resolve_html_path(html.as_deref(), config)?, config);
            println!("HTML file: {}\n", paths.html.display());
            ops::add_template(&paths, file.as_deref(), *yes, &mut prompter)
        }
        Command::DeleteTool { name, html } => {
            let paths = paths_for(resolve_html_path(html.as_deref(), config)?, config);
            ops::delete_tool(&paths, name)
        }
        Command::DeleteTemplate { title, html } => {
            let paths = paths_for(resolve_html_path(html.as_deref(), config)?, config);
            ops::delete_template(&paths, title)
        }
    }
}
