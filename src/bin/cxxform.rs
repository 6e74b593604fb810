//! Binary entry point for the cxxform CLI.
//!
//! The CLI inspects serialized translation units: it shows what a walk
//! visits under a given policy, and where a token pattern first matches.
//! It is a debugging aid for generator authors; generators link the library.
//!
//! ## Usage
//!
//! ```bash
//! # Nodes of the main file only, as an indented outline
//! cxxform walk build/task_group.json --scope current-file
//!
//! # First `CONCORE_ASSERT (` at or after token 40, as JSON
//! cxxform find build/task_group.json --pattern "ident:CONCORE_ASSERT punct:(" --start 40 --format json
//!
//! # First 20 visited nodes, one JSON object per line, with JSON logs on stderr
//! cxxform --log-format json walk build/task_group.json --limit 20 --format jsonl
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use cxxform::ast::{WalkOptions, WalkPolicy};
use cxxform::error::{CxxformError, OutputErrorCode};
use cxxform::output::{
    emit_response, emit_response_compact, ErrorResponse, FindResponse, WalkResponse,
};
use cxxform::tokens::TokenPattern;
use cxxform::TranslationUnit;

// ============================================================================
// CLI Structure
// ============================================================================

/// Inspect AST walks and token searches over serialized C/C++ translation units.
#[derive(Parser, Debug)]
#[command(name = "cxxform", version, about)]
struct Cli {
    /// Log level for tracing output (RUST_LOG takes precedence).
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log line format on stderr.
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Log line format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines (default).
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable text (default).
    #[default]
    Text,
    /// JSON response.
    Json,
    /// One compact JSON object per line (one per node for `walk`).
    Jsonl,
}

/// Walk scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Scope {
    /// Every node, including nodes from included headers (default).
    #[default]
    All,
    /// Only nodes in the unit's own file.
    CurrentFile,
}

impl From<Scope> for WalkPolicy {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::All => WalkPolicy::Unrestricted,
            Scope::CurrentFile => WalkPolicy::CurrentFile,
        }
    }
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the nodes a pre-order walk visits.
    Walk {
        /// Translation unit dump (JSON).
        unit: PathBuf,
        /// Which nodes the walk may reach.
        #[arg(long, value_enum, default_value = "all")]
        scope: Scope,
        /// Scope to this file instead of the root's file (implies current-file).
        #[arg(long)]
        scope_file: Option<String>,
        /// Stop after this many visited nodes.
        #[arg(long)]
        limit: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Find the first contiguous match of a token pattern.
    Find {
        /// Translation unit dump (JSON).
        unit: PathBuf,
        /// Pattern as `<kind>:<spelling>` items, e.g. "ident:std punct:::".
        #[arg(long)]
        pattern: String,
        /// Token index to start searching from.
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level, cli.log_format);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            let response = ErrorResponse::from_error(&err);

            // Errors go to stdout as JSON so callers parse one stream.
            let _ = emit_response(&response, &mut io::stdout());
            let _ = io::stdout().flush();

            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel, format: LogFormat) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn execute(command: Command) -> Result<(), CxxformError> {
    match command {
        Command::Walk {
            unit,
            scope,
            scope_file,
            limit,
            format,
        } => execute_walk(&unit, scope, scope_file, limit, format),
        Command::Find {
            unit,
            pattern,
            start,
            format,
        } => execute_find(&unit, &pattern, start, format),
    }
}

// ============================================================================
// Command Executors
// ============================================================================

fn execute_walk(
    path: &Path,
    scope: Scope,
    scope_file: Option<String>,
    limit: Option<usize>,
    format: Format,
) -> Result<(), CxxformError> {
    let unit = TranslationUnit::from_path(path)?;

    let mut options = WalkOptions::from(WalkPolicy::from(scope));
    if let Some(file) = scope_file {
        options = options
            .with_policy(WalkPolicy::CurrentFile)
            .with_scope_file(file);
    }
    let nodes = match limit {
        Some(limit) => unit.preorder_prefix(&options, limit),
        None => unit.preorder(&options),
    };

    let mut stdout = io::stdout().lock();
    match format {
        Format::Json => {
            let response = WalkResponse::new(unit.file.clone(), options.policy, nodes);
            emit_response(&response, &mut stdout).map_err(write_error)?;
        }
        Format::Jsonl => {
            for node in &nodes {
                emit_response_compact(node, &mut stdout).map_err(write_error)?;
            }
        }
        Format::Text => {
            for node in &nodes {
                let label = match &node.spelling {
                    Some(spelling) => format!("{} {}", node.kind, spelling),
                    None => node.kind.clone(),
                };
                writeln!(
                    stdout,
                    "{:indent$}{} @ {}",
                    "",
                    label,
                    node.location,
                    indent = node.depth * 2
                )
                .map_err(write_error)?;
            }
        }
    }
    Ok(())
}

fn execute_find(
    path: &Path,
    pattern_text: &str,
    start: usize,
    format: Format,
) -> Result<(), CxxformError> {
    let pattern: TokenPattern = pattern_text.parse()?;
    let unit = TranslationUnit::from_path(path)?;
    let index = unit.find(&pattern, start);
    let hit = index.and_then(|i| unit.tokens.get(i));
    let enclosing = hit.and_then(|token| unit.enclosing_node(&token.location));

    let mut response = FindResponse::new(pattern.to_string(), start, index);
    if let Some(token) = hit {
        response = response.with_location(token.location.clone());
    }
    if let Some(node) = enclosing {
        response = response.with_enclosing(node.label());
    }

    let mut stdout = io::stdout().lock();
    match format {
        Format::Json => emit_response(&response, &mut stdout).map_err(write_error)?,
        Format::Jsonl => emit_response_compact(&response, &mut stdout).map_err(write_error)?,
        Format::Text => {
            let mut line = match (index, &response.location) {
                (Some(i), Some(location)) => format!("{} @ {}", i, location),
                _ => "not found".to_string(),
            };
            if let Some(label) = &response.enclosing {
                line.push_str(&format!(" in {}", label));
            }
            writeln!(stdout, "{}", line).map_err(write_error)?;
        }
    }
    Ok(())
}

fn write_error(err: io::Error) -> CxxformError {
    CxxformError::internal(format!("failed to write output: {}", err))
}
