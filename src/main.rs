//! geostubs — generate type stubs for GeoAlchemy2-style spatial functions.
//!
//! - **built-in mode**: `geostubs > functions.pyi`
//! - **registry mode**: `geostubs -o functions.pyi registry/*.json`
//! - **check mode**: `geostubs -o functions.pyi --check` fails when the file is stale

use anyhow::{bail, Context, Result};
use clap::Parser;
use geostubs::registry::{self, Registry};
use geostubs::render;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "geostubs",
    about = "Generate docstrings and Python type stubs for spatial SQL functions"
)]
struct Cli {
    /// Registry files (JSON), directories or glob patterns. `-` reads stdin.
    files: Vec<String>,

    /// Output file. Writes to stdout if omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: pyi (default), json
    #[arg(short = 'f', long, default_value = "pyi")]
    format: String,

    /// Do not include the built-in function table
    #[arg(long)]
    no_builtin: bool,

    /// Verify that --output is up to date instead of writing it
    #[arg(long, requires = "output")]
    check: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let registry = build_registry(&cli)?;
    let renderer = render::create_renderer(&cli.format)?;
    let output = renderer.render(registry.functions())?;

    match cli.output.as_deref() {
        Some(path) if cli.check => check_output(path, &output),
        Some(path) => write_output(path, &output),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

/// Log to stderr, filtered by `GEOSTUBS_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_env("GEOSTUBS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Built-in table (unless disabled) followed by every registry file in order.
fn build_registry(cli: &Cli) -> Result<Registry> {
    let mut registry = if cli.no_builtin {
        Registry::default()
    } else {
        Registry::builtin()
    };

    if cli.files.iter().any(|f| f == "-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let descriptors = registry::parse(&input).context("failed to load registry from stdin")?;
        registry.extend(descriptors, "<stdin>");
    }

    let patterns: Vec<String> = cli.files.iter().filter(|f| *f != "-").cloned().collect();
    for path in expand_globs(&patterns)? {
        let descriptors = registry::load_file(&path)?;
        registry.extend(descriptors, &path.to_string_lossy());
    }

    debug!(functions = registry.len(), "registry assembled");
    Ok(registry)
}

/// File extension of registry files.
const REGISTRY_EXTENSION: &str = "json";

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for registry files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(REGISTRY_EXTENSION) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn write_output(path: &Path, output: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote stubs");
    Ok(())
}

fn check_output(path: &Path, output: &str) -> Result<()> {
    let current = match fs::read_to_string(path) {
        Ok(current) => current,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            bail!("{} is out of date (missing)", path.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    if current != output {
        bail!("{} is out of date; regenerate it with geostubs", path.display());
    }
    info!(path = %path.display(), "stubs are up to date");
    Ok(())
}
