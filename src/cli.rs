//! Command-line interface for bloatcheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::analysis::Language;
use crate::config::{self, Config, Preset};
use crate::report;
use crate::rules::Runner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default configuration file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["bloatcheck.yaml", ".bloatcheck.yaml"];

/// Default configuration template for `init`.
const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Statement-count and export-multiplicity lint rules for TypeScript and
/// JavaScript.
///
/// Bloatcheck flags functions and classes whose bodies exceed a configured
/// number of statements, and files that export more than one top-level
/// symbol (barrel files excepted).
#[derive(Parser)]
#[command(name = "bloatcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint files or directories
    #[command(visible_alias = "check")]
    Lint(LintArgs),
    /// Create a bloatcheck.yaml configuration file
    Init(InitArgs),
}

/// Arguments for the lint command.
#[derive(Parser)]
pub struct LintArgs {
    /// Path to lint (file or directory)
    pub path: PathBuf,

    /// Path to configuration YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use a built-in preset instead of a configuration file
    #[arg(short, long, conflicts_with = "config")]
    pub preset: Option<Preset>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "bloatcheck.yaml")]
    pub output: PathBuf,
}

/// Discover a configuration file in the current directory.
fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .copied()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Collect lintable files under a directory.
fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden and dependency directories, but never the root
            // the user explicitly asked for.
            if e.depth() > 0
                && e.file_type().is_dir()
                && (name.starts_with('.') || name == "node_modules")
            {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() && Language::for_path(entry.path()).is_some() {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// Resolve the effective configuration for a lint run.
///
/// Precedence: explicit --preset, explicit --config, discovered file,
/// built-in defaults.
fn resolve_config(args: &LintArgs) -> anyhow::Result<(Config, String)> {
    if let Some(preset) = args.preset {
        let label = match preset {
            Preset::Recommended => "(preset: recommended)",
            Preset::Strict => "(preset: strict)",
        };
        return Ok((Config::preset(preset), label.to_string()));
    }

    let path = match &args.config {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("configuration file not found: {}", p.display());
            }
            Some(p.clone())
        }
        None => discover_config(),
    };

    match path {
        Some(p) => {
            let config = Config::parse_file(&p)?;
            Ok((config, p.to_string_lossy().to_string()))
        }
        None => Ok((Config::default(), "(defaults)".to_string())),
    }
}

/// Run the lint command.
pub fn run_lint(args: &LintArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let (config, config_label) = match resolve_config(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    // Threshold mistakes are fatal before any file is visited.
    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid configuration: {}", e);
        return Ok(EXIT_ERROR);
    }

    let abs_path = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let metadata = std::fs::metadata(&abs_path)?;
    let (base_dir, files) = if metadata.is_dir() {
        (abs_path.clone(), collect_files(&abs_path)?)
    } else {
        let base = abs_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| abs_path.clone());
        (base, vec![abs_path.clone()])
    };

    if files.is_empty() {
        eprintln!("Warning: no files to lint");
        return Ok(EXIT_SUCCESS);
    }

    let runner = Runner::new(&base_dir, config);
    let result = runner.run(&files)?;

    let path_str = args.path.to_string_lossy().to_string();
    match args.format.as_str() {
        "json" => report::write_json(&path_str, &config_label, &result)?,
        _ => report::write_pretty(&path_str, &config_label, &result),
    }

    if result.has_errors() {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&args.output, DEFAULT_TEMPLATE)?;

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize thresholds", args.output.display());
    println!(
        "  2. Run: bloatcheck lint . --config {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}
