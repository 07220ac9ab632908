//! Lint runner that orchestrates both rule families over a file set.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::Language;
use crate::config::Config;

use super::{multiple_exports, statement_count, LintResult};

/// Executes the lint rules against a set of files.
pub struct Runner {
    base_dir: PathBuf,
    config: Config,
}

impl Runner {
    /// Create a new runner rooted at `base_dir`.
    ///
    /// Diagnostics report paths relative to the base directory.
    pub fn new<P: AsRef<Path>>(base_dir: P, config: Config) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            config,
        }
    }

    /// Lint all files, in parallel, with deterministic output.
    ///
    /// Each file gets its own parser and accumulator state; nothing is
    /// shared between files beyond the immutable configuration.
    pub fn run(&self, files: &[PathBuf]) -> anyhow::Result<LintResult> {
        let mut sorted_files: Vec<&PathBuf> = files.iter().collect();
        sorted_files.sort();

        let per_file: Vec<LintResult> = sorted_files
            .par_iter()
            .map(|path| self.lint_file(path))
            .collect::<anyhow::Result<_>>()?;

        let mut result = LintResult::new();
        for file_result in per_file {
            result.merge(file_result);
        }
        result.sort();
        Ok(result)
    }

    /// Lint a single file; unsupported or excluded files are skipped.
    fn lint_file(&self, path: &Path) -> anyhow::Result<LintResult> {
        let rel_path = path
            .strip_prefix(&self.base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        if self.config.is_path_excluded(Path::new(&rel_path)) {
            return Ok(LintResult::new());
        }

        let language = match Language::for_path(path) {
            Some(l) => l,
            None => return Ok(LintResult::new()),
        };

        let source = std::fs::read(path)?;
        let mut parsed = language.parse(path, &source)?;
        // Diagnostics carry the relative path.
        parsed.path = rel_path.clone();

        let mut result = LintResult::new();
        result.merge(statement_count::check_file(
            &parsed,
            &self.config.statement_count,
        ));
        result.merge(multiple_exports::check_file(
            &parsed,
            &rel_path,
            &self.config.exports,
        ));
        result.scanned = 1;
        Ok(result)
    }
}
