//! Language selection and parsing.
//!
//! TypeScript, TSX, and JavaScript share one statement grammar as far as the
//! rules here are concerned; the three grammars only differ in which
//! kind names can appear (interfaces and type aliases are TypeScript-only).

use std::path::Path;

use once_cell::sync::Lazy;
use tree_sitter::Parser;

use super::SourceFile;

static TYPESCRIPT: Lazy<tree_sitter::Language> =
    Lazy::new(|| tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into());

static TSX: Lazy<tree_sitter::Language> =
    Lazy::new(|| tree_sitter_typescript::LANGUAGE_TSX.into());

static JAVASCRIPT: Lazy<tree_sitter::Language> =
    Lazy::new(|| tree_sitter_javascript::LANGUAGE.into());

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TypeScript,
    Tsx,
    JavaScript,
}

impl Language {
    /// Select a language by file extension (without dot).
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// Select a language for a path based on its extension.
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        Self::for_extension(ext)
    }

    /// Returns the language identifier (e.g., "typescript").
    pub fn id(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::JavaScript => "javascript",
        }
    }

    fn grammar(&self) -> &'static tree_sitter::Language {
        match self {
            Language::TypeScript => &TYPESCRIPT,
            Language::Tsx => &TSX,
            Language::JavaScript => &JAVASCRIPT,
        }
    }

    /// Parse a source file into a tree-sitter tree.
    ///
    /// Partial parse errors are still returned as a valid tree with ERROR
    /// nodes; the rules treat unrecognized shapes as inert.
    pub fn parse(&self, path: &Path, source: &[u8]) -> anyhow::Result<SourceFile> {
        let mut parser = Parser::new();
        parser.set_language(self.grammar())?;
        let tree = parser.parse(source, None).ok_or_else(|| {
            anyhow::anyhow!("failed to parse {} source: {}", self.id(), path.display())
        })?;

        Ok(SourceFile {
            tree,
            source: source.to_vec(),
            path: path.to_string_lossy().to_string(),
        })
    }
}
