//! Lint configuration schema.
//!
//! Configuration is loaded from a YAML file (`bloatcheck.yaml`) and
//! validated up front: threshold mistakes are fatal before any file is
//! visited, never during a lint pass.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::analysis::exports::ExportChecks;
use crate::rules::Severity;

/// Fatal configuration errors, raised at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("warn_threshold ({warn}) must be less than error_threshold ({error})")]
    InvalidThresholdOrdering { warn: usize, error: usize },
    #[error("threshold must be a positive integer (got {0})")]
    InvalidThreshold(usize),
}

/// Built-in configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Lenient thresholds, warning-level export diagnostics.
    Recommended,
    /// Tighter thresholds, error-level export diagnostics.
    Strict,
}

/// Statement-count threshold configuration.
///
/// Two shapes coexist: dual-threshold (one rule emits at either severity)
/// and single-threshold (one threshold, one fixed severity). Both drive the
/// same counting engine.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ThresholdConfig {
    Dual {
        warn_threshold: usize,
        error_threshold: usize,
    },
    Single {
        threshold: usize,
        #[serde(default = "default_single_severity")]
        severity: Severity,
    },
}

fn default_single_severity() -> Severity {
    Severity::Warning
}

/// Outcome of comparing a count against the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdDecision {
    pub severity: Severity,
    /// The threshold value reported in the diagnostic.
    pub threshold: usize,
    /// Message fragment: `"max"` for errors, `"recommended max"` for warnings.
    pub level: &'static str,
}

impl ThresholdConfig {
    pub fn dual(warn_threshold: usize, error_threshold: usize) -> Self {
        ThresholdConfig::Dual {
            warn_threshold,
            error_threshold,
        }
    }

    /// Validate the threshold shape; fails fast on nonsense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            ThresholdConfig::Dual {
                warn_threshold,
                error_threshold,
            } => {
                if warn_threshold >= error_threshold {
                    return Err(ConfigError::InvalidThresholdOrdering {
                        warn: warn_threshold,
                        error: error_threshold,
                    });
                }
                if warn_threshold < 1 {
                    return Err(ConfigError::InvalidThreshold(warn_threshold));
                }
                Ok(())
            }
            ThresholdConfig::Single { threshold, .. } => {
                if threshold < 1 {
                    return Err(ConfigError::InvalidThreshold(threshold));
                }
                Ok(())
            }
        }
    }

    /// Compare a count against the thresholds.
    ///
    /// Thresholds are exclusive upper bounds on the safe count: a count
    /// exactly equal to a threshold is already in violation (`>=`). The
    /// error threshold wins when both are met.
    pub fn evaluate(&self, count: usize) -> Option<ThresholdDecision> {
        match *self {
            ThresholdConfig::Dual {
                warn_threshold,
                error_threshold,
            } => {
                if count >= error_threshold {
                    Some(ThresholdDecision {
                        severity: Severity::Error,
                        threshold: error_threshold,
                        level: "max",
                    })
                } else if count >= warn_threshold {
                    Some(ThresholdDecision {
                        severity: Severity::Warning,
                        threshold: warn_threshold,
                        level: "recommended max",
                    })
                } else {
                    None
                }
            }
            ThresholdConfig::Single {
                threshold,
                severity,
            } => (count >= threshold).then_some(ThresholdDecision {
                severity,
                threshold,
                level: match severity {
                    Severity::Error => "max",
                    Severity::Warning => "recommended max",
                },
            }),
        }
    }
}

/// Thresholds for the statement-count rules.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StatementCountConfig {
    #[serde(default = "default_function_thresholds")]
    pub functions: ThresholdConfig,
    #[serde(default = "default_class_thresholds")]
    pub classes: ThresholdConfig,
}

fn default_function_thresholds() -> ThresholdConfig {
    ThresholdConfig::dual(25, 50)
}

fn default_class_thresholds() -> ThresholdConfig {
    ThresholdConfig::dual(200, 300)
}

impl Default for StatementCountConfig {
    fn default() -> Self {
        Self {
            functions: default_function_thresholds(),
            classes: default_class_thresholds(),
        }
    }
}

/// Options for the multiple-exports rule.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExportsConfig {
    #[serde(default = "default_true")]
    pub check_classes: bool,
    #[serde(default = "default_true")]
    pub check_functions: bool,
    #[serde(default = "default_true")]
    pub check_interfaces: bool,
    #[serde(default = "default_true")]
    pub check_types: bool,
    #[serde(default = "default_true")]
    pub check_variables: bool,
    #[serde(default = "default_true")]
    pub ignore_barrel_files: bool,
    #[serde(default = "default_single_severity")]
    pub severity: Severity,
}

fn default_true() -> bool {
    true
}

impl Default for ExportsConfig {
    fn default() -> Self {
        Self {
            check_classes: true,
            check_functions: true,
            check_interfaces: true,
            check_types: true,
            check_variables: true,
            ignore_barrel_files: true,
            severity: Severity::Warning,
        }
    }
}

impl ExportsConfig {
    /// The detector-facing view of the toggles.
    pub fn checks(&self) -> ExportChecks {
        ExportChecks {
            classes: self.check_classes,
            functions: self.check_functions,
            interfaces: self.check_interfaces,
            types: self.check_types,
            variables: self.check_variables,
        }
    }

    /// Whether diagnostics consider an export of this kind at all.
    /// Default and specifier exports are always relevant.
    pub fn is_kind_enabled(&self, kind: crate::analysis::exports::ExportKind) -> bool {
        use crate::analysis::exports::ExportKind;
        match kind {
            ExportKind::Class => self.check_classes,
            ExportKind::Function => self.check_functions,
            ExportKind::Interface => self.check_interfaces,
            ExportKind::Type => self.check_types,
            ExportKind::Variable => self.check_variables,
            ExportKind::Default | ExportKind::Specifier => true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Glob patterns for paths to exclude from analysis (e.g., "**/dist/**").
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub statement_count: StatementCountConfig,
    #[serde(default)]
    pub exports: ExportsConfig,
}

impl Config {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The recommended preset: warn 25/200, error 50/300.
    pub fn recommended() -> Self {
        Self::default()
    }

    /// The strict preset: warn 15/150, error 25/200, error-level exports.
    pub fn strict() -> Self {
        Self {
            exclude: Vec::new(),
            statement_count: StatementCountConfig {
                functions: ThresholdConfig::dual(15, 25),
                classes: ThresholdConfig::dual(150, 200),
            },
            exports: ExportsConfig {
                severity: Severity::Error,
                ..ExportsConfig::default()
            },
        }
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Recommended => Self::recommended(),
            Preset::Strict => Self::strict(),
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let path_str = path.to_string_lossy();
        for pattern in &self.exclude {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Validate a configuration for correctness.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    config.statement_count.functions.validate()?;
    config.statement_count.classes.validate()?;

    for pattern in &config.exclude {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid exclude pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}
