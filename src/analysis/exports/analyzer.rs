//! Export multiplicity analysis and summary rendering.

use super::{ExportInfo, ExportKind};

/// Derived per-file view over the collected exports.
///
/// Recomputed from the export list plus filename on every check; nothing
/// here is stored across files.
#[derive(Debug, Clone)]
pub struct ExportAnalysis {
    pub exports: Vec<ExportInfo>,
    pub is_barrel_file: bool,
    pub has_multiple_exports: bool,
}

/// Whether a filename names a barrel file.
///
/// Exact basename match only: `index.ts` and `index.js` qualify,
/// `my-index.ts` and `indexed.ts` do not.
pub fn is_barrel_file(filename: &str) -> bool {
    let basename = filename.rsplit('/').next().unwrap_or("");
    basename == "index.ts" || basename == "index.js"
}

/// Decide whether a file has multiple exports.
///
/// Barrel files are exempt when `ignore_barrel_files` is set; their whole
/// purpose is re-exporting many symbols.
pub fn analyze_file_exports(
    exports: Vec<ExportInfo>,
    filename: &str,
    ignore_barrel_files: bool,
) -> ExportAnalysis {
    let is_barrel = is_barrel_file(filename);
    let exempt = ignore_barrel_files && is_barrel;
    let has_multiple_exports = exports.len() > 1 && !exempt;

    ExportAnalysis {
        exports,
        is_barrel_file: is_barrel,
        has_multiple_exports,
    }
}

/// Render a grouped summary like `"1 class, 2 functions"`.
///
/// Categories appear in fixed order (class, function, interface, type,
/// variable, default, specifier) and only with a non-zero count.
pub fn export_summary<'a>(exports: impl IntoIterator<Item = &'a ExportInfo>) -> String {
    let mut counts = [0usize; ExportKind::ORDERED.len()];
    for export in exports {
        let idx = ExportKind::ORDERED
            .iter()
            .position(|k| *k == export.kind)
            .unwrap_or(0);
        counts[idx] += 1;
    }

    let parts: Vec<String> = ExportKind::ORDERED
        .iter()
        .zip(counts)
        .filter(|(_, n)| *n > 0)
        .map(|(kind, n)| {
            let label = if n == 1 { kind.singular() } else { kind.plural() };
            format!("{} {}", n, label)
        })
        .collect();

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Span;

    fn export(kind: ExportKind, name: &str) -> ExportInfo {
        ExportInfo {
            kind,
            name: name.to_string(),
            span: Span {
                start_byte: 0,
                end_byte: 0,
                start_line: 1,
                start_col: 1,
                end_line: 1,
                end_col: 1,
            },
        }
    }

    #[test]
    fn test_barrel_file_exact_basename_only() {
        assert!(is_barrel_file("index.ts"));
        assert!(is_barrel_file("src/index.ts"));
        assert!(is_barrel_file("/project/src/index.js"));
        assert!(!is_barrel_file("my-index.ts"));
        assert!(!is_barrel_file("indexed.ts"));
        assert!(!is_barrel_file("src/user-index.ts"));
        assert!(!is_barrel_file("index.tsx"));
    }

    #[test]
    fn test_barrel_exemption() {
        let exports = vec![
            export(ExportKind::Specifier, "a"),
            export(ExportKind::Specifier, "b"),
            export(ExportKind::Specifier, "c"),
        ];
        let analysis = analyze_file_exports(exports.clone(), "src/index.ts", true);
        assert!(analysis.is_barrel_file);
        assert!(!analysis.has_multiple_exports);

        // The exemption only applies with the flag on.
        let analysis = analyze_file_exports(exports, "src/index.ts", false);
        assert!(analysis.has_multiple_exports);
    }

    #[test]
    fn test_near_barrel_names_not_exempt() {
        let exports = vec![
            export(ExportKind::Variable, "a"),
            export(ExportKind::Variable, "b"),
        ];
        let analysis = analyze_file_exports(exports, "src/my-index.ts", true);
        assert!(!analysis.is_barrel_file);
        assert!(analysis.has_multiple_exports);
    }

    #[test]
    fn test_single_export_never_multiple() {
        let analysis =
            analyze_file_exports(vec![export(ExportKind::Class, "A")], "src/a.ts", true);
        assert!(!analysis.has_multiple_exports);
    }

    #[test]
    fn test_summary_ordering_and_pluralization() {
        let exports = vec![
            export(ExportKind::Function, "f"),
            export(ExportKind::Class, "A"),
            export(ExportKind::Function, "g"),
        ];
        assert_eq!(export_summary(&exports), "1 class, 2 functions");
    }

    #[test]
    fn test_summary_default_and_specifier_labels() {
        let exports = vec![
            export(ExportKind::Variable, "a"),
            export(ExportKind::Variable, "b"),
            export(ExportKind::Default, "main"),
        ];
        assert_eq!(export_summary(&exports), "2 variables, 1 default export");

        let exports = vec![
            export(ExportKind::Specifier, "a"),
            export(ExportKind::Specifier, "b"),
        ];
        assert_eq!(export_summary(&exports), "2 export specifiers");
    }

    #[test]
    fn test_summary_all_categories() {
        let exports = vec![
            export(ExportKind::Class, "A"),
            export(ExportKind::Function, "f"),
            export(ExportKind::Interface, "I"),
            export(ExportKind::Interface, "J"),
            export(ExportKind::Type, "T"),
            export(ExportKind::Variable, "v"),
            export(ExportKind::Default, "d"),
            export(ExportKind::Specifier, "s"),
        ];
        assert_eq!(
            export_summary(&exports),
            "1 class, 1 function, 2 interfaces, 1 type, 1 variable, 1 default export, 1 export specifier"
        );
    }
}
