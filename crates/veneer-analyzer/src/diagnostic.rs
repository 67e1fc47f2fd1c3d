//! Diagnostic rendering for findings
//!
//! Wraps `codespan-reporting` so hosts can surface findings with source
//! context on a terminal, plus a JSON projection for IDE integration.
//! The analyzer itself never prints; rendering is strictly pull-based.

use codespan_reporting::diagnostic::{Diagnostic as CsDiagnostic, Label, Severity};
use codespan_reporting::files::{Files, SimpleFiles};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use serde::{Deserialize, Serialize};
use veneer_syntax::Span;

use crate::detector::{Finding, DIAGNOSTIC_ID};

/// A renderable diagnostic with source code context
pub struct Diagnostic {
    inner: CsDiagnostic<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            inner: CsDiagnostic::new(severity).with_message(message),
        }
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: &str) -> Self {
        self.inner = self.inner.with_code(code);
        self
    }

    /// Add a primary label (the finding's anchor)
    pub fn with_primary_label(mut self, file_id: usize, span: Span, message: impl Into<String>) -> Self {
        let label = Label::primary(file_id, span.start..span.end).with_message(message);
        self.inner = self.inner.with_labels(vec![label]);
        self
    }

    /// Add a note (additional context)
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.inner.notes.push(note.into());
        self
    }

    /// Build the diagnostic for a finding, anchored in `file_id`
    pub fn from_finding(finding: &Finding, file_id: usize) -> Self {
        Diagnostic::warning(finding.message())
            .with_code(DIAGNOSTIC_ID)
            .with_primary_label(
                file_id,
                finding.anchor,
                "wrapped entity is introduced here",
            )
            .with_note(format!(
                "'{}' declares {} propert{} the wrapper does not expose",
                finding.entity,
                finding.missing_count,
                if finding.missing_count == 1 { "y" } else { "ies" }
            ))
    }

    /// Emit the diagnostic to stderr with colors
    pub fn emit(&self, files: &SimpleFiles<String, String>) -> Result<(), codespan_reporting::files::Error> {
        let mut writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        term::emit(&mut writer, &config, files, &self.inner)
    }

    /// Get the underlying codespan diagnostic (for testing/custom rendering)
    pub fn inner(&self) -> &CsDiagnostic<usize> {
        &self.inner
    }

    /// Convert to JSON representation for IDE integration
    pub fn to_json(&self, files: &SimpleFiles<String, String>) -> Result<String, serde_json::Error> {
        let json_diag = JsonDiagnostic::from_diagnostic(self, files);
        serde_json::to_string_pretty(&json_diag)
    }
}

/// JSON representation of a diagnostic for IDE integration
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    /// Diagnostic code (e.g. `VN0001`)
    pub code: Option<String>,
    /// Severity level
    pub severity: String,
    /// Main message
    pub message: String,
    /// Source locations with labels
    pub labels: Vec<JsonLabel>,
    /// Additional notes
    pub notes: Vec<String>,
}

/// JSON representation of a diagnostic label
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLabel {
    /// File path
    pub file: String,
    /// Start line (1-indexed)
    pub start_line: usize,
    /// Start column (1-indexed)
    pub start_column: usize,
    /// End line (1-indexed)
    pub end_line: usize,
    /// End column (1-indexed)
    pub end_column: usize,
    /// Label message
    pub message: Option<String>,
}

impl JsonDiagnostic {
    /// Convert a Diagnostic to JSON representation
    pub fn from_diagnostic(diag: &Diagnostic, files: &SimpleFiles<String, String>) -> Self {
        let severity = match diag.inner.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
            Severity::Bug => "bug",
        };

        let labels = diag
            .inner
            .labels
            .iter()
            .filter_map(|label| {
                let file_id = label.file_id;
                let file_name = files.get(file_id).ok()?.name().to_string();

                let start = files.get(file_id).ok()?.location((), label.range.start).ok()?;
                let end = files.get(file_id).ok()?.location((), label.range.end).ok()?;

                Some(JsonLabel {
                    file: file_name,
                    start_line: start.line_number,
                    start_column: start.column_number,
                    end_line: end.line_number,
                    end_column: end.column_number,
                    message: Some(label.message.clone()),
                })
            })
            .collect();

        JsonDiagnostic {
            code: diag.inner.code.clone(),
            severity: severity.to_string(),
            message: diag.inner.message.clone(),
            labels,
            notes: diag.inner.notes.clone(),
        }
    }
}

/// Helper to create a SimpleFiles instance from source code
pub fn create_files(path: impl Into<String>, source: impl Into<String>) -> SimpleFiles<String, String> {
    let mut files = SimpleFiles::new();
    files.add(path.into(), source.into());
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding() -> Finding {
        Finding {
            wrapper: "ImageModel".to_string(),
            entity: "ImageEntity".to_string(),
            anchor: Span::new(7, 17, 1, 8),
            missing_count: 2,
        }
    }

    #[test]
    fn test_from_finding_severity_and_code() {
        let diag = Diagnostic::from_finding(&finding(), 0);
        assert_eq!(diag.inner.severity, Severity::Warning);
        assert_eq!(diag.inner.code.as_deref(), Some("VN0001"));
        assert!(diag.inner.message.contains("ImageModel"));
    }

    #[test]
    fn test_json_output_shape() {
        let diag = Diagnostic::from_finding(&finding(), 0);
        let files = create_files("Image.cs", "public ImageModel(ImageEntity entity) { }");

        let json = diag.to_json(&files).unwrap();
        assert!(json.contains("\"code\""));
        assert!(json.contains("\"VN0001\""));
        assert!(json.contains("\"warning\""));
        assert!(json.contains("\"start_line\""));
    }

    #[test]
    fn test_json_label_locations() {
        let diag = Diagnostic::from_finding(&finding(), 0);
        let files = create_files("Image.cs", "public ImageModel(ImageEntity entity) { }");

        let json = diag.to_json(&files).unwrap();
        let parsed: JsonDiagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.labels.len(), 1);
        assert_eq!(parsed.labels[0].file, "Image.cs");
        assert_eq!(parsed.labels[0].start_line, 1);
        assert_eq!(parsed.labels[0].start_column, 8);
    }
}
