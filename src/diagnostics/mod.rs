//! Shared diagnostics model and formatting utilities for the frontend and CLI.

mod formatter;

pub use formatter::{
    ColorMode, ErrorFormat, FormatOptions, JSON_SCHEMA_VERSION, format_diagnostics,
};
use serde::Serialize;
use std::fmt;

/// Location a diagnostic refers to. Command-line diagnostics carry no location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceLoc {
    file: Option<String>,
    line: usize,
    column: usize,
}

impl SourceLoc {
    #[must_use]
    pub fn invalid() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: Some(file.into()),
            line,
            column,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.file.is_some()
    }

    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{file}:{}:{}", self.line, self.column),
            None => f.write_str("<command-line>"),
        }
    }
}

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// Structured identifier for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticCode {
    pub code: String,
    pub category: Option<String>,
}

impl DiagnosticCode {
    #[must_use]
    pub fn new(code: impl Into<String>, category: Option<String>) -> Self {
        Self {
            code: code.into(),
            category,
        }
    }
}

/// Catalogue of diagnostics the frontend can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticId {
    /// `{0}`: argument as written, `{1}`: number of options missing a value.
    ErrorMissingArgValue,
    /// `{0}`: the unrecognised argument.
    ErrorUnknownArg,
}

impl DiagnosticId {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticId::ErrorMissingArgValue => "FE0001",
            DiagnosticId::ErrorUnknownArg => "FE0002",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticId::ErrorMissingArgValue | DiagnosticId::ErrorUnknownArg => Severity::Error,
        }
    }

    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            DiagnosticId::ErrorMissingArgValue => {
                "missing argument value for '{0}', expected {1} argument(s)"
            }
            DiagnosticId::ErrorUnknownArg => "unknown argument: '{0}'",
        }
    }

    /// Substitutes `{N}` placeholders in the template with `args[N]` in one
    /// left-to-right pass, so argument text is never rescanned. Placeholders
    /// without a matching argument are kept as written.
    #[must_use]
    pub fn render(self, args: &[DiagnosticArg]) -> String {
        let template = self.template();
        let mut message = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            message.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after.find('}').and_then(|close| {
                let index: usize = after[..close].parse().ok()?;
                Some((args.get(index)?, close))
            });
            match placeholder {
                Some((arg, close)) => {
                    message.push_str(&arg.to_string());
                    rest = &after[close + 1..];
                }
                None => {
                    message.push('{');
                    rest = after;
                }
            }
        }
        message.push_str(rest);
        message
    }
}

/// Format argument supplied alongside a [`DiagnosticId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticArg {
    Str(String),
    Unsigned(usize),
}

impl fmt::Display for DiagnosticArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticArg::Str(value) => f.write_str(value),
            DiagnosticArg::Unsigned(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for DiagnosticArg {
    fn from(value: &str) -> Self {
        DiagnosticArg::Str(value.to_string())
    }
}

impl From<String> for DiagnosticArg {
    fn from(value: String) -> Self {
        DiagnosticArg::Str(value)
    }
}

impl From<usize> for DiagnosticArg {
    fn from(value: usize) -> Self {
        DiagnosticArg::Unsigned(value)
    }
}

/// A single diagnostic with optional notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub id: Option<DiagnosticId>,
    pub code: Option<DiagnosticCode>,
    pub message: String,
    pub location: SourceLoc,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    #[must_use]
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLoc) -> Self {
        self.location = location;
        self
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            id: None,
            code: None,
            message: message.into(),
            location: SourceLoc::invalid(),
            notes: Vec::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self
            .code
            .as_ref()
            .map_or("UNKNOWN", |c| c.code.as_str());
        write!(f, "{}[{code}]: {}", self.severity.as_str(), self.message)
    }
}

/// Collects diagnostics emitted while processing an invocation.
///
/// The sink never aborts; callers track failure through their own return values.
#[derive(Debug)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    namespace: String,
}

impl DiagnosticSink {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            diagnostics: Vec::new(),
            namespace: namespace.into(),
        }
    }

    /// Records a catalogued diagnostic at `loc`, rendering its message from `args`.
    pub fn diagnose(&mut self, loc: SourceLoc, id: DiagnosticId, args: &[DiagnosticArg]) {
        let mut diagnostic = Diagnostic::new(id.severity(), id.render(args))
            .with_code(DiagnosticCode::new(id.code(), Some(self.namespace.clone())))
            .with_location(loc);
        diagnostic.id = Some(id);
        tracing::debug!(
            target: "frontend.diagnostics",
            code = id.code(),
            severity = diagnostic.severity.as_str(),
            message = %diagnostic.message,
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|diag| diag.severity.is_error())
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity.is_error())
            .count()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new("frontend")
    }
}
