use serde::Serialize;

use super::{Diagnostic, DiagnosticCode, Severity};

pub const JSON_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorFormat {
    Human,
    Json,
    Short,
}

impl ErrorFormat {
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "human" | "text" => Some(Self::Human),
            "json" => Some(Self::Json),
            "short" => Some(Self::Short),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub format: ErrorFormat,
    pub color: ColorMode,
    pub is_terminal: bool,
}

impl FormatOptions {
    #[must_use]
    pub fn use_color(self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => self.is_terminal,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: ErrorFormat::Human,
            color: ColorMode::Never,
            is_terminal: false,
        }
    }
}

/// Render a collection of diagnostics to a single string.
#[must_use]
pub fn format_diagnostics(diagnostics: &[Diagnostic], options: FormatOptions) -> String {
    let use_color = options.use_color();
    diagnostics
        .iter()
        .map(|diagnostic| match options.format {
            ErrorFormat::Human => render_human(diagnostic, use_color),
            ErrorFormat::Short => render_short(diagnostic),
            ErrorFormat::Json => render_json(diagnostic),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_human(diagnostic: &Diagnostic, color: bool) -> String {
    let mut out = format_header(diagnostic, color);
    if diagnostic.location.is_valid() {
        out.push_str(&format!("\n  --> {}", diagnostic.location));
    }
    for note in &diagnostic.notes {
        out.push_str(&format!("\n  = note: {note}"));
    }
    out
}

fn render_short(diagnostic: &Diagnostic) -> String {
    let mut out = format!(
        "{}: {}[{}]: {}",
        diagnostic.location,
        diagnostic.severity.as_str(),
        code_str(diagnostic),
        diagnostic.message
    );
    if !diagnostic.notes.is_empty() {
        out.push_str(&format!(" (notes: {})", diagnostic.notes.len()));
    }
    out
}

fn render_json(diagnostic: &Diagnostic) -> String {
    let location = diagnostic.location.file().map(|file| JsonLocation {
        file: file.to_string(),
        line: diagnostic.location.line(),
        column: diagnostic.location.column(),
    });
    let payload = JsonDiagnostic {
        version: JSON_SCHEMA_VERSION.to_string(),
        severity: diagnostic.severity.as_str().to_string(),
        code: diagnostic.code.clone(),
        message: diagnostic.message.clone(),
        location,
        notes: diagnostic.notes.clone(),
    };
    serde_json::to_string(&payload).unwrap_or_else(|_| "{}".into())
}

fn format_header(diagnostic: &Diagnostic, color: bool) -> String {
    let severity = diagnostic.severity.as_str();
    let prefix = if color {
        colorize(severity, severity_color(diagnostic.severity))
    } else {
        severity.to_string()
    };
    format!("{prefix}[{}]: {}", code_str(diagnostic), diagnostic.message)
}

fn code_str(diagnostic: &Diagnostic) -> &str {
    diagnostic
        .code
        .as_ref()
        .map_or("UNKNOWN", |c| c.code.as_str())
}

fn colorize(value: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "1;31",
        Severity::Warning => "1;33",
        Severity::Note => "1;34",
    }
}

#[derive(Serialize)]
struct JsonDiagnostic {
    version: String,
    severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<DiagnosticCode>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<JsonLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
}

#[derive(Serialize)]
struct JsonLocation {
    file: String,
    line: usize,
    column: usize,
}
