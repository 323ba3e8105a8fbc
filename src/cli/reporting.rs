use std::io::{self, Write};

use crate::diagnostics::{Diagnostic, FormatOptions, format_diagnostics};
use crate::error::Error;

/// Writes a top-level failure summary to stderr.
pub fn report_error(err: &Error) {
    let mut out = io::stderr();
    if let Err(io_err) = report_error_to(err, &mut out) {
        let _ = writeln!(io::stderr(), "failed to report error: {io_err}");
    }
}

/// Writes a one-line failure summary. Invocation errors only summarise, since
/// their diagnostics have already been rendered.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn report_error_to(err: &Error, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "error: {err}")
}

/// Renders `diagnostics` in the configured format, one per line.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn print_diagnostics_to(
    diagnostics: &[Diagnostic],
    options: FormatOptions,
    out: &mut dyn Write,
) -> io::Result<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }
    let rendered = format_diagnostics(diagnostics, options);
    writeln!(out, "{rendered}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{
        DiagnosticArg, DiagnosticId, DiagnosticSink, ErrorFormat, SourceLoc,
    };
    use crate::invocation::InvocationError;

    fn render(diagnostics: &[Diagnostic], format: ErrorFormat) -> String {
        let mut out = Vec::new();
        let options = FormatOptions {
            format,
            ..FormatOptions::default()
        };
        print_diagnostics_to(diagnostics, options, &mut out).expect("write to buffer");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn empty_diagnostics_write_nothing() {
        assert_eq!(render(&[], ErrorFormat::Human), "");
    }

    #[test]
    fn short_format_prefixes_command_line_location() {
        let mut sink = DiagnosticSink::default();
        sink.diagnose(
            SourceLoc::invalid(),
            DiagnosticId::ErrorMissingArgValue,
            &[DiagnosticArg::from("-sdk"), DiagnosticArg::from(1usize)],
        );
        assert_eq!(
            render(sink.diagnostics(), ErrorFormat::Short),
            "<command-line>: error[FE0001]: missing argument value for '-sdk', expected 1 argument(s)\n"
        );
    }

    #[test]
    fn report_error_to_summarises_invocation_errors() {
        let err = Error::from(InvocationError::UnknownArgs {
            args: vec!["-bogus".into()],
        });
        let mut out = Vec::new();
        report_error_to(&err, &mut out).expect("write to buffer");
        assert_eq!(
            String::from_utf8(out).expect("utf8 output"),
            "error: invalid frontend invocation: 1 unknown argument(s): -bogus\n"
        );
    }
}
