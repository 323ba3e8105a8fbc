use crate::diagnostics::{DiagnosticArg, DiagnosticId, DiagnosticSink, SourceLoc};
use crate::options::{MatchedArg, MatchedArgs, OptionFlags, OptionId, OptionTable};

use super::dispatch::field_update;
use super::{CompilerInvocation, FrontendOptions, InvocationError};

impl CompilerInvocation {
    /// Resolves `args` into a fresh invocation targeting `host_triple`.
    ///
    /// # Errors
    /// Returns an [`InvocationError`] after emitting diagnostics into `diags` when an
    /// option is missing its value or an argument is not a frontend option.
    pub fn resolve<S: AsRef<str>>(
        args: &[S],
        host_triple: impl Into<String>,
        diags: &mut DiagnosticSink,
    ) -> Result<Self, InvocationError> {
        let mut invocation = Self::new(host_triple);
        invocation.parse_args(args, diags)?;
        Ok(invocation)
    }

    /// Populates this invocation from frontend command-line arguments.
    ///
    /// On error the invocation is left partially populated and must be discarded.
    ///
    /// # Errors
    /// See [`CompilerInvocation::resolve`].
    pub fn parse_args<S: AsRef<str>>(
        &mut self,
        args: &[S],
        diags: &mut DiagnosticSink,
    ) -> Result<(), InvocationError> {
        if args.is_empty() {
            return Ok(());
        }
        let matched = OptionTable::chic().match_args(args, OptionFlags::FRONTEND);
        self.parse_matched(&matched, diags)
    }

    /// Populates this invocation from an already matched argument list.
    ///
    /// # Errors
    /// See [`CompilerInvocation::resolve`].
    pub fn parse_matched(
        &mut self,
        matched: &MatchedArgs,
        diags: &mut DiagnosticSink,
    ) -> Result<(), InvocationError> {
        check_match_errors(matched, diags)?;

        self.frontend.parse(matched);

        for arg in matched.iter() {
            if let Some(update) = field_update(arg.id) {
                update.apply(self, arg.value());
            }
        }

        tracing::debug!(
            target: "frontend.args",
            stage = "frontend.args.resolved",
            target_triple = %self.target_triple,
            inputs = self.frontend.input_filenames.len(),
            import_paths = self.import_search_paths.len(),
            link_libraries = self.link_libraries.len(),
        );
        Ok(())
    }
}

impl FrontendOptions {
    fn parse(&mut self, matched: &MatchedArgs) {
        let last_value =
            |id| matched.last_arg(id).and_then(MatchedArg::value).map(str::to_string);

        if let Some(output) = last_value(OptionId::Output) {
            self.output_filename = Some(output);
        }
        if let Some(module_name) = last_value(OptionId::ModuleName) {
            self.module_name = Some(module_name);
        }
        if let Some(path) = last_value(OptionId::SerializeDiagnosticsPath) {
            self.serialized_diagnostics_path = Some(path);
        }

        self.input_filenames.extend(
            matched
                .filtered(OptionId::Input)
                .filter_map(MatchedArg::value)
                .map(str::to_string),
        );
    }
}

/// Reports matcher failures.
///
/// Missing values produce one diagnostic for the whole list and take priority;
/// unknown arguments produce one diagnostic each.
fn check_match_errors(
    matched: &MatchedArgs,
    diags: &mut DiagnosticSink,
) -> Result<(), InvocationError> {
    if let Some(missing) = matched.missing() {
        let arg = matched.arg_string(missing.index).unwrap_or_default().to_string();
        tracing::debug!(
            target: "frontend.args",
            stage = "frontend.args.missing_value",
            arg = %arg,
            count = missing.count,
        );
        diags.diagnose(
            SourceLoc::invalid(),
            DiagnosticId::ErrorMissingArgValue,
            &[DiagnosticArg::from(arg.as_str()), DiagnosticArg::from(missing.count)],
        );
        return Err(InvocationError::MissingArgValue {
            arg,
            count: missing.count,
        });
    }

    if matched.has_unknown() {
        let mut args = Vec::new();
        for unknown in matched.unknown() {
            let text = unknown.as_arg_string();
            diags.diagnose(
                SourceLoc::invalid(),
                DiagnosticId::ErrorUnknownArg,
                &[DiagnosticArg::from(text.as_str())],
            );
            args.push(text);
        }
        tracing::debug!(
            target: "frontend.args",
            stage = "frontend.args.unknown",
            count = args.len(),
        );
        return Err(InvocationError::UnknownArgs { args });
    }

    Ok(())
}
