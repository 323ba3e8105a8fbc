//! Entry point for the `chic-frontend` binary.
//!
//! Arguments are matched once against the frontend-visible catalog. `-help` and
//! `-version` short-circuit; anything else is resolved into a
//! [`CompilerInvocation`] that is dumped as JSON.

mod help;
mod logging;
mod reporting;
#[cfg(test)]
mod tests;

use std::env;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use crate::diagnostics::{ColorMode, DiagnosticSink, ErrorFormat, FormatOptions};
use crate::error::Result;
use crate::invocation::CompilerInvocation;
use crate::options::{MatchedArgs, OptionFlags, OptionId, OptionTable};
use crate::{target, version};

pub use help::render_help;
pub use logging::{LogFormat, LogOptions, init_logging};
pub use reporting::{print_diagnostics_to, report_error, report_error_to};

/// What the binary was asked to do.
#[derive(Debug)]
pub enum Command {
    Help,
    Version,
    Resolve(MatchedArgs),
}

impl Command {
    /// Classifies `args`. Help wins over version, and both win over resolution
    /// even when the rest of the line is malformed.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let matched = OptionTable::chic().match_args(args, OptionFlags::FRONTEND);
        if matched.has_arg(OptionId::Help) {
            Command::Help
        } else if matched.has_arg(OptionId::Version) {
            Command::Version
        } else {
            Command::Resolve(matched)
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Version => "version",
            Command::Resolve(_) => "resolve",
        }
    }
}

/// Process configuration read from the environment.
#[derive(Debug, Clone, Copy)]
pub struct CliConfig {
    pub log_options: LogOptions,
    pub format: FormatOptions,
}

impl CliConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let error_format = env::var("CHIC_ERROR_FORMAT").ok();
        let color = if env::var_os("NO_COLOR").is_some() {
            ColorMode::Never
        } else {
            ColorMode::Auto
        };
        Self {
            log_options: LogOptions::from_env(),
            format: format_options(error_format.as_deref(), color, std::io::stderr().is_terminal()),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_options: LogOptions::DEFAULT,
            format: FormatOptions::default(),
        }
    }
}

fn format_options(error_format: Option<&str>, color: ColorMode, is_terminal: bool) -> FormatOptions {
    FormatOptions {
        format: error_format.and_then(ErrorFormat::parse).unwrap_or(ErrorFormat::Human),
        color,
        is_terminal,
    }
}

/// Host facts the resolver needs, captured once per process.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: CliConfig,
    pub host_triple: String,
    pub executable: Option<PathBuf>,
}

impl Session {
    #[must_use]
    pub fn from_env(config: CliConfig) -> Self {
        Self {
            config,
            host_triple: target::host_triple(),
            executable: env::current_exe().ok(),
        }
    }
}

/// Runs one frontend request, writing results to `out` and diagnostics to `err`.
///
/// # Errors
/// Returns [`crate::Error::Invocation`] when the arguments do not resolve (the
/// diagnostics have already been written to `err`), or an I/O or serialization
/// error when the output cannot be produced.
pub fn run<S: AsRef<str>>(
    args: &[S],
    session: &Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let command = Command::parse(args);
    tracing::debug!(
        target: "frontend.cli",
        stage = "cli.run.start",
        command = command.name(),
        arg_count = args.len(),
    );
    match command {
        Command::Help => writeln!(out, "{}", render_help())?,
        Command::Version => writeln!(out, "{}", version::formatted())?,
        Command::Resolve(matched) => {
            let invocation = resolve(&matched, session, err)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&invocation)?)?;
        }
    }
    Ok(())
}

fn resolve(
    matched: &MatchedArgs,
    session: &Session,
    err: &mut dyn Write,
) -> Result<CompilerInvocation> {
    let mut diags = DiagnosticSink::default();
    let mut invocation = CompilerInvocation::new(session.host_triple.clone());
    if let Some(executable) = &session.executable {
        invocation.set_main_executable_path(executable);
    }

    let result = invocation.parse_matched(matched, &mut diags);
    if !diags.is_empty() {
        print_diagnostics_to(diags.diagnostics(), session.config.format, err)?;
    }
    result?;

    logging::log_resolved(&invocation);
    if !target::is_recognized(invocation.target_triple()) {
        tracing::warn!(
            target: "frontend.cli",
            stage = "cli.target.unrecognized",
            triple = invocation.target_triple(),
        );
    }
    Ok(invocation)
}
