//! Stderr logging for the binary, configured from `CHIC_LOG_FORMAT` and
//! `CHIC_LOG_LEVEL`.

use std::env;
use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

use crate::invocation::CompilerInvocation;

/// Event layout written by the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub format: LogFormat,
    /// Used when `RUST_LOG` is unset or does not parse.
    pub level: LevelFilter,
}

impl LogOptions {
    pub const DEFAULT: Self = Self {
        format: LogFormat::Compact,
        level: LevelFilter::WARN,
    };

    #[must_use]
    pub fn from_env() -> Self {
        let format = env::var("CHIC_LOG_FORMAT").ok();
        let level = env::var("CHIC_LOG_LEVEL").ok();
        Self::from_values(format.as_deref(), level.as_deref())
    }

    /// Unrecognised values fall back to [`LogOptions::DEFAULT`] field by field.
    fn from_values(format: Option<&str>, level: Option<&str>) -> Self {
        Self {
            format: format
                .and_then(LogFormat::from_env_value)
                .unwrap_or(Self::DEFAULT.format),
            level: level
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(Self::DEFAULT.level),
        }
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Installs the global stderr subscriber. Later calls are ignored.
pub fn init_logging(options: &LogOptions) {
    static INITIALISED: OnceLock<()> = OnceLock::new();

    let _ = INITIALISED.get_or_init(|| {
        let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(options.level.to_string()));
        let builder = fmt::fmt()
            .with_env_filter(filter)
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false);

        match options.format {
            LogFormat::Json => {
                let _ = tracing::subscriber::set_global_default(builder.json().finish());
            }
            LogFormat::Compact => {
                let _ = tracing::subscriber::set_global_default(builder.compact().finish());
            }
        }
    });
}

pub(super) fn log_resolved(invocation: &CompilerInvocation) {
    let frontend = invocation.frontend();
    tracing::info!(
        target: "frontend.cli",
        stage = "cli.resolve.complete",
        target_triple = invocation.target_triple(),
        input_kind = ?invocation.input_kind(),
        input_count = frontend.input_filenames().len(),
        inputs = %format_input_list(frontend.input_filenames()),
        module_name = frontend.module_name().unwrap_or("n/a"),
        output = frontend.output_filename().unwrap_or("n/a"),
        link_libraries = invocation.link_libraries().len(),
    );
}

pub(super) fn format_input_list(inputs: &[String]) -> String {
    if inputs.is_empty() {
        "<none>".into()
    } else {
        inputs.join(", ")
    }
}
