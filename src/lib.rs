#![deny(clippy::all, clippy::pedantic, clippy::perf, clippy::suspicious)] // Catch correctness + perf + suspicious patterns early.
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Resolution of Chic frontend command lines into a [`CompilerInvocation`].

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod invocation;
pub mod options;
pub mod target;
pub mod version;

pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use error::{Error, Result};
pub use invocation::{
    CompilerInvocation, FrontendOptions, InvocationError, LangOptions, LibraryKind, LinkLibrary,
    SourceFileKind, runtime_library_path,
};
pub use options::{OptionFlags, OptionId, OptionTable};
