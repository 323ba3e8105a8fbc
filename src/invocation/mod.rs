//! The resolved configuration of a single frontend invocation.
//!
//! A [`CompilerInvocation`] starts out with defaults (the injected host triple,
//! no inputs, `SourceFileKind::Main`) and is populated from the command line by
//! [`CompilerInvocation::parse_args`]. Consumers only get read access.

mod dispatch;
mod error;
mod resolve;
mod runtime_path;
#[cfg(test)]
mod tests;

use std::path::Path;

use serde::Serialize;

pub use error::InvocationError;
pub use runtime_path::{TOOLCHAIN_NAME, runtime_library_path};

/// How the frontend treats its primary inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFileKind {
    /// Top-level code is allowed and forms the program entry point.
    #[default]
    Main,
    Library,
}

/// How a link request is resolved downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryKind {
    Library,
    Framework,
}

/// A library or framework the produced module must be linked against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkLibrary {
    name: String,
    kind: LibraryKind,
}

impl LinkLibrary {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: LibraryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> LibraryKind {
        self.kind
    }
}

/// Options describing what the frontend reads and writes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FrontendOptions {
    input_filenames: Vec<String>,
    output_filename: Option<String>,
    module_name: Option<String>,
    serialized_diagnostics_path: Option<String>,
}

impl FrontendOptions {
    #[must_use]
    pub fn input_filenames(&self) -> &[String] {
        &self.input_filenames
    }

    #[must_use]
    pub fn output_filename(&self) -> Option<&str> {
        self.output_filename.as_deref()
    }

    #[must_use]
    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    #[must_use]
    pub fn serialized_diagnostics_path(&self) -> Option<&str> {
        self.serialized_diagnostics_path.as_deref()
    }
}

/// Language-mode switches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LangOptions {
    debug_constraint_solver: bool,
}

impl LangOptions {
    #[must_use]
    pub fn debug_constraint_solver(&self) -> bool {
        self.debug_constraint_solver
    }
}

/// Everything the frontend needs to know to compile a single module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerInvocation {
    target_triple: String,
    frontend: FrontendOptions,
    lang: LangOptions,
    sdk_path: Option<String>,
    clang_module_cache_path: Option<String>,
    module_source_list_path: Option<String>,
    runtime_include_path: Option<String>,
    import_search_paths: Vec<String>,
    framework_search_paths: Vec<String>,
    extra_clang_args: Vec<String>,
    link_libraries: Vec<LinkLibrary>,
    input_kind: SourceFileKind,
    parse_stdlib: bool,
}

impl CompilerInvocation {
    /// Creates an invocation with defaults, targeting `host_triple`.
    #[must_use]
    pub fn new(host_triple: impl Into<String>) -> Self {
        Self {
            target_triple: host_triple.into(),
            frontend: FrontendOptions::default(),
            lang: LangOptions::default(),
            sdk_path: None,
            clang_module_cache_path: None,
            module_source_list_path: None,
            runtime_include_path: None,
            import_search_paths: Vec::new(),
            framework_search_paths: Vec::new(),
            extra_clang_args: Vec::new(),
            link_libraries: Vec::new(),
            input_kind: SourceFileKind::Main,
            parse_stdlib: false,
        }
    }

    /// Creates an invocation targeting the machine running the frontend.
    #[must_use]
    pub fn for_host() -> Self {
        Self::new(crate::target::host_triple())
    }

    /// Derives the runtime library location from the path of the running executable.
    pub fn set_main_executable_path(&mut self, path: &Path) {
        let lib_path = runtime_library_path(path);
        self.runtime_include_path = Some(lib_path.to_string_lossy().into_owned());
    }

    #[must_use]
    pub fn target_triple(&self) -> &str {
        &self.target_triple
    }

    #[must_use]
    pub fn frontend(&self) -> &FrontendOptions {
        &self.frontend
    }

    #[must_use]
    pub fn lang(&self) -> &LangOptions {
        &self.lang
    }

    #[must_use]
    pub fn sdk_path(&self) -> Option<&str> {
        self.sdk_path.as_deref()
    }

    #[must_use]
    pub fn clang_module_cache_path(&self) -> Option<&str> {
        self.clang_module_cache_path.as_deref()
    }

    #[must_use]
    pub fn module_source_list_path(&self) -> Option<&str> {
        self.module_source_list_path.as_deref()
    }

    #[must_use]
    pub fn runtime_include_path(&self) -> Option<&str> {
        self.runtime_include_path.as_deref()
    }

    #[must_use]
    pub fn import_search_paths(&self) -> &[String] {
        &self.import_search_paths
    }

    #[must_use]
    pub fn framework_search_paths(&self) -> &[String] {
        &self.framework_search_paths
    }

    #[must_use]
    pub fn extra_clang_args(&self) -> &[String] {
        &self.extra_clang_args
    }

    #[must_use]
    pub fn link_libraries(&self) -> &[LinkLibrary] {
        &self.link_libraries
    }

    #[must_use]
    pub fn input_kind(&self) -> SourceFileKind {
        self.input_kind
    }

    #[must_use]
    pub fn parse_stdlib(&self) -> bool {
        self.parse_stdlib
    }
}
