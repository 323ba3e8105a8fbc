//! Declarative catalog of the options understood by the Chic driver and frontend.

use std::fmt;
use std::ops::BitOr;

/// Stable identity of a catalog option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionId {
    /// A positional argument.
    Input,
    /// A token that matched no option visible in the requested context.
    Unknown,
    Target,
    Output,
    ModuleName,
    SerializeDiagnosticsPath,
    Sdk,
    ModuleCachePath,
    ModuleSourceList,
    ImportSearchPath,
    FrameworkSearchPath,
    Xcc,
    LinkLibrary,
    Framework,
    ParseAsLibrary,
    ParseStdlib,
    DebugConstraints,
    Help,
    Version,
    EmitExecutable,
    Jobs,
    Frontend,
}

/// How an option receives its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// No value, e.g. `-parse-stdlib`.
    Flag,
    /// Value in the following argument, e.g. `-sdk <path>`.
    Separate,
    /// Value attached to the spelling, e.g. `-lz`.
    Joined,
    /// Either of the above, e.g. `-Ipath` or `-I path`.
    JoinedOrSeparate,
}

impl OptionKind {
    #[must_use]
    pub fn takes_value(self) -> bool {
        !matches!(self, OptionKind::Flag)
    }

    #[must_use]
    pub fn accepts_joined(self) -> bool {
        matches!(self, OptionKind::Joined | OptionKind::JoinedOrSeparate)
    }
}

/// Visibility and matching flags attached to a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionFlags(u8);

impl OptionFlags {
    pub const NONE: Self = Self(0);
    /// Accepted by a single-file frontend invocation.
    pub const FRONTEND: Self = Self(1);
    /// Accepted by the multi-file driver.
    pub const DRIVER: Self = Self(1 << 1);
    /// The separate value is always the next argument, even when it looks like an option.
    pub const VERBATIM: Self = Self(1 << 2);

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for OptionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// A single catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct OptionInfo {
    pub id: OptionId,
    /// Spelling without the leading dash.
    pub spelling: &'static str,
    pub kind: OptionKind,
    pub flags: OptionFlags,
    pub meta_var: Option<&'static str>,
    pub help: &'static str,
}

impl OptionInfo {
    #[must_use]
    pub fn is_visible(&self, mask: OptionFlags) -> bool {
        let visibility = OptionFlags::FRONTEND | OptionFlags::DRIVER;
        self.flags.intersects(OptionFlags(mask.0 & visibility.0))
    }

    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.flags.contains(OptionFlags::VERBATIM)
    }

    /// Usage string for help output, e.g. `-I <path>` or `-l<name>`.
    #[must_use]
    pub fn usage(&self) -> String {
        match self.meta_var.filter(|_| self.kind.takes_value()) {
            None => format!("-{}", self.spelling),
            Some(meta) if self.kind == OptionKind::Joined => format!("-{}<{meta}>", self.spelling),
            Some(meta) => format!("-{} <{meta}>", self.spelling),
        }
    }
}

impl fmt::Display for OptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.spelling)
    }
}

const SHARED: OptionFlags = OptionFlags::FRONTEND.union(OptionFlags::DRIVER);

#[rustfmt::skip]
static OPTIONS: &[OptionInfo] = &[
    OptionInfo { id: OptionId::Target, spelling: "target", kind: OptionKind::Separate, flags: SHARED, meta_var: Some("triple"), help: "Generate code for the given target triple" },
    OptionInfo { id: OptionId::Output, spelling: "o", kind: OptionKind::JoinedOrSeparate, flags: SHARED, meta_var: Some("file"), help: "Write output to <file>" },
    OptionInfo { id: OptionId::ModuleName, spelling: "module-name", kind: OptionKind::Separate, flags: SHARED, meta_var: Some("name"), help: "Name of the module to build" },
    OptionInfo { id: OptionId::SerializeDiagnosticsPath, spelling: "serialize-diagnostics-path", kind: OptionKind::Separate, flags: OptionFlags::FRONTEND, meta_var: Some("path"), help: "Write serialized diagnostics to <path>" },
    OptionInfo { id: OptionId::Sdk, spelling: "sdk", kind: OptionKind::Separate, flags: SHARED, meta_var: Some("sdk"), help: "Compile against <sdk>" },
    OptionInfo { id: OptionId::ModuleCachePath, spelling: "module-cache-path", kind: OptionKind::Separate, flags: SHARED, meta_var: Some("path"), help: "Cache directory for imported C modules" },
    OptionInfo { id: OptionId::ModuleSourceList, spelling: "module-source-list", kind: OptionKind::Separate, flags: OptionFlags::FRONTEND, meta_var: Some("path"), help: "File listing the sources that make up the module" },
    OptionInfo { id: OptionId::ImportSearchPath, spelling: "I", kind: OptionKind::JoinedOrSeparate, flags: SHARED, meta_var: Some("path"), help: "Add directory to the import search path" },
    OptionInfo { id: OptionId::FrameworkSearchPath, spelling: "F", kind: OptionKind::JoinedOrSeparate, flags: SHARED, meta_var: Some("path"), help: "Add directory to the framework search path" },
    OptionInfo { id: OptionId::Xcc, spelling: "Xcc", kind: OptionKind::Separate, flags: SHARED.union(OptionFlags::VERBATIM), meta_var: Some("arg"), help: "Pass <arg> to the C importer" },
    OptionInfo { id: OptionId::LinkLibrary, spelling: "l", kind: OptionKind::Joined, flags: SHARED, meta_var: Some("name"), help: "Link against library <name>" },
    OptionInfo { id: OptionId::Framework, spelling: "framework", kind: OptionKind::Separate, flags: SHARED, meta_var: Some("name"), help: "Link against framework <name>" },
    OptionInfo { id: OptionId::ParseAsLibrary, spelling: "parse-as-library", kind: OptionKind::Flag, flags: SHARED, meta_var: None, help: "Parse the input file(s) as libraries, not scripts" },
    OptionInfo { id: OptionId::ParseStdlib, spelling: "parse-stdlib", kind: OptionKind::Flag, flags: SHARED, meta_var: None, help: "Parse the input file(s) as the standard library" },
    OptionInfo { id: OptionId::DebugConstraints, spelling: "debug-constraints", kind: OptionKind::Flag, flags: SHARED, meta_var: None, help: "Debug the constraint-based type checker" },
    OptionInfo { id: OptionId::Help, spelling: "help", kind: OptionKind::Flag, flags: SHARED, meta_var: None, help: "Display available options" },
    OptionInfo { id: OptionId::Version, spelling: "version", kind: OptionKind::Flag, flags: SHARED, meta_var: None, help: "Print version information and exit" },
    OptionInfo { id: OptionId::EmitExecutable, spelling: "emit-executable", kind: OptionKind::Flag, flags: OptionFlags::DRIVER, meta_var: None, help: "Emit a linked executable" },
    OptionInfo { id: OptionId::Jobs, spelling: "j", kind: OptionKind::JoinedOrSeparate, flags: OptionFlags::DRIVER, meta_var: Some("n"), help: "Number of commands to execute in parallel" },
    OptionInfo { id: OptionId::Frontend, spelling: "frontend", kind: OptionKind::Flag, flags: OptionFlags::DRIVER, meta_var: None, help: "Run in frontend mode" },
];

/// Lookup view over a static option catalog.
#[derive(Clone, Copy, Debug)]
pub struct OptionTable {
    entries: &'static [OptionInfo],
}

impl OptionTable {
    #[must_use]
    pub fn new(entries: &'static [OptionInfo]) -> Self {
        Self { entries }
    }

    /// The catalog shared by the Chic driver and frontend.
    #[must_use]
    pub fn chic() -> Self {
        Self::new(OPTIONS)
    }

    /// Entries visible under `mask`, in catalog order.
    pub fn visible(&self, mask: OptionFlags) -> impl Iterator<Item = &'static OptionInfo> {
        self.entries.iter().filter(move |info| info.is_visible(mask))
    }

    #[must_use]
    pub fn get(&self, id: OptionId) -> Option<&'static OptionInfo> {
        self.entries.iter().find(|info| info.id == id)
    }

    #[must_use]
    pub fn find_exact(&self, spelling: &str) -> Option<&'static OptionInfo> {
        self.entries.iter().find(|info| info.spelling == spelling)
    }

    /// Resolves a dash-stripped option name.
    ///
    /// Exact spellings win. Otherwise the longest joined spelling that prefixes
    /// `name` is chosen and the remainder is returned as its value.
    #[must_use]
    pub fn lookup<'a>(&self, name: &'a str) -> Option<(&'static OptionInfo, Option<&'a str>)> {
        if let Some(info) = self.find_exact(name) {
            return Some((info, None));
        }
        self.entries
            .iter()
            .filter(|info| info.kind.accepts_joined())
            .filter(|info| name.len() > info.spelling.len() && name.starts_with(info.spelling))
            .max_by_key(|info| info.spelling.len())
            .map(|info| (info, Some(&name[info.spelling.len()..])))
    }

    /// Whether `token` is spelled exactly like a catalog option.
    #[must_use]
    pub fn is_option_spelling(&self, token: &str) -> bool {
        option_name(token).is_some_and(|name| self.find_exact(name).is_some())
    }
}

impl Default for OptionTable {
    fn default() -> Self {
        Self::chic()
    }
}

/// Strips the option prefix (`-` or `--`) from `token`.
///
/// Returns `None` for positional arguments, including the lone `-` used for stdin.
#[must_use]
pub fn option_name(token: &str) -> Option<&str> {
    if token == "-" {
        return None;
    }
    token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
}
