//! Per-option field policies applied while walking the matched arguments.

use crate::options::OptionId;

use super::{CompilerInvocation, LibraryKind, LinkLibrary, SourceFileKind};

type ScalarField = fn(&mut CompilerInvocation) -> &mut Option<String>;
type ListField = fn(&mut CompilerInvocation) -> &mut Vec<String>;
type FlagField = fn(&mut CompilerInvocation) -> &mut bool;

/// How a single option occurrence updates the invocation.
#[derive(Clone, Copy)]
pub(crate) enum FieldUpdate {
    /// Replace the target triple; the last occurrence wins.
    Retarget,
    /// Overwrite an optional scalar; the last occurrence wins.
    Assign(ScalarField),
    /// Append to an ordered list.
    Append(ListField),
    /// Append a link request of the given kind.
    Link(LibraryKind),
    /// Set the input kind. Repeats are no-ops.
    SetInputKind(SourceFileKind),
    /// Set a monotonic flag.
    Enable(FlagField),
}

impl FieldUpdate {
    pub(crate) fn apply(self, invocation: &mut CompilerInvocation, value: Option<&str>) {
        match (self, value) {
            (FieldUpdate::Retarget, Some(value)) => invocation.target_triple = value.to_string(),
            (FieldUpdate::Assign(field), Some(value)) => *field(invocation) = Some(value.to_string()),
            (FieldUpdate::Append(field), Some(value)) => field(invocation).push(value.to_string()),
            (FieldUpdate::Link(kind), Some(value)) => {
                invocation.link_libraries.push(LinkLibrary::new(value, kind));
            }
            (FieldUpdate::SetInputKind(kind), _) => invocation.input_kind = kind,
            (FieldUpdate::Enable(field), _) => *field(invocation) = true,
            (_, None) => {}
        }
    }
}

/// The policy for `id`, or `None` for options this walk does not own.
///
/// Output, module name and serialized-diagnostics path are picked separately by
/// last occurrence and are deliberately absent here.
pub(crate) fn field_update(id: OptionId) -> Option<FieldUpdate> {
    let update = match id {
        OptionId::Target => FieldUpdate::Retarget,
        OptionId::ImportSearchPath => FieldUpdate::Append(|inv| &mut inv.import_search_paths),
        OptionId::FrameworkSearchPath => {
            FieldUpdate::Append(|inv| &mut inv.framework_search_paths)
        }
        OptionId::Sdk => FieldUpdate::Assign(|inv| &mut inv.sdk_path),
        OptionId::ModuleCachePath => FieldUpdate::Assign(|inv| &mut inv.clang_module_cache_path),
        OptionId::ParseAsLibrary => FieldUpdate::SetInputKind(SourceFileKind::Library),
        OptionId::ParseStdlib => FieldUpdate::Enable(|inv| &mut inv.parse_stdlib),
        OptionId::Xcc => FieldUpdate::Append(|inv| &mut inv.extra_clang_args),
        OptionId::DebugConstraints => {
            FieldUpdate::Enable(|inv| &mut inv.lang.debug_constraint_solver)
        }
        OptionId::LinkLibrary => FieldUpdate::Link(LibraryKind::Library),
        OptionId::Framework => FieldUpdate::Link(LibraryKind::Framework),
        OptionId::ModuleSourceList => FieldUpdate::Assign(|inv| &mut inv.module_source_list_path),
        _ => return None,
    };
    Some(update)
}
