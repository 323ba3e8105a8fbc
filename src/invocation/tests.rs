use std::path::Path;

use super::*;
use crate::diagnostics::{DiagnosticId, DiagnosticSink};

const HOST: &str = "x86_64-unknown-linux-gnu";

fn expect_resolved(args: &[&str]) -> CompilerInvocation {
    let mut diags = DiagnosticSink::default();
    match CompilerInvocation::resolve(args, HOST, &mut diags) {
        Ok(invocation) => {
            assert!(diags.is_empty(), "unexpected diagnostics: {diags:?}");
            invocation
        }
        Err(err) => panic!("expected {args:?} to resolve, found error: {err}"),
    }
}

fn expect_rejected(args: &[&str]) -> (InvocationError, DiagnosticSink) {
    let mut diags = DiagnosticSink::default();
    match CompilerInvocation::resolve(args, HOST, &mut diags) {
        Ok(invocation) => panic!("expected {args:?} to be rejected, resolved {invocation:?}"),
        Err(err) => (err, diags),
    }
}

#[test]
fn empty_arguments_keep_construction_defaults() {
    let invocation = expect_resolved(&[]);
    assert_eq!(invocation, CompilerInvocation::new(HOST));
    assert_eq!(invocation.target_triple(), HOST);
    assert!(invocation.frontend().input_filenames().is_empty());
    assert_eq!(invocation.frontend().output_filename(), None);
    assert_eq!(invocation.frontend().module_name(), None);
    assert_eq!(invocation.frontend().serialized_diagnostics_path(), None);
    assert_eq!(invocation.sdk_path(), None);
    assert_eq!(invocation.clang_module_cache_path(), None);
    assert_eq!(invocation.module_source_list_path(), None);
    assert_eq!(invocation.runtime_include_path(), None);
    assert!(invocation.import_search_paths().is_empty());
    assert!(invocation.framework_search_paths().is_empty());
    assert!(invocation.extra_clang_args().is_empty());
    assert!(invocation.link_libraries().is_empty());
    assert_eq!(invocation.input_kind(), SourceFileKind::Main);
    assert!(!invocation.parse_stdlib());
    assert!(!invocation.lang().debug_constraint_solver());
}

#[test]
fn last_occurrence_wins_for_scalar_options() {
    let invocation = expect_resolved(&[
        "-o",
        "first.o",
        "-module-name",
        "First",
        "-sdk",
        "/sdk/a",
        "-target",
        "aarch64-apple-darwin",
        "-serialize-diagnostics-path",
        "a.dia",
        "-module-cache-path",
        "/cache/a",
        "-module-source-list",
        "a.list",
        "main.chic",
        "-o",
        "second.o",
        "-sdk",
        "/sdk/b",
        "-module-cache-path",
        "/cache/b",
        "-target",
        "x86_64-apple-darwin",
        "-module-name",
        "Second",
        "-serialize-diagnostics-path",
        "b.dia",
        "-module-source-list",
        "b.list",
        "-parse-stdlib",
    ]);
    assert_eq!(invocation.frontend().output_filename(), Some("second.o"));
    assert_eq!(invocation.frontend().module_name(), Some("Second"));
    assert_eq!(invocation.frontend().serialized_diagnostics_path(), Some("b.dia"));
    assert_eq!(invocation.sdk_path(), Some("/sdk/b"));
    assert_eq!(invocation.clang_module_cache_path(), Some("/cache/b"));
    assert_eq!(invocation.module_source_list_path(), Some("b.list"));
    assert_eq!(invocation.target_triple(), "x86_64-apple-darwin");
}

#[test]
fn accumulating_options_preserve_order_and_duplicates() {
    let invocation = expect_resolved(&[
        "-I",
        "b",
        "-Ia",
        "-F",
        "/frameworks",
        "-I",
        "b",
        "-Xcc",
        "-DDEBUG=1",
        "-Xcc",
        "-fmodules",
        "-lz",
        "-framework",
        "Foundation",
        "-lc++",
        "-Flocal",
    ]);
    assert_eq!(invocation.import_search_paths(), ["b", "a", "b"]);
    assert_eq!(invocation.framework_search_paths(), ["/frameworks", "local"]);
    assert_eq!(invocation.extra_clang_args(), ["-DDEBUG=1", "-fmodules"]);
    assert_eq!(
        invocation.link_libraries(),
        [
            LinkLibrary::new("z", LibraryKind::Library),
            LinkLibrary::new("Foundation", LibraryKind::Framework),
            LinkLibrary::new("c++", LibraryKind::Library),
        ]
    );
}

#[test]
fn positional_inputs_interleave_with_flags() {
    let invocation = expect_resolved(&[
        "b.chic",
        "-parse-as-library",
        "a.chic",
        "-I",
        "include",
        "b.chic",
        "-",
    ]);
    assert_eq!(
        invocation.frontend().input_filenames(),
        ["b.chic", "a.chic", "b.chic", "-"]
    );
    assert_eq!(invocation.import_search_paths(), ["include"]);
}

#[test]
fn library_mode_is_idempotent() {
    let twice = expect_resolved(&["-parse-as-library", "main.chic", "-parse-as-library"]);
    assert_eq!(twice.input_kind(), SourceFileKind::Library);

    let neither = expect_resolved(&["main.chic"]);
    assert_eq!(neither.input_kind(), SourceFileKind::Main);
}

#[test]
fn monotonic_flags_stay_set() {
    let invocation = expect_resolved(&[
        "-parse-stdlib",
        "-debug-constraints",
        "-sdk",
        "/sdk",
        "-parse-as-library",
        "main.chic",
        "-debug-constraints",
    ]);
    assert!(invocation.parse_stdlib());
    assert!(invocation.lang().debug_constraint_solver());
}

#[test]
fn missing_value_yields_a_single_diagnostic() {
    let (err, diags) = expect_rejected(&["-o", "-parse-stdlib", "-l", "-bogus", "main.chic", "-sdk"]);
    assert_eq!(
        err,
        InvocationError::MissingArgValue {
            arg: "-o".into(),
            count: 3
        }
    );
    assert_eq!(diags.len(), 1, "missing values take priority over unknown args");
    let diag = &diags.diagnostics()[0];
    assert_eq!(diag.id, Some(DiagnosticId::ErrorMissingArgValue));
    assert_eq!(
        diag.message,
        "missing argument value for '-o', expected 3 argument(s)"
    );
}

#[test]
fn missing_value_leaves_fields_untouched() {
    let mut diags = DiagnosticSink::default();
    let mut invocation = CompilerInvocation::new(HOST);
    let result = invocation.parse_args(&["main.chic", "-I", "inc", "-parse-stdlib", "-target"], &mut diags);
    assert!(result.is_err());
    assert_eq!(invocation, CompilerInvocation::new(HOST));
}

#[test]
fn every_unknown_argument_is_reported() {
    let (err, diags) = expect_rejected(&["-bogus", "main.chic", "--nope", "-emit-executable"]);
    assert_eq!(
        err,
        InvocationError::UnknownArgs {
            args: vec!["-bogus".into(), "--nope".into(), "-emit-executable".into()]
        }
    );
    assert_eq!(diags.len(), 3);
    let messages: Vec<_> = diags.diagnostics().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "unknown argument: '-bogus'",
            "unknown argument: '--nope'",
            "unknown argument: '-emit-executable'"
        ]
    );
}

#[test]
fn unknown_arguments_prevent_field_assignment() {
    let mut diags = DiagnosticSink::default();
    let mut invocation = CompilerInvocation::new(HOST);
    let result = invocation.parse_args(&["-I", "inc", "main.chic", "-what"], &mut diags);
    assert!(matches!(result, Err(InvocationError::UnknownArgs { .. })));
    assert!(invocation.import_search_paths().is_empty());
    assert!(invocation.frontend().input_filenames().is_empty());
}

#[test]
fn help_and_version_are_known_but_not_dispatched() {
    let invocation = expect_resolved(&["-help", "-version", "main.chic"]);
    assert_eq!(invocation.frontend().input_filenames(), ["main.chic"]);
}

#[test]
fn executable_path_feeds_runtime_include_path() {
    let mut invocation = CompilerInvocation::new(HOST);
    invocation.set_main_executable_path(Path::new("/opt/toolchain/bin/frontend"));
    assert_eq!(
        invocation.runtime_include_path(),
        Some("/opt/toolchain/lib/chic")
    );

    let mut diags = DiagnosticSink::default();
    invocation
        .parse_args(&["main.chic"], &mut diags)
        .expect("resolution succeeds");
    assert_eq!(
        invocation.runtime_include_path(),
        Some("/opt/toolchain/lib/chic"),
        "argument parsing must not touch the runtime path"
    );
}

#[test]
fn serialized_invocation_uses_snake_case_kinds() {
    let invocation = expect_resolved(&["-parse-as-library", "-framework", "UIKit", "main.chic"]);
    let json = serde_json::to_value(&invocation).expect("invocation serializes");
    assert_eq!(json["input_kind"], "library");
    assert_eq!(json["link_libraries"][0]["kind"], "framework");
    assert_eq!(json["frontend"]["input_filenames"][0], "main.chic");
    assert_eq!(json["target_triple"], HOST);
}

#[test]
fn for_host_targets_the_running_machine() {
    let invocation = CompilerInvocation::for_host();
    assert_eq!(invocation.target_triple(), crate::target::host_triple());
    assert_eq!(invocation.runtime_include_path(), None);
}
