use std::path::PathBuf;

use super::*;
use crate::error::Error;
use crate::invocation::InvocationError;

const HOST: &str = "x86_64-unknown-linux-gnu";

fn session() -> Session {
    Session {
        config: CliConfig::default(),
        host_triple: HOST.to_string(),
        executable: Some(PathBuf::from("/opt/chic/bin/chic-frontend")),
    }
}

fn run_captured(args: &[&str]) -> (Result<()>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run(args, &session(), &mut out, &mut err);
    (
        result,
        String::from_utf8(out).expect("stdout is utf8"),
        String::from_utf8(err).expect("stderr is utf8"),
    )
}

#[test]
fn parse_classifies_help_version_and_resolution() {
    assert!(matches!(Command::parse(&["-help"]), Command::Help));
    assert!(matches!(Command::parse(&["--version"]), Command::Version));
    assert!(matches!(
        Command::parse(&["-version", "-help"]),
        Command::Help
    ));
    assert!(matches!(
        Command::parse(&["main.chic"]),
        Command::Resolve(_)
    ));
}

#[test]
fn help_wins_over_malformed_arguments() {
    let (result, out, err) = run_captured(&["-bogus", "-help", "-sdk"]);
    assert!(result.is_ok());
    assert!(out.starts_with("OVERVIEW:"));
    assert!(err.is_empty());
}

#[test]
fn version_prints_build_metadata() {
    let (result, out, _) = run_captured(&["-version"]);
    assert!(result.is_ok());
    assert!(out.starts_with("chic-frontend "));
    assert!(out.contains("default target: "));
}

#[test]
fn resolution_prints_invocation_json() {
    let (result, out, err) = run_captured(&[
        "-module-name",
        "App",
        "-I",
        "include",
        "-lz",
        "main.chic",
    ]);
    assert!(result.is_ok(), "unexpected failure: {err}");
    assert!(err.is_empty());

    let json: serde_json::Value = serde_json::from_str(&out).expect("stdout is JSON");
    assert_eq!(json["target_triple"], HOST);
    assert_eq!(json["frontend"]["module_name"], "App");
    assert_eq!(json["frontend"]["input_filenames"][0], "main.chic");
    assert_eq!(json["import_search_paths"][0], "include");
    assert_eq!(json["link_libraries"][0]["name"], "z");
    assert_eq!(json["runtime_include_path"], "/opt/chic/lib/chic");
}

#[test]
fn unknown_arguments_render_diagnostics_and_fail() {
    let (result, out, err) = run_captured(&["-bogus", "main.chic", "-emit-executable"]);
    match result {
        Err(Error::Invocation(InvocationError::UnknownArgs { args })) => {
            assert_eq!(args, ["-bogus", "-emit-executable"]);
        }
        other => panic!("expected unknown-argument failure, found {other:?}"),
    }
    assert!(out.is_empty(), "no invocation is printed on failure");
    assert_eq!(
        err,
        "error[FE0002]: unknown argument: '-bogus'\n\
         error[FE0002]: unknown argument: '-emit-executable'\n"
    );
}

#[test]
fn missing_value_renders_a_single_diagnostic() {
    let (result, _, err) = run_captured(&["main.chic", "-o"]);
    assert!(matches!(
        result,
        Err(Error::Invocation(InvocationError::MissingArgValue { count: 1, .. }))
    ));
    assert_eq!(
        err,
        "error[FE0001]: missing argument value for '-o', expected 1 argument(s)\n"
    );
}

#[test]
fn format_options_fall_back_to_human() {
    let options = format_options(Some("json"), ColorMode::Never, false);
    assert_eq!(options.format, ErrorFormat::Json);
    let options = format_options(Some("xml"), ColorMode::Auto, true);
    assert_eq!(options.format, ErrorFormat::Human);
    assert!(options.use_color());
    let options = format_options(None, ColorMode::Never, true);
    assert_eq!(options.format, ErrorFormat::Human);
    assert!(!options.use_color());
}
