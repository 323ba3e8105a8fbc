#![deny(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

use chic_invocation::cli::{self, CliConfig, Session};
use chic_invocation::error::Result;
use std::ffi::OsStr;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    run_with_args(std::env::args_os().skip(1))
}

fn run_with_args<I, S>(args: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn try_main<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .collect();
    let config = CliConfig::from_env();
    cli::init_logging(&config.log_options);
    let session = Session::from_env(config);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    cli::run(&args, &session, &mut stdout, &mut stderr)
}
