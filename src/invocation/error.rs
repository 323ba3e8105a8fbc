use std::error::Error as StdError;
use std::fmt;

/// Why an argument list could not be resolved into an invocation.
///
/// The matching diagnostics have already been emitted when this is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvocationError {
    /// One or more options were given without their value.
    MissingArgValue { arg: String, count: usize },
    /// One or more arguments matched no frontend option.
    UnknownArgs { args: Vec<String> },
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationError::MissingArgValue { arg, count } => {
                write!(f, "missing value for '{arg}' ({count} option(s) without a value)")
            }
            InvocationError::UnknownArgs { args } => {
                write!(f, "{} unknown argument(s): {}", args.len(), args.join(" "))
            }
        }
    }
}

impl StdError for InvocationError {}
