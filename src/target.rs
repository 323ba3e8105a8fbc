//! Host target lookup for the Chic frontend.

use std::str::FromStr;

use target_lexicon::{HOST, Triple};

/// The triple of the machine running the frontend.
///
/// Used as the default target of a fresh invocation.
#[must_use]
pub fn host_triple() -> String {
    HOST.to_string()
}

/// Whether `triple` names a platform `target-lexicon` understands.
///
/// Resolution never rejects a triple; callers use this for advisory logging only.
#[must_use]
pub fn is_recognized(triple: &str) -> bool {
    Triple::from_str(triple).is_ok()
}
