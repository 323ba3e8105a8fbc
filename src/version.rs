//! Build-time metadata reported by `chic-frontend -version`.

/// Short git hash determined at compile time when available.
#[must_use]
pub fn commit_hash() -> &'static str {
    option_env!("CHIC_GIT_HASH").unwrap_or("unknown")
}

/// Full git hash determined at compile time when available.
#[must_use]
pub fn commit_hash_full() -> &'static str {
    option_env!("CHIC_GIT_HASH_FULL").unwrap_or("unknown")
}

/// Cargo build profile associated with the binary.
#[must_use]
pub fn build_profile() -> &'static str {
    option_env!("CHIC_BUILD_PROFILE").unwrap_or("unknown")
}

/// Render a scripting-friendly version string.
#[must_use]
pub fn formatted() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let commit = commit_hash();
    let commit_full = commit_hash_full();
    let profile = build_profile();
    let target = option_env!("CHIC_BUILD_TARGET").unwrap_or("unknown");
    let host = crate::target::host_triple();
    let commit_line = if commit_full != "unknown" && commit_full != commit {
        format!("{commit} ({commit_full})")
    } else {
        commit.to_string()
    };
    format!(
        "chic-frontend {version}\ncommit: {commit_line}\nprofile: {profile}\ntarget: {target}\ndefault target: {host}"
    )
}
