use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    let git_full = git_full_hash().or_else(env_git_hash_full);
    if let Some(hash) = git_full.as_deref() {
        println!("cargo:rustc-env=CHIC_GIT_HASH_FULL={hash}");
    }
    if let Some(hash) = git_short_hash().or_else(|| git_full.as_deref().and_then(shorten_hash)) {
        println!("cargo:rustc-env=CHIC_GIT_HASH={hash}");
    }

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".into());
    println!("cargo:rustc-env=CHIC_BUILD_PROFILE={profile}");
    if let Ok(target) = env::var("TARGET") {
        println!("cargo:rustc-env=CHIC_BUILD_TARGET={target}");
    }

    println!("cargo:rerun-if-changed=Cargo.toml");
}

fn git_full_hash() -> Option<String> {
    git_output(&["rev-parse", "HEAD"])
}

fn git_short_hash() -> Option<String> {
    git_output(&["rev-parse", "--short", "HEAD"])
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let trimmed = hash.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn env_git_hash_full() -> Option<String> {
    let hash = env::var("GITHUB_SHA").ok()?;
    let trimmed = hash.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn shorten_hash(hash: &str) -> Option<String> {
    let trimmed = hash.trim();
    if trimmed.len() < 7 {
        return None;
    }
    Some(trimmed.chars().take(8).collect())
}
