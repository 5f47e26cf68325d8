//! Resolves the target GitHub user from the process environment.

use std::env;

/// Identity used when no repository slug is available from the environment.
pub const DEFAULT_OWNER: &str = "foevertigo";

/// Environment variable carrying an `owner/repo` slug (set by GitHub Actions).
const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// Extract the owner from an `owner/repo` slug, if one is usable.
///
/// An absent slug, or one with an empty owner segment, yields the default
/// identity. This never fails.
pub fn owner_from_slug(slug: Option<&str>) -> String {
    match slug.and_then(|s| s.split('/').next()).filter(|o| !o.is_empty()) {
        Some(owner) => owner.to_string(),
        None => DEFAULT_OWNER.to_string(),
    }
}

/// Resolve the target owner from `GITHUB_REPOSITORY`, falling back to the
/// fixed default when unset.
pub fn resolve_owner() -> String {
    owner_from_slug(env::var(REPOSITORY_VAR).ok().as_deref())
}
