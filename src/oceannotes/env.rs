use std::env;

const API_BASE_VAR: &str = "NOTES_API_BASE";
const BACKEND_URL_VAR: &str = "NOTES_BACKEND_URL";

/// Optional runtime configuration read from the process environment.
///
/// The only value consumed today is the remote backend base URL, reserved
/// for a future sync integration. Absence is the normal case and never an
/// error; blank values count as absent.
pub fn api_base() -> Option<String> {
    api_base_from(|key| env::var(key).ok())
}

/// Same resolution as [`api_base`], but over an injected lookup so callers
/// (and tests) can supply their own environment.
pub fn api_base_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    resolve(&lookup, API_BASE_VAR).or_else(|| resolve(&lookup, BACKEND_URL_VAR))
}

fn resolve(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
