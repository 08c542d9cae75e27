//! Candidate list assembly and name decoration.

/// Explicit branches first, then pull request heads, both in listed order.
/// Duplicates are kept.
pub fn merge_candidates(explicit: &[String], pull_request_heads: Vec<String>) -> Vec<String> {
    let mut candidates = explicit.to_vec();
    candidates.extend(pull_request_heads);
    candidates
}

/// Apply the optional prefix and suffix to a candidate.
pub fn decorate(candidate: &str, prefix: Option<&str>, suffix: Option<&str>) -> String {
    let prefix = prefix.unwrap_or_default();
    let suffix = suffix.unwrap_or_default();
    format!("{prefix}{candidate}{suffix}")
}
