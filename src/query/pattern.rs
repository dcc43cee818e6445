//! Local evaluation of `name_like` patterns.
//!
//! The backend treats `name_like` as a regular expression. This mirror of
//! that matching is used for offline previews and tests; the server remains
//! authoritative for actual filtering.

/// Whether a store name matches a `name_like` pattern, case-insensitively.
///
/// An invalid pattern matches nothing.
pub fn name_like_matches(pattern: &str, name: &str) -> bool {
    match regex::RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.is_match(name),
        Err(e) => {
            log::debug!("unusable name_like pattern '{}': {}", pattern, e);
            false
        }
    }
}
