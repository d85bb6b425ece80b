//! Shared text normalisation helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if let Some(stripped) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return stripped;
        }
    }
    trimmed
}

/// Splits a placeholder such as `"data, controller"` into trimmed keys.
///
/// Empty pieces are kept so malformed paths stay visible to the caller.
#[must_use]
pub fn key_list(value: &str) -> Vec<String> {
    unquote(value)
        .split(',')
        .map(|key| key.trim().to_owned())
        .collect()
}
