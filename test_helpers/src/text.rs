//! Shared text normalization helpers for behavioural test suites.

/// Strips one layer of surrounding double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    trimmed
}

/// Removes the trailing ` caller: ...` segment from a rendered outcome.
///
/// Caller locations depend on file layout and line numbers, so assertions
/// on full renderings usually compare the remainder.
#[must_use]
pub fn strip_caller(rendered: &str) -> &str {
    rendered
        .find(" caller: ")
        .and_then(|start| rendered.get(..start))
        .unwrap_or(rendered)
}

#[cfg(test)]
mod tests {
    use super::{strip_caller, unquote};

    #[test]
    fn unquote_removes_double_quotes_only() {
        assert_eq!(unquote("\"value\""), "value");
        assert_eq!(unquote("  'value' "), "'value'");
    }

    #[test]
    fn strip_caller_drops_the_location_suffix() {
        assert_eq!(
            strip_caller("<Address> FAIL reason: `x` caller: src/a.rs run():3"),
            "<Address> FAIL reason: `x`"
        );
        assert_eq!(strip_caller("<Address> OK result: `1`"), "<Address> OK result: `1`");
    }
}
