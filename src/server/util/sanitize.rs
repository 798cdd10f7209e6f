//! Guards for user input that cannot be passed as a bound SQL parameter.
//!
//! Sort columns name an identifier rather than a value, and `LIKE` patterns give `%` and `_`
//! special meaning. Both are neutralized here before reaching the query builder.

/// Strips every character outside `[A-Za-z0-9_]` from a caller-supplied identifier.
///
/// The result is still untrusted; callers match it against a whitelist of known columns.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Escapes `LIKE` metacharacters with a backslash.
///
/// The escaped term must be used with `ESCAPE '\'`.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

/// Builds a bound `%term%` pattern for a partial match.
pub fn like_contains(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
