//! Coercion of raw config-file literals into typed values
//!
//! Config files carry every value as text: quoted strings, bare `True`/`False`,
//! digit runs, and bracketed quoted-string lists. The loader preserves those
//! verbatim; the functions here turn them into the types the active
//! subcommand expects, reporting the offending key and literal on failure.

use std::str::FromStr;

use super::error::CoercionError;

/// Strips one matching pair of single or double quotes, if present.
///
/// Unmatched or mixed quotes are left untouched; surrounding whitespace is
/// always trimmed.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Interprets `True`/`true`/`False`/`false`, bare or quoted.
pub fn coerce_bool(key: &str, raw: &str) -> Result<bool, CoercionError> {
    match unquote(raw) {
        "True" | "true" => Ok(true),
        "False" | "false" => Ok(false),
        _ => Err(CoercionError::new(key, raw, "a boolean")),
    }
}

/// Parses a digit run, bare or quoted, into the caller's integer type.
pub fn coerce_int<T: FromStr>(key: &str, raw: &str) -> Result<T, CoercionError> {
    unquote(raw).parse().map_err(|_| CoercionError::new(key, raw, "an integer"))
}

/// Parses a bracketed list literal of quoted strings, preserving order.
///
/// Accepted shapes: `[]`, `["a"]`, `["a", 'b']`, a trailing comma after the
/// last element. Commas and brackets inside a quoted element are literal
/// text. Anything else, including a bare scalar or an unquoted element, is
/// a coercion error.
pub fn coerce_list(key: &str, raw: &str) -> Result<Vec<String>, CoercionError> {
    let fail = || CoercionError::new(key, raw, "a list of quoted strings");

    let inner = raw
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(fail)?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();
    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let quote = match chars.next() {
            None => break,
            Some(c @ ('"' | '\'')) => c,
            Some(_) => return Err(fail()),
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
                None => return Err(fail()),
            }
        }
        items.push(item);

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return Err(fail()),
        }
    }

    Ok(items)
}
