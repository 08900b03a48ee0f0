//! Markup sanitation for platform-supplied metadata values.
//!
//! Extended metadata fields arrive as HTML fragments (author credits often
//! embed anchors, dates embed comments). These scanners replace ad-hoc
//! pattern matching with one tested utility.

use crate::record::UNKNOWN_FIELD;

/// Removes every complete `<...>` span from `input`.
///
/// An unterminated `<` is kept verbatim together with the rest of the
/// string; malformed upstream markup must not silently truncate a value.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                // No closing bracket: not a tag, keep as-is.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Rewrites every `<a` opening so the link opens in a new viewing context.
///
/// Only anchors followed by whitespace are touched (`<abbr>` and friends
/// pass through); the matched whitespace is replaced by a single space
/// after the inserted attribute.
pub fn retarget_anchors(input: &str) -> String {
    const OPEN: &str = "<a";

    let mut out = String::with_capacity(input.len() + 16);
    let mut rest = input;

    while let Some(pos) = rest.find(OPEN) {
        let after = pos + OPEN.len();
        let next = rest[after..].chars().next();
        match next {
            Some(c) if c.is_whitespace() => {
                out.push_str(&rest[..pos]);
                out.push_str("<a target=\"_blank\" ");
                rest = &rest[after + c.len_utf8()..];
            }
            _ => {
                out.push_str(&rest[..after]);
                rest = &rest[after..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Reduces a raw creation-date value to its date-only part.
///
/// Strips markup, then truncates at the first `(` (parenthetical qualifiers
/// like "according to EXIF data") and at the first `,` (extraneous
/// comma-joined fragments), trimming at each step. Idempotent: an already
/// cleaned value comes back unchanged, and a cleanup that consumes the whole
/// value collapses to the sentinel rather than an empty string.
pub fn clean_date_value(raw: &str) -> String {
    if raw.is_empty() || raw == UNKNOWN_FIELD {
        return UNKNOWN_FIELD.to_string();
    }

    let stripped = strip_tags(raw);
    let mut value = stripped.trim();
    value = value.split('(').next().unwrap_or("").trim();
    value = value.split(',').next().unwrap_or("").trim();

    if value.is_empty() {
        UNKNOWN_FIELD.to_string()
    } else {
        value.to_string()
    }
}
