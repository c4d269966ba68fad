//! Text helpers shared by the parser and the rules.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single `$(TOKEN)` macro placeholder.
static MACRO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\([^)]*\)").expect("invalid macro regex"));

/// Remove every `$(...)` macro substring, leaving the rest untouched.
///
/// Each macro is stripped individually, so text between two macros
/// survives.
pub fn strip_macros(text: &str) -> String {
    MACRO_REGEX.replace_all(text, "").into_owned()
}
