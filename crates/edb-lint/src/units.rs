//! Engineering-unit validity.
//!
//! A unit literal is accepted by an ordered chain of predicates, tried
//! short-circuit: exact membership in the allowed set, a deploy-time macro,
//! or a composite split on `/`, space, and parentheses where every token
//! must individually validate.

/// Base units accepted as-is and as the tail of a prefixed unit.
pub const ALLOWED_UNITS: &[&str] = &[
    "A",
    "angstrom",
    "bar",
    "bit",
    "byte",
    "C",
    "count",
    "degree",
    "eV",
    "hour",
    "Hz",
    "inch",
    "interrupt",
    "K",
    "L",
    "m",
    "min",
    "minute",
    "ohm",
    "%",
    "photon",
    "pixel",
    "radian",
    "s",
    "torr",
    "step",
    "V",
    "mT",
    "uT",
    "Oersted",
];

/// SI prefixes accepted in front of an allowed base unit.
const SI_PREFIXES: &[char] = &['T', 'G', 'M', 'k', 'm', 'u', 'n', 'p', 'f'];

/// Whether a unit literal conforms to the house standard.
pub fn is_allowed_unit(unit: &str) -> bool {
    if is_base_unit(unit) {
        return true;
    }
    // Macros are resolved at deploy time; accept them unchecked.
    if unit.starts_with('$') {
        return true;
    }
    let tokens: Vec<&str> = unit
        .split(['/', ' ', '(', ')'])
        .filter(|token| !token.is_empty())
        .collect();
    !tokens.is_empty() && tokens.into_iter().all(is_valid_token)
}

fn is_base_unit(token: &str) -> bool {
    ALLOWED_UNITS.contains(&token)
}

fn is_valid_token(token: &str) -> bool {
    is_base_unit(token) || is_exponent(token) || is_prefixed_unit(token) || token == "cm"
}

/// `^` followed by an optional `-` and digits, e.g. `^2` in `m ^2`.
fn is_exponent(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('^') else {
        return false;
    };
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit())
}

/// Exactly one prefix character followed by a full allowed base unit.
/// `cm` is special-cased elsewhere since `c` is not an accepted prefix.
fn is_prefixed_unit(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(prefix) if SI_PREFIXES.contains(&prefix) => {
            let rest = chars.as_str();
            !rest.is_empty() && is_base_unit(rest)
        }
        _ => false,
    }
}
