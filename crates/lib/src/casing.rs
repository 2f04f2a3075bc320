//! Capitalisation detection and case conversion.
//!
//! Pure string transformations between kebab-case, camelCase, PascalCase and
//! snake_case, plus the syntactic detector the Options container uses for its
//! case-fallback key aliasing. Kept separate from the container so the
//! transformations are independently testable.

use std::fmt;

use thiserror::Error;

/// Errors from case conversion.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CaseError {
    /// No conversion is defined between the two styles
    #[error("unsupported case conversion: {from} -> {to}")]
    UnsupportedConversion { from: Capitalisation, to: Capitalisation },
}

impl From<CaseError> for crate::Error {
    fn from(err: CaseError) -> Self {
        crate::Error::Case(err)
    }
}

/// Capitalisation style of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capitalisation {
    /// kebab-case
    Kebab,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// UPPER_SNAKE_CASE
    UpperSnake,
    /// all lowercase, single word
    Lower,
    /// ALL UPPERCASE, single word
    Upper,
    /// Anything else
    Unknown,
}

impl fmt::Display for Capitalisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capitalisation::Kebab => "kebab-case",
            Capitalisation::Camel => "camelCase",
            Capitalisation::Pascal => "PascalCase",
            Capitalisation::Snake => "snake_case",
            Capitalisation::UpperSnake => "UPPER_SNAKE_CASE",
            Capitalisation::Lower => "lowercase",
            Capitalisation::Upper => "UPPERCASE",
            Capitalisation::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

impl Capitalisation {
    /// Detects the capitalisation style of a string syntactically.
    ///
    /// Single lowercase words report as [`Capitalisation::Lower`], never as
    /// one-segment kebab or camel, so they get no alias treatment.
    pub fn detect(s: &str) -> Self {
        if s.is_empty() {
            return Capitalisation::Unknown;
        }

        let lower_words = |sep: char| {
            s.split(sep)
                .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
        };

        if lower_words('-') {
            return if s.contains('-') {
                Capitalisation::Kebab
            } else {
                Capitalisation::Lower
            };
        }
        if s.contains('_') {
            if s.split('_').all(|w| {
                !w.is_empty()
                    && w.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                    && w.starts_with(|c: char| c.is_ascii_lowercase())
            }) {
                return Capitalisation::Snake;
            }
            if s.split('_').all(|w| {
                !w.is_empty()
                    && w.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
                    && w.starts_with(|c: char| c.is_ascii_uppercase())
            }) {
                return Capitalisation::UpperSnake;
            }
            return Capitalisation::Unknown;
        }
        if s.chars().all(|c| c.is_ascii_uppercase()) {
            return Capitalisation::Upper;
        }
        if s.chars().all(|c| c.is_ascii_alphanumeric()) {
            let starts_lower = s.starts_with(|c: char| c.is_ascii_lowercase());
            let starts_upper = s.starts_with(|c: char| c.is_ascii_uppercase());
            if starts_lower {
                return Capitalisation::Camel;
            }
            if starts_upper {
                return Capitalisation::Pascal;
            }
        }
        Capitalisation::Unknown
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins delimiter-separated words into camelCase
fn delimited_to_camel(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.trim_matches(sep).to_ascii_lowercase().chars() {
        if c == sep {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Splits on uppercase boundaries, joining with the given delimiter
fn camel_to_delimited(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in lower_first(s).chars() {
        if c.is_ascii_uppercase() {
            out.push(sep);
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a kebab-case string to camelCase
pub fn kebab_to_camel(s: &str) -> String {
    delimited_to_camel(s, '-')
}

/// Converts a kebab-case string to PascalCase
pub fn kebab_to_pascal(s: &str) -> String {
    upper_first(&kebab_to_camel(s))
}

/// Converts a camelCase string to kebab-case
pub fn camel_to_kebab(s: &str) -> String {
    camel_to_delimited(s, '-')
}

/// Converts a PascalCase string to kebab-case
pub fn pascal_to_kebab(s: &str) -> String {
    camel_to_delimited(s, '-')
}

/// Converts a snake_case string to camelCase
pub fn snake_to_camel(s: &str) -> String {
    delimited_to_camel(s, '_')
}

/// Converts a snake_case string to PascalCase
pub fn snake_to_pascal(s: &str) -> String {
    upper_first(&snake_to_camel(s))
}

/// Converts a camelCase string to snake_case
pub fn camel_to_snake(s: &str) -> String {
    camel_to_delimited(s, '_')
}

/// Converts a PascalCase string to snake_case
pub fn pascal_to_snake(s: &str) -> String {
    camel_to_delimited(s, '_')
}

/// Converts a string between two capitalisation styles.
///
/// Only the kebab/camel/Pascal/snake styles convert; any other pair fails
/// with [`CaseError::UnsupportedConversion`].
pub fn convert(
    s: &str,
    from: Capitalisation,
    to: Capitalisation,
) -> Result<String, CaseError> {
    use Capitalisation::{Camel, Kebab, Pascal, Snake};

    if from == to {
        return Ok(s.to_string());
    }
    match (from, to) {
        (Kebab, Camel) => Ok(kebab_to_camel(s)),
        (Kebab, Pascal) => Ok(kebab_to_pascal(s)),
        (Kebab, Snake) => Ok(camel_to_snake(&kebab_to_camel(s))),
        (Snake, Camel) => Ok(snake_to_camel(s)),
        (Snake, Pascal) => Ok(snake_to_pascal(s)),
        (Snake, Kebab) => Ok(camel_to_kebab(&snake_to_camel(s))),
        (Camel, Kebab) => Ok(camel_to_kebab(s)),
        (Camel, Snake) => Ok(camel_to_snake(s)),
        (Camel, Pascal) => Ok(upper_first(s)),
        (Pascal, Kebab) => Ok(pascal_to_kebab(s)),
        (Pascal, Snake) => Ok(pascal_to_snake(s)),
        (Pascal, Camel) => Ok(lower_first(s)),
        _ => Err(CaseError::UnsupportedConversion { from, to }),
    }
}

/// Kebab-case alias for a conventionally-cased key.
///
/// Returns the kebab form when the key is syntactically camelCase or
/// PascalCase, `None` for everything else. This is the helper behind the
/// container's lookup fallback and write-time aliasing.
pub fn kebab_alias(key: &str) -> Option<String> {
    match Capitalisation::detect(key) {
        Capitalisation::Camel => Some(camel_to_kebab(key)),
        Capitalisation::Pascal => Some(pascal_to_kebab(key)),
        _ => None,
    }
}
