//! Heuristic field extraction used when the LLM is unavailable.
//!
//! Deliberately shallow: a name from the first line, the first email-looking token,
//! the first phone-looking line. Nothing else is inferred.

use crate::models::resume::ParsedFields;

/// Best-effort extraction of contact fields from raw resume text.
///
/// Returns `None` when the text has no non-blank line to work from.
pub fn heuristic_fields(text: &str, placeholder_skills: &[String]) -> Option<ParsedFields> {
    // Extracted text often opens with blank lines, so "first line" means first non-blank.
    // No such line means nothing to work from: no placeholder skills either.
    let name = text.lines().map(str::trim).find(|line| !line.is_empty())?;

    Some(ParsedFields {
        name: name.to_string(),
        email: find_email(text).unwrap_or_default().to_string(),
        phone: find_phone(text).unwrap_or_default().to_string(),
        skills: placeholder_skills.to_vec(),
        ..ParsedFields::default()
    })
}

/// First whitespace-delimited token containing both `@` and `.`.
fn find_email(text: &str) -> Option<&str> {
    text.lines()
        .flat_map(str::split_whitespace)
        .find(|token| token.contains('@') && token.contains('.'))
}

/// First line containing a digit and either `-` or `(`.
fn find_phone(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .find(|line| {
            line.chars().any(|c| c.is_ascii_digit()) && (line.contains('-') || line.contains('('))
        })
}
