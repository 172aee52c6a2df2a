//! Delimited token lists as they appear in the catalog data.
//!
//! Cooler socket lists and case form-factor lists are stored as free text such as
//! `"LGA1700/AM4/AM5"` or `"ATX, Micro-ATX"`. Both separators occur in the data.

const SEPARATORS: [char; 2] = [',', '/'];

/// Split on `,` or `/`, trimming whitespace and dropping empty tokens.
pub fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(&SEPARATORS[..])
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
