//! # String utilities
//!
//! Small string helpers shared by the DTO and service layers.

use serde::Deserialize;

/// Canonical form of an email address for storage and lookup.
///
/// Trims surrounding whitespace and lowercases the whole address, so
/// `" A@B.com "` and `"a@b.com"` are the same account.
///
/// # Examples
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_email;
///
/// assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
/// ```
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trims surrounding whitespace.
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// serde deserializer accepting a string, a JSON number or `null`.
///
/// HTML forms submit numbers as text while API clients usually send real
/// numbers; both end up as the same textual value so the rule interpreter can
/// judge them identically. Used with
/// `#[serde(default, deserialize_with = "deserialize_string_or_number")]`.
///
/// ```rust,ignore
/// // {"edad": 30}    -> Some("30")
/// // {"edad": "30"}  -> Some("30")
/// // {"edad": null}  -> None
/// ```
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Integer(number) => number.to_string(),
        StringOrNumber::Float(number) => number.to_string(),
    }))
}
