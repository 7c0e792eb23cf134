use anyhow::{Result, anyhow};
use isolang::Language;

/// Locale utilities for expected-language handling
///
/// Locales arrive as codes like `en-US`: an ISO 639 primary subtag,
/// optionally followed by region subtags. Only the primary subtag is
/// inspected here; locale comparison in the validation layer is exact
/// string equality.
/// Extract the primary language subtag from a locale code
pub fn primary_subtag(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// Validate that a locale carries a known ISO 639-1 or ISO 639-3 primary subtag
pub fn validate_locale(locale: &str) -> Result<()> {
    let subtag = primary_subtag(locale).trim().to_lowercase();

    let known = match subtag.len() {
        2 => Language::from_639_1(&subtag).is_some(),
        3 => Language::from_639_3(&subtag).is_some(),
        _ => false,
    };

    if known {
        Ok(())
    } else {
        Err(anyhow!("Invalid locale code: {}", locale))
    }
}

/// English display name for a locale's language, for operator-facing logs
pub fn get_language_name(locale: &str) -> Result<String> {
    let subtag = primary_subtag(locale).trim().to_lowercase();

    let language = match subtag.len() {
        2 => Language::from_639_1(&subtag),
        3 => Language::from_639_3(&subtag),
        _ => None,
    };

    language
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language for locale: {}", locale))
}
