// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structural validation for the codes a resolver can name.
//!
//! Each check accepts a code in any letter case and returns it in canonical
//! case (`us` → `US`, `latn` → `Latn`, `usd` → `USD`, `EN-us` → `en-US`), or
//! `None` when the code does not have the required shape. Whether the code is
//! actually *known* is a question for the locale data, not for these checks.
//!
//! Reference: <https://www.unicode.org/reports/tr35/#Unicode_language_identifier>

use icu_locid::subtags::{Region, Script};
use icu_locid::{LanguageIdentifier, Locale};

/// Validates a Unicode language identifier (`language[-script][-region](-variant)*`).
///
/// Extensions and private-use subtags are rejected, as is the POSIX `_`
/// separator which the underlying parser would otherwise tolerate.
///
/// # Examples
/// ```
/// use display_names::locale::subtags::canonical_language_tag;
/// assert_eq!(canonical_language_tag("EN-us").as_deref(), Some("en-US"));
/// assert_eq!(canonical_language_tag("zh-hant-tw").as_deref(), Some("zh-Hant-TW"));
/// assert_eq!(canonical_language_tag("!!"), None);
/// assert_eq!(canonical_language_tag("en_US"), None);
/// ```
pub fn canonical_language_tag(code: &str) -> Option<String> {
    if !is_hyphen_separated(code) {
        return None;
    }
    code.parse::<LanguageIdentifier>()
        .ok()
        .map(|id| id.to_string())
}

/// Validates a region subtag: two ASCII letters or three ASCII digits.
pub fn canonical_region(code: &str) -> Option<String> {
    code.parse::<Region>()
        .ok()
        .map(|region| region.as_str().to_string())
}

/// Validates a script subtag: four ASCII letters.
pub fn canonical_script(code: &str) -> Option<String> {
    code.parse::<Script>()
        .ok()
        .map(|script| script.as_str().to_string())
}

/// Validates an ISO 4217 shaped currency code: three ASCII letters.
///
/// # Examples
/// ```
/// use display_names::locale::subtags::canonical_currency;
/// assert_eq!(canonical_currency("eur").as_deref(), Some("EUR"));
/// assert_eq!(canonical_currency("US"), None);
/// ```
pub fn canonical_currency(code: &str) -> Option<String> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

/// Validates a full Unicode locale identifier, extensions included.
///
/// Used for requested locale lists, where `-u-` keywords and the like are
/// legal even though they are stripped before names are rendered.
pub fn parse_locale(tag: &str) -> Option<Locale> {
    if !is_hyphen_separated(tag) {
        return None;
    }
    tag.parse::<Locale>().ok()
}

fn is_hyphen_separated(tag: &str) -> bool {
    !tag.is_empty() && !tag.contains('_')
}
