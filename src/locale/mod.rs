// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale handling for display-name resolution.
//!
//! Covers the steps that happen before any name is rendered:
//!
//! 1. **Canonicalize** the requested locale list (reject malformed tags,
//!    normalize case, drop duplicates).
//! 2. **Negotiate** against the locales the data provider offers, using the
//!    lookup matcher: each candidate is truncated from the right until it
//!    names an available locale.
//! 3. **Strip** extension subtags and replace a root (`und`) result with the
//!    environment default.
//!
//! The default locale is never read implicitly; callers obtain it from
//! [`environment_default_locale`] (or anywhere else) and pass it in.

pub mod subtags;

use crate::error::{Error, Result};
use icu_locid::{LanguageIdentifier, Locale};
use std::env;

/// Locale used when neither negotiation nor the environment yields one.
pub const FALLBACK_LOCALE: &str = "en";

/// Environment variables consulted for the default locale, in priority order.
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Parse one locale tag the way requested locales are parsed.
///
/// Malformed tags, including `_`-separated ones, are a range error.
pub fn parse_locale_tag(raw: &str) -> Result<Locale> {
    subtags::parse_locale(raw).ok_or_else(|| Error::InvalidLocale {
        tag: raw.to_string(),
    })
}

/// Parse and deduplicate a requested locale list.
///
/// Order is preserved; a tag that appears twice (after case normalization)
/// is kept at its first position only.
pub fn canonicalize_locale_list<S: AsRef<str>>(candidates: &[S]) -> Result<Vec<Locale>> {
    let mut seen: Vec<String> = Vec::with_capacity(candidates.len());
    let mut out = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let locale = parse_locale_tag(candidate.as_ref())?;
        let tag = locale.to_string();
        if !seen.contains(&tag) {
            seen.push(tag);
            out.push(locale);
        }
    }
    Ok(out)
}

/// Longest available prefix of `candidate`, ignoring its extensions.
///
/// Returns the matching entry of `available`, or `None` once truncation runs
/// out of subtags.
pub fn best_available_locale(
    available: &[LanguageIdentifier],
    candidate: &LanguageIdentifier,
) -> Option<LanguageIdentifier> {
    let mut tag = candidate.to_string();
    loop {
        if let Some(found) = available.iter().find(|id| id.to_string() == tag) {
            return Some(found.clone());
        }
        let cut = tag.rfind('-')?;
        tag.truncate(cut);
    }
}

/// Lookup matcher over an already canonical candidate list.
///
/// The matched locale keeps the candidate's extensions; nothing matching
/// yields `und`.
pub fn lookup_matcher(available: &[LanguageIdentifier], candidates: &[Locale]) -> Locale {
    for candidate in candidates {
        if let Some(id) = best_available_locale(available, &candidate.id) {
            return Locale {
                id,
                extensions: candidate.extensions.clone(),
            };
        }
    }
    Locale::UND
}

pub fn strip_extensions(locale: &Locale) -> Locale {
    Locale::from(locale.id.clone())
}

/// True for the root locale, i.e. one whose language tag is `und`.
pub fn is_root(locale: &Locale) -> bool {
    locale.id == LanguageIdentifier::UND
}

pub fn to_language_tag(locale: &Locale) -> String {
    locale.to_string()
}

/// Convert a POSIX locale value (`en_US.UTF-8`, `de_DE@euro`) into a locale.
///
/// Returns `None` for empty values, `C`/`POSIX`, and anything that does not
/// parse once the codeset and modifier are removed.
pub fn normalize_posix_locale(raw: &str) -> Option<Locale> {
    let trimmed = raw.trim();
    let stripped = trimmed.split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() || stripped == "C" || stripped == "POSIX" {
        return None;
    }
    let locale = subtags::parse_locale(&stripped.replace('_', "-"))?;
    if is_root(&locale) {
        None
    } else {
        Some(locale)
    }
}

/// Default locale from an arbitrary variable source.
///
/// Walks [`LOCALE_ENV_VARS`] in order and returns the first usable value,
/// falling back to [`FALLBACK_LOCALE`].
pub fn default_locale_from<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|key| lookup(*key))
        .find_map(|value| normalize_posix_locale(&value))
        .unwrap_or_else(fallback_locale)
}

/// Default locale of the current process environment.
pub fn environment_default_locale() -> Locale {
    default_locale_from(|key| env::var(key).ok())
}

pub(crate) fn fallback_locale() -> Locale {
    icu_locid::locale!("en")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter()
            .map(|tag| tag.parse().expect("valid test locale"))
            .collect()
    }

    fn locales(tags: &[&str]) -> Vec<Locale> {
        canonicalize_locale_list(tags).expect("valid test locales")
    }

    #[test]
    fn canonical_list_dedupes_and_normalizes() {
        let list = locales(&["EN-us", "fr", "en-US", "fr"]);
        let tags: Vec<String> = list.iter().map(to_language_tag).collect();
        assert_eq!(tags, vec!["en-US", "fr"]);
    }

    #[test]
    fn canonical_list_rejects_malformed_tags() {
        let err = canonicalize_locale_list(&["fr", "en_US"]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLocale {
                tag: "en_US".to_string()
            }
        );
        assert!(canonicalize_locale_list(&[""]).is_err());
        assert!(canonicalize_locale_list::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn best_available_truncates() {
        let available = ids(&["en", "fr", "fr-CA"]);
        let pick = |tag: &str| {
            best_available_locale(&available, &tag.parse().unwrap()).map(|id| id.to_string())
        };
        assert_eq!(pick("fr-CA").as_deref(), Some("fr-CA"));
        assert_eq!(pick("fr-BE").as_deref(), Some("fr"));
        assert_eq!(pick("en-Latn-US-posix").as_deref(), Some("en"));
        assert_eq!(pick("de-DE"), None);
        assert_eq!(pick("fr-CA-1996").as_deref(), Some("fr-CA"));
        assert_eq!(pick("fr-Latn-1996").as_deref(), Some("fr"));
    }

    #[test]
    fn single_tags_parse_like_list_entries() {
        assert_eq!(
            to_language_tag(&parse_locale_tag("ja-JP-u-ca-japanese").unwrap()),
            "ja-JP-u-ca-japanese"
        );
        for raw in ["ja_JP", "", "not a locale"] {
            assert_eq!(
                parse_locale_tag(raw),
                Err(Error::InvalidLocale {
                    tag: raw.to_string()
                })
            );
            assert!(canonicalize_locale_list(&[raw]).is_err());
        }
    }

    #[test]
    fn lookup_matcher_keeps_extensions_and_order() {
        let available = ids(&["de", "fr"]);
        let chosen = lookup_matcher(&available, &locales(&["it", "fr-FR-u-nu-latn", "de"]));
        assert_eq!(to_language_tag(&chosen), "fr-u-nu-latn");
        assert_eq!(to_language_tag(&strip_extensions(&chosen)), "fr");
    }

    #[test]
    fn lookup_matcher_without_match_is_root() {
        let available = ids(&["de"]);
        assert!(is_root(&lookup_matcher(&available, &locales(&["ja"]))));
        assert!(is_root(&lookup_matcher(&available, &[])));
        assert!(!is_root(&lookup_matcher(&available, &locales(&["de-AT"]))));
    }

    #[test]
    fn posix_values_normalize() {
        let tag = |raw: &str| normalize_posix_locale(raw).map(|l| to_language_tag(&l));
        assert_eq!(tag("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(tag("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(tag("ja").as_deref(), Some("ja"));
        assert_eq!(tag("C"), None);
        assert_eq!(tag("POSIX"), None);
        assert_eq!(tag(""), None);
        assert_eq!(tag("!!"), None);
    }

    #[test]
    fn default_locale_walks_variables_in_order() {
        let vars = |key: &str| match key {
            "LC_ALL" => Some("C".to_string()),
            "LANG" => Some("fr_CA.UTF-8".to_string()),
            _ => None,
        };
        assert_eq!(to_language_tag(&default_locale_from(vars)), "fr-CA");
        assert_eq!(to_language_tag(&default_locale_from(|_| None)), "en");
    }
}
