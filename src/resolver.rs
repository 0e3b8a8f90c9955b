// SPDX-License-Identifier: PMPL-1.0-or-later

//! The display-names resolver.
//!
//! A [`DisplayNamesResolver`] is built once from a requested locale list and
//! an option bag, and is read-only afterwards:
//!
//! - [`DisplayNamesResolver::of`] validates a code against the resolver's
//!   display type and renders its name, or reports it absent;
//! - [`DisplayNamesResolver::resolved_options`] returns a fresh snapshot of
//!   the effective configuration.

use crate::error::{Error, Result};
use crate::locale::{self, subtags};
use crate::options::DisplayNamesOptions;
use crate::provider::{LocaleDataProvider, NameLookup, CURRENCY_KEY};
use crate::types::{DisplayStyle, DisplayType, Fallback};
use icu_locid::{LanguageIdentifier, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effective configuration of one resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNamesConfig {
    locale: LanguageIdentifier,
    style: DisplayStyle,
    display_type: DisplayType,
    fallback: Fallback,
}

impl DisplayNamesConfig {
    /// Resolve the configuration for an already canonicalized request.
    ///
    /// `requested_style` and `requested_fallback` are mapped onto two buckets
    /// each (`"long"` vs anything else, `"none"` vs anything else); token
    /// validation happens earlier, in [`DisplayNamesOptions::validate`].
    /// The default locale counts as available during negotiation, so a
    /// resolved locale fed back as the only candidate resolves to itself.
    /// The resulting locale has no extensions and is never `und`.
    pub fn resolve(
        provider: &dyn LocaleDataProvider,
        candidates: &[Locale],
        requested_style: Option<&str>,
        display_type: DisplayType,
        requested_fallback: Option<&str>,
        default_locale: &Locale,
    ) -> Self {
        let mut default_id = locale::strip_extensions(default_locale).id;
        if default_id == LanguageIdentifier::UND {
            tracing::warn!(
                fallback = locale::FALLBACK_LOCALE,
                "default locale is the root locale, using the fallback locale"
            );
            default_id = locale::fallback_locale().id;
        }

        let selected = provider.select_locale(candidates, &default_id);
        let mut stripped = locale::strip_extensions(&selected);
        if locale::is_root(&stripped) {
            tracing::debug!(
                default = %default_id,
                "no requested locale is available, using the default locale"
            );
            stripped = Locale::from(default_id);
        }

        DisplayNamesConfig {
            locale: stripped.id,
            style: DisplayStyle::from_request(requested_style),
            display_type,
            fallback: Fallback::from_request(requested_fallback),
        }
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    pub fn style(&self) -> DisplayStyle {
        self.style
    }

    pub fn display_type(&self) -> DisplayType {
        self.display_type
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }
}

/// Snapshot returned by [`DisplayNamesResolver::resolved_options`].
///
/// Field order is the snapshot order (`locale`, `style`, `type`,
/// `fallback`), for both [`ResolvedOptions::entries`] and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub locale: String,
    pub style: String,
    #[serde(rename = "type")]
    pub display_type: String,
    pub fallback: String,
}

impl ResolvedOptions {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("locale", self.locale.as_str()),
            ("style", self.style.as_str()),
            ("type", self.display_type.as_str()),
            ("fallback", self.fallback.as_str()),
        ]
    }
}

pub struct DisplayNamesResolver {
    config: DisplayNamesConfig,
    lookup: Box<dyn NameLookup>,
}

impl DisplayNamesResolver {
    /// Build a resolver.
    ///
    /// Fails with a range error when a requested locale is malformed, and
    /// with a type error when `type` is missing or an option has an
    /// unsupported value. The lookup handle is created exactly once.
    ///
    /// # Examples
    /// ```
    /// use display_names::{DisplayNamesOptions, DisplayNamesResolver, EmbeddedProvider};
    ///
    /// let resolver = DisplayNamesResolver::new(
    ///     &EmbeddedProvider,
    ///     &["fr"],
    ///     &DisplayNamesOptions::new("region"),
    ///     &icu_locid::locale!("en"),
    /// )
    /// .unwrap();
    /// assert_eq!(resolver.of("US").unwrap().as_deref(), Some("États-Unis"));
    /// ```
    pub fn new<S: AsRef<str>>(
        provider: &dyn LocaleDataProvider,
        candidates: &[S],
        options: &DisplayNamesOptions,
        default_locale: &Locale,
    ) -> Result<Self> {
        let requested = locale::canonicalize_locale_list(candidates)?;
        let display_type = options.validate()?;
        let config = DisplayNamesConfig::resolve(
            provider,
            &requested,
            options.style.as_deref(),
            display_type,
            options.fallback.as_deref(),
            default_locale,
        );
        let lookup = provider.create_lookup(&config.locale, config.style, config.fallback);
        tracing::debug!(
            locale = %config.locale,
            style = %config.style,
            display_type = %config.display_type,
            fallback = %config.fallback,
            "display names resolved"
        );
        Ok(DisplayNamesResolver { config, lookup })
    }

    /// The requested locales the provider can serve, in request order and
    /// with their extensions kept.
    pub fn supported_locales_of<S: AsRef<str>>(
        provider: &dyn LocaleDataProvider,
        candidates: &[S],
    ) -> Result<Vec<String>> {
        let requested = locale::canonicalize_locale_list(candidates)?;
        let available = provider.available_locales();
        Ok(requested
            .iter()
            .filter(|candidate| locale::best_available_locale(&available, &candidate.id).is_some())
            .map(locale::to_language_tag)
            .collect())
    }

    pub fn config(&self) -> &DisplayNamesConfig {
        &self.config
    }

    /// Display name of `code`.
    ///
    /// `Ok(None)` means the name is unknown and the fallback is `"none"`;
    /// with the default fallback a non-empty string is always returned for
    /// a well-formed code.
    pub fn of(&self, code: &str) -> Result<Option<String>> {
        let display_type = self.config.display_type;
        let (canonical, name) = match display_type {
            DisplayType::Language => {
                let tag = subtags::canonical_language_tag(code)
                    .ok_or_else(|| Error::invalid_code(display_type, code))?;
                let name = self.lookup.language_name(&tag);
                (tag, name)
            }
            DisplayType::Region => {
                let region = subtags::canonical_region(code)
                    .ok_or_else(|| Error::invalid_code(display_type, code))?;
                let name = self.lookup.region_name(&region);
                (region, name)
            }
            DisplayType::Script => {
                let script = subtags::canonical_script(code)
                    .ok_or_else(|| Error::invalid_code(display_type, code))?;
                let name = self.lookup.script_name(&script);
                (script, name)
            }
            DisplayType::Currency => {
                let currency = subtags::canonical_currency(code)
                    .ok_or_else(|| Error::invalid_code(display_type, code))?;
                let name = self.lookup.key_value_name(CURRENCY_KEY, &currency);
                (currency, name)
            }
        };
        tracing::trace!(code = code, canonical = %canonical, found = name.is_some(), "display name lookup");

        let name = name.filter(|name| !name.is_empty());
        Ok(match self.config.fallback {
            Fallback::Substitute => Some(name.unwrap_or(canonical)),
            Fallback::NoSubstitute => name,
        })
    }

    /// Fresh snapshot of the effective configuration.
    pub fn resolved_options(&self) -> ResolvedOptions {
        ResolvedOptions {
            locale: self.config.locale.to_string(),
            style: self.config.style.as_token().to_string(),
            display_type: self.config.display_type.as_str().to_string(),
            fallback: self.config.fallback.as_token().to_string(),
        }
    }
}

impl fmt::Debug for DisplayNamesResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayNamesResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
