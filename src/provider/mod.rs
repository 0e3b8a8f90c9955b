// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale data providers.
//!
//! A [`LocaleDataProvider`] knows which locales it has data for and builds a
//! [`NameLookup`] for one `(locale, style, fallback)` context. The resolver
//! only talks to these traits; [`EmbeddedProvider`] is the built-in
//! implementation backed by compile-time tables.
//!
//! Lookups receive codes that have already been validated and put in
//! canonical case, so implementations never need to re-check their shape.

mod catalog;

pub use catalog::EmbeddedProvider;

use crate::locale;
use crate::types::{DisplayStyle, Fallback};
use icu_locid::{LanguageIdentifier, Locale};

/// Key passed to [`NameLookup::key_value_name`] for currency codes.
pub const CURRENCY_KEY: &str = "currency";

/// Renders display names for one locale, style and fallback context.
///
/// Handles are shared across threads by the resolver, hence `Send + Sync`.
/// Every method returns `None` when the data has no name for the code; with
/// [`Fallback::Substitute`] an implementation should return a non-empty
/// best-effort string instead.
pub trait NameLookup: Send + Sync {
    fn language_name(&self, tag: &str) -> Option<String>;

    fn region_name(&self, subtag: &str) -> Option<String>;

    fn script_name(&self, subtag: &str) -> Option<String>;

    /// Generic keyword lookup; `key` is e.g. [`CURRENCY_KEY`].
    fn key_value_name(&self, key: &str, value: &str) -> Option<String>;
}

pub trait LocaleDataProvider: Send + Sync {
    /// Locales this provider has data for.
    fn available_locales(&self) -> Vec<LanguageIdentifier>;

    /// Pick the locale to use for a canonicalized request list.
    ///
    /// The default is the lookup matcher over [`available_locales`] plus
    /// `default_locale`, which is always servable (see
    /// [`locale::lookup_matcher`]). An empty result is `und`.
    ///
    /// [`available_locales`]: LocaleDataProvider::available_locales
    fn select_locale(
        &self,
        candidates: &[Locale],
        default_locale: &LanguageIdentifier,
    ) -> Locale {
        let mut available = self.available_locales();
        if !available.contains(default_locale) {
            available.push(default_locale.clone());
        }
        locale::lookup_matcher(&available, candidates)
    }

    /// Build the lookup handle for a resolved configuration.
    ///
    /// Called once per resolver, with a locale that is never `und`.
    fn create_lookup(
        &self,
        locale: &LanguageIdentifier,
        style: DisplayStyle,
        fallback: Fallback,
    ) -> Box<dyn NameLookup>;
}
