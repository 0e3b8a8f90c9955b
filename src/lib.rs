// SPDX-License-Identifier: PMPL-1.0-or-later

//! display-names: locale-aware names for language, region, script and
//! currency codes.
//!
//! A [`DisplayNamesResolver`] is configured once (requested locales, display
//! type, style, fallback policy) and then turns codes such as `"US"`,
//! `"Latn"`, `"EUR"` or `"fr-CA"` into names in the resolved locale.
//!
//! BUILDING BLOCKS:
//! 1. **Locale**: canonicalizes requested locale lists, negotiates them
//!    against the available data and falls back to the default locale.
//! 2. **Options**: validates the option bag and maps it onto the typed
//!    configuration; option bags may come from JSON/YAML files.
//! 3. **Provider**: the locale-data seam. [`EmbeddedProvider`] ships
//!    compile-time CLDR tables for a handful of locales.
//! 4. **Resolver**: per-type code validation, lookup dispatch, fallback
//!    policy and the resolved-options snapshot.

pub mod error;
pub mod locale;
pub mod options;
pub mod provider;
pub mod resolver;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use options::{DisplayNamesOptions, OptionsFormat};
pub use provider::{EmbeddedProvider, LocaleDataProvider, NameLookup};
pub use resolver::{DisplayNamesConfig, DisplayNamesResolver, ResolvedOptions};
pub use types::{DisplayStyle, DisplayType, Fallback};
