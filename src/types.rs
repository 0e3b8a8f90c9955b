// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core option types for display-name resolution
//!
//! Each enum has a closed set of variants and a fixed option token used both
//! when parsing construction options and when rendering the resolved-options
//! snapshot, so a snapshot fed back into construction resolves identically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of identifier being named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Language,
    Region,
    Script,
    Currency,
}

impl DisplayType {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayType::Language => "language",
            DisplayType::Region => "region",
            DisplayType::Script => "script",
            DisplayType::Currency => "currency",
        }
    }

    /// Parse an option token. Case-sensitive, like every option token.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "language" => Some(DisplayType::Language),
            "region" => Some(DisplayType::Region),
            "script" => Some(DisplayType::Script),
            "currency" => Some(DisplayType::Currency),
            _ => None,
        }
    }

    pub fn all() -> &'static [DisplayType] {
        &[
            DisplayType::Language,
            DisplayType::Region,
            DisplayType::Script,
            DisplayType::Currency,
        ]
    }

    /// Human description of the code shape accepted for this type.
    pub fn expected_shape(self) -> &'static str {
        match self {
            DisplayType::Language => "a structurally valid language tag",
            DisplayType::Region => "a region subtag of 2 letters or 3 digits",
            DisplayType::Script => "a script subtag of 4 letters",
            DisplayType::Currency => "a currency code of 3 letters",
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbosity of the rendered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayStyle {
    #[default]
    Short,
    Full,
}

impl DisplayStyle {
    /// Tokens accepted for the `style` option.
    pub const TOKENS: &'static [&'static str] = &["long", "short", "narrow"];

    /// Two-bucket mapping: only `"long"` selects the full form.
    pub fn from_request(requested: Option<&str>) -> Self {
        match requested {
            Some("long") => DisplayStyle::Full,
            _ => DisplayStyle::Short,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            DisplayStyle::Full => "long",
            DisplayStyle::Short => "short",
        }
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// What to return when the locale data has no name for a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fallback {
    /// Return a best-effort string (the canonical code).
    #[default]
    Substitute,
    /// Report the name as absent.
    NoSubstitute,
}

impl Fallback {
    /// Tokens accepted for the `fallback` option.
    pub const TOKENS: &'static [&'static str] = &["code", "none"];

    pub fn from_request(requested: Option<&str>) -> Self {
        match requested {
            Some("none") => Fallback::NoSubstitute,
            _ => Fallback::Substitute,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Fallback::Substitute => "code",
            Fallback::NoSubstitute => "none",
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_type_tokens_roundtrip() {
        for ty in DisplayType::all() {
            assert_eq!(DisplayType::parse(ty.as_str()), Some(*ty));
        }
        assert_eq!(DisplayType::parse("Region"), None);
        assert_eq!(DisplayType::parse("calendar"), None);
    }

    #[test]
    fn style_maps_to_two_buckets() {
        assert_eq!(DisplayStyle::from_request(Some("long")), DisplayStyle::Full);
        assert_eq!(DisplayStyle::from_request(Some("short")), DisplayStyle::Short);
        assert_eq!(DisplayStyle::from_request(Some("narrow")), DisplayStyle::Short);
        assert_eq!(DisplayStyle::from_request(None), DisplayStyle::Short);
    }

    #[test]
    fn fallback_maps_to_two_buckets() {
        assert_eq!(Fallback::from_request(Some("none")), Fallback::NoSubstitute);
        assert_eq!(Fallback::from_request(Some("code")), Fallback::Substitute);
        assert_eq!(Fallback::from_request(None), Fallback::Substitute);
    }

    #[test]
    fn snapshot_tokens_parse_back_to_same_variant() {
        for style in [DisplayStyle::Short, DisplayStyle::Full] {
            assert_eq!(DisplayStyle::from_request(Some(style.as_token())), style);
            assert!(DisplayStyle::TOKENS.contains(&style.as_token()));
        }
        for fallback in [Fallback::Substitute, Fallback::NoSubstitute] {
            assert_eq!(Fallback::from_request(Some(fallback.as_token())), fallback);
            assert!(Fallback::TOKENS.contains(&fallback.as_token()));
        }
    }

    #[test]
    fn style_and_fallback_render_as_option_tokens() {
        assert_eq!(DisplayStyle::Full.to_string(), "long");
        assert_eq!(DisplayStyle::default().to_string(), "short");
        assert_eq!(Fallback::default().to_string(), "code");
        assert_eq!(Fallback::NoSubstitute.to_string(), "none");
    }
}
