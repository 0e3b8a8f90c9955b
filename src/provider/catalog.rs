// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded display-name catalog.
//!
//! Names for a handful of locales, taken from CLDR and embedded as
//! compile-time static tables. Lookup is O(n) on the entries of one table,
//! which is fine for the few dozen codes each table holds.
//!
//! ## Adding a locale
//!
//! 1. Create a `const XX: LocaleData` below with the same keys as `EN`
//! 2. Add `"xx" => &XX` to `data_for()`
//! 3. Add the locale (and any regional variants sharing its tables) to
//!    `AVAILABLE`
//!
//! ## Adding a code
//!
//! Add the entry to `EN` first, then to every other locale; the key-parity
//! test below fails until all tables agree.

use super::{LocaleDataProvider, NameLookup, CURRENCY_KEY};
use crate::types::{DisplayStyle, Fallback};
use icu_locid::LanguageIdentifier;

type Table = &'static [(&'static str, &'static str)];

/// Locales served by [`EmbeddedProvider`]. Regional variants share the
/// tables of their language.
const AVAILABLE: &[&str] = &["de", "en", "en-GB", "en-US", "es", "fr", "fr-CA", "ja"];

/// Provider backed by the static tables in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedProvider;

impl LocaleDataProvider for EmbeddedProvider {
    fn available_locales(&self) -> Vec<LanguageIdentifier> {
        AVAILABLE
            .iter()
            .filter_map(|tag| tag.parse().ok())
            .collect()
    }

    fn create_lookup(
        &self,
        locale: &LanguageIdentifier,
        style: DisplayStyle,
        fallback: Fallback,
    ) -> Box<dyn NameLookup> {
        tracing::debug!(
            locale = %locale,
            style = %style,
            fallback = %fallback,
            "loading embedded display-name tables"
        );
        Box::new(EmbeddedLookup {
            data: data_for(locale.language.as_str()),
            style,
            fallback,
        })
    }
}

struct EmbeddedLookup {
    data: &'static LocaleData,
    style: DisplayStyle,
    fallback: Fallback,
}

impl EmbeddedLookup {
    /// Short-style overrides win when the style is short.
    fn pick(&self, long: Table, short: Table, key: &str) -> Option<&'static str> {
        if self.style == DisplayStyle::Short {
            if let Some(value) = lookup(short, key) {
                return Some(value);
            }
        }
        lookup(long, key)
    }

    fn language(&self, key: &str) -> Option<&'static str> {
        self.pick(self.data.languages, self.data.languages_short, key)
    }

    fn region(&self, key: &str) -> Option<&'static str> {
        self.pick(self.data.regions, self.data.regions_short, key)
    }

    fn or_code(&self, found: Option<String>, code: &str) -> Option<String> {
        match (found, self.fallback) {
            (Some(name), _) => Some(name),
            (None, Fallback::Substitute) => Some(code.to_string()),
            (None, Fallback::NoSubstitute) => None,
        }
    }

    /// Dialect entry if there is one, otherwise `base (qualifiers)`.
    ///
    /// The base is the longest of `lang-Script`, `lang-RR`, `lang` with a
    /// table entry; subtags not consumed by the base become qualifiers.
    /// Without a name for the bare language nothing is composed.
    fn compose_language(&self, tag: &str) -> Option<String> {
        if let Some(name) = self.language(tag) {
            return Some(name.to_string());
        }
        let id: LanguageIdentifier = tag.parse().ok()?;
        let language = id.language.as_str();
        let script = id.script.map(|s| s.as_str().to_string());
        let region = id.region.map(|r| r.as_str().to_string());

        let mut used_script = false;
        let mut used_region = false;
        let base = if let Some(name) = script
            .as_ref()
            .and_then(|s| self.language(&format!("{}-{}", language, s)))
        {
            used_script = true;
            name
        } else if let Some(name) = region
            .as_ref()
            .and_then(|r| self.language(&format!("{}-{}", language, r)))
        {
            used_region = true;
            name
        } else {
            self.language(language)?
        };

        let mut qualifiers: Vec<String> = Vec::new();
        if let Some(script) = script.filter(|_| !used_script) {
            qualifiers.push(
                lookup(self.data.scripts, &script)
                    .map(str::to_string)
                    .unwrap_or(script),
            );
        }
        if let Some(region) = region.filter(|_| !used_region) {
            qualifiers.push(self.region(&region).map(str::to_string).unwrap_or(region));
        }
        qualifiers.extend(id.variants.iter().map(|v| v.as_str().to_ascii_uppercase()));

        if qualifiers.is_empty() {
            return Some(base.to_string());
        }
        let pattern = &self.data.pattern;
        Some(format!(
            "{}{}{}{}",
            base,
            pattern.open,
            qualifiers.join(pattern.separator),
            pattern.close
        ))
    }
}

impl NameLookup for EmbeddedLookup {
    fn language_name(&self, tag: &str) -> Option<String> {
        self.or_code(self.compose_language(tag), tag)
    }

    fn region_name(&self, subtag: &str) -> Option<String> {
        self.or_code(self.region(subtag).map(str::to_string), subtag)
    }

    fn script_name(&self, subtag: &str) -> Option<String> {
        self.or_code(
            lookup(self.data.scripts, subtag).map(str::to_string),
            subtag,
        )
    }

    fn key_value_name(&self, key: &str, value: &str) -> Option<String> {
        let found = if key == CURRENCY_KEY {
            lookup(self.data.currencies, value).map(str::to_string)
        } else {
            None
        };
        self.or_code(found, value)
    }
}

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    for &(k, v) in table {
        if k == key {
            return Some(v);
        }
    }
    None
}

/// Tables for a language; unknown languages use English.
fn data_for(language: &str) -> &'static LocaleData {
    match language {
        "de" => &DE,
        "es" => &ES,
        "fr" => &FR,
        "ja" => &JA,
        _ => &EN,
    }
}

struct LocaleData {
    languages: Table,
    languages_short: Table,
    regions: Table,
    regions_short: Table,
    scripts: Table,
    currencies: Table,
    pattern: NamePattern,
}

/// How qualifiers attach to a base language name: `English (Canada)`.
struct NamePattern {
    open: &'static str,
    separator: &'static str,
    close: &'static str,
}

const LATIN_PATTERN: NamePattern = NamePattern {
    open: " (",
    separator: ", ",
    close: ")",
};

// ─── English ─────────────────────────────────────────────────────────

const EN: LocaleData = LocaleData {
    languages: &[
        ("ar", "Arabic"),
        ("de", "German"),
        ("en", "English"),
        ("en-GB", "British English"),
        ("en-US", "American English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("fr-CA", "Canadian French"),
        ("hi", "Hindi"),
        ("it", "Italian"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("nl", "Dutch"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("zh", "Chinese"),
        ("zh-Hans", "Simplified Chinese"),
        ("zh-Hant", "Traditional Chinese"),
    ],
    languages_short: &[("en-GB", "UK English"), ("en-US", "US English")],
    regions: &[
        ("001", "world"),
        ("419", "Latin America"),
        ("BR", "Brazil"),
        ("CA", "Canada"),
        ("CN", "China"),
        ("DE", "Germany"),
        ("ES", "Spain"),
        ("FR", "France"),
        ("GB", "United Kingdom"),
        ("HK", "Hong Kong SAR China"),
        ("IN", "India"),
        ("IT", "Italy"),
        ("JP", "Japan"),
        ("MX", "Mexico"),
        ("TW", "Taiwan"),
        ("US", "United States"),
    ],
    regions_short: &[("GB", "UK"), ("HK", "Hong Kong"), ("US", "US")],
    scripts: &[
        ("Arab", "Arabic"),
        ("Cyrl", "Cyrillic"),
        ("Grek", "Greek"),
        ("Hans", "Simplified Han"),
        ("Hant", "Traditional Han"),
        ("Hira", "Hiragana"),
        ("Jpan", "Japanese"),
        ("Kana", "Katakana"),
        ("Latn", "Latin"),
    ],
    currencies: &[
        ("CAD", "Canadian Dollar"),
        ("CHF", "Swiss Franc"),
        ("CNY", "Chinese Yuan"),
        ("EUR", "Euro"),
        ("GBP", "British Pound"),
        ("JPY", "Japanese Yen"),
        ("MXN", "Mexican Peso"),
        ("USD", "US Dollar"),
    ],
    pattern: LATIN_PATTERN,
};

// ─── French ──────────────────────────────────────────────────────────

const FR: LocaleData = LocaleData {
    languages: &[
        ("ar", "arabe"),
        ("de", "allemand"),
        ("en", "anglais"),
        ("en-GB", "anglais britannique"),
        ("en-US", "anglais américain"),
        ("es", "espagnol"),
        ("fr", "français"),
        ("fr-CA", "français canadien"),
        ("hi", "hindi"),
        ("it", "italien"),
        ("ja", "japonais"),
        ("ko", "coréen"),
        ("nl", "néerlandais"),
        ("pt", "portugais"),
        ("ru", "russe"),
        ("zh", "chinois"),
        ("zh-Hans", "chinois simplifié"),
        ("zh-Hant", "chinois traditionnel"),
    ],
    languages_short: &[],
    regions: &[
        ("001", "Monde"),
        ("419", "Amérique latine"),
        ("BR", "Brésil"),
        ("CA", "Canada"),
        ("CN", "Chine"),
        ("DE", "Allemagne"),
        ("ES", "Espagne"),
        ("FR", "France"),
        ("GB", "Royaume-Uni"),
        ("HK", "R.A.S. chinoise de Hong Kong"),
        ("IN", "Inde"),
        ("IT", "Italie"),
        ("JP", "Japon"),
        ("MX", "Mexique"),
        ("TW", "Taïwan"),
        ("US", "États-Unis"),
    ],
    regions_short: &[("HK", "Hong Kong")],
    scripts: &[
        ("Arab", "arabe"),
        ("Cyrl", "cyrillique"),
        ("Grek", "grec"),
        ("Hans", "sinogrammes simplifiés"),
        ("Hant", "sinogrammes traditionnels"),
        ("Hira", "hiragana"),
        ("Jpan", "japonais"),
        ("Kana", "katakana"),
        ("Latn", "latin"),
    ],
    currencies: &[
        ("CAD", "dollar canadien"),
        ("CHF", "franc suisse"),
        ("CNY", "yuan renminbi chinois"),
        ("EUR", "euro"),
        ("GBP", "livre sterling"),
        ("JPY", "yen japonais"),
        ("MXN", "peso mexicain"),
        ("USD", "dollar des États-Unis"),
    ],
    pattern: LATIN_PATTERN,
};

// ─── German ──────────────────────────────────────────────────────────

const DE: LocaleData = LocaleData {
    languages: &[
        ("ar", "Arabisch"),
        ("de", "Deutsch"),
        ("en", "Englisch"),
        ("en-GB", "Britisches Englisch"),
        ("en-US", "Amerikanisches Englisch"),
        ("es", "Spanisch"),
        ("fr", "Französisch"),
        ("fr-CA", "Kanadisches Französisch"),
        ("hi", "Hindi"),
        ("it", "Italienisch"),
        ("ja", "Japanisch"),
        ("ko", "Koreanisch"),
        ("nl", "Niederländisch"),
        ("pt", "Portugiesisch"),
        ("ru", "Russisch"),
        ("zh", "Chinesisch"),
        ("zh-Hans", "Chinesisch (vereinfacht)"),
        ("zh-Hant", "Chinesisch (traditionell)"),
    ],
    languages_short: &[],
    regions: &[
        ("001", "Welt"),
        ("419", "Lateinamerika"),
        ("BR", "Brasilien"),
        ("CA", "Kanada"),
        ("CN", "China"),
        ("DE", "Deutschland"),
        ("ES", "Spanien"),
        ("FR", "Frankreich"),
        ("GB", "Vereinigtes Königreich"),
        ("HK", "Sonderverwaltungsregion Hongkong"),
        ("IN", "Indien"),
        ("IT", "Italien"),
        ("JP", "Japan"),
        ("MX", "Mexiko"),
        ("TW", "Taiwan"),
        ("US", "Vereinigte Staaten"),
    ],
    regions_short: &[("HK", "Hongkong"), ("US", "USA")],
    scripts: &[
        ("Arab", "Arabisch"),
        ("Cyrl", "Kyrillisch"),
        ("Grek", "Griechisch"),
        ("Hans", "Vereinfacht"),
        ("Hant", "Traditionell"),
        ("Hira", "Hiragana"),
        ("Jpan", "Japanisch"),
        ("Kana", "Katakana"),
        ("Latn", "Lateinisch"),
    ],
    currencies: &[
        ("CAD", "Kanadischer Dollar"),
        ("CHF", "Schweizer Franken"),
        ("CNY", "Renminbi Yuan"),
        ("EUR", "Euro"),
        ("GBP", "Britisches Pfund"),
        ("JPY", "Japanischer Yen"),
        ("MXN", "Mexikanischer Peso"),
        ("USD", "US-Dollar"),
    ],
    pattern: LATIN_PATTERN,
};

// ─── Spanish ─────────────────────────────────────────────────────────

const ES: LocaleData = LocaleData {
    languages: &[
        ("ar", "árabe"),
        ("de", "alemán"),
        ("en", "inglés"),
        ("en-GB", "inglés británico"),
        ("en-US", "inglés estadounidense"),
        ("es", "español"),
        ("fr", "francés"),
        ("fr-CA", "francés canadiense"),
        ("hi", "hindi"),
        ("it", "italiano"),
        ("ja", "japonés"),
        ("ko", "coreano"),
        ("nl", "neerlandés"),
        ("pt", "portugués"),
        ("ru", "ruso"),
        ("zh", "chino"),
        ("zh-Hans", "chino simplificado"),
        ("zh-Hant", "chino tradicional"),
    ],
    languages_short: &[],
    regions: &[
        ("001", "Mundo"),
        ("419", "Latinoamérica"),
        ("BR", "Brasil"),
        ("CA", "Canadá"),
        ("CN", "China"),
        ("DE", "Alemania"),
        ("ES", "España"),
        ("FR", "Francia"),
        ("GB", "Reino Unido"),
        ("HK", "RAE de Hong Kong (China)"),
        ("IN", "India"),
        ("IT", "Italia"),
        ("JP", "Japón"),
        ("MX", "México"),
        ("TW", "Taiwán"),
        ("US", "Estados Unidos"),
    ],
    regions_short: &[("HK", "Hong Kong"), ("US", "EE. UU.")],
    scripts: &[
        ("Arab", "árabe"),
        ("Cyrl", "cirílico"),
        ("Grek", "griego"),
        ("Hans", "simplificado"),
        ("Hant", "tradicional"),
        ("Hira", "hiragana"),
        ("Jpan", "japonés"),
        ("Kana", "katakana"),
        ("Latn", "latino"),
    ],
    currencies: &[
        ("CAD", "dólar canadiense"),
        ("CHF", "franco suizo"),
        ("CNY", "yuan"),
        ("EUR", "euro"),
        ("GBP", "libra esterlina"),
        ("JPY", "yen"),
        ("MXN", "peso mexicano"),
        ("USD", "dólar estadounidense"),
    ],
    pattern: LATIN_PATTERN,
};

// ─── Japanese ────────────────────────────────────────────────────────

const JA: LocaleData = LocaleData {
    languages: &[
        ("ar", "アラビア語"),
        ("de", "ドイツ語"),
        ("en", "英語"),
        ("en-GB", "イギリス英語"),
        ("en-US", "アメリカ英語"),
        ("es", "スペイン語"),
        ("fr", "フランス語"),
        ("fr-CA", "カナダのフランス語"),
        ("hi", "ヒンディー語"),
        ("it", "イタリア語"),
        ("ja", "日本語"),
        ("ko", "韓国語"),
        ("nl", "オランダ語"),
        ("pt", "ポルトガル語"),
        ("ru", "ロシア語"),
        ("zh", "中国語"),
        ("zh-Hans", "簡体中国語"),
        ("zh-Hant", "繁体中国語"),
    ],
    languages_short: &[],
    regions: &[
        ("001", "世界"),
        ("419", "ラテンアメリカ"),
        ("BR", "ブラジル"),
        ("CA", "カナダ"),
        ("CN", "中国"),
        ("DE", "ドイツ"),
        ("ES", "スペイン"),
        ("FR", "フランス"),
        ("GB", "イギリス"),
        ("HK", "中華人民共和国香港特別行政区"),
        ("IN", "インド"),
        ("IT", "イタリア"),
        ("JP", "日本"),
        ("MX", "メキシコ"),
        ("TW", "台湾"),
        ("US", "アメリカ合衆国"),
    ],
    regions_short: &[("HK", "香港"), ("US", "アメリカ")],
    scripts: &[
        ("Arab", "アラビア文字"),
        ("Cyrl", "キリル文字"),
        ("Grek", "ギリシャ文字"),
        ("Hans", "簡体字"),
        ("Hant", "繁体字"),
        ("Hira", "ひらがな"),
        ("Jpan", "日本語の文字"),
        ("Kana", "カタカナ"),
        ("Latn", "ラテン文字"),
    ],
    currencies: &[
        ("CAD", "カナダ ドル"),
        ("CHF", "スイス フラン"),
        ("CNY", "中国人民元"),
        ("EUR", "ユーロ"),
        ("GBP", "イギリス ポンド"),
        ("JPY", "日本円"),
        ("MXN", "メキシコ ペソ"),
        ("USD", "米ドル"),
    ],
    pattern: NamePattern {
        open: "（",
        separator: "、",
        close: "）",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_for(tag: &str, style: DisplayStyle, fallback: Fallback) -> Box<dyn NameLookup> {
        let locale: LanguageIdentifier = tag.parse().expect("valid test locale");
        EmbeddedProvider.create_lookup(&locale, style, fallback)
    }

    fn keys(table: Table) -> Vec<&'static str> {
        table.iter().map(|&(k, _)| k).collect()
    }

    #[test]
    fn all_catalogs_same_keys_as_english() {
        for data in [&FR, &DE, &ES, &JA] {
            assert_eq!(keys(data.languages), keys(EN.languages));
            assert_eq!(keys(data.regions), keys(EN.regions));
            assert_eq!(keys(data.scripts), keys(EN.scripts));
            assert_eq!(keys(data.currencies), keys(EN.currencies));
        }
    }

    #[test]
    fn short_overrides_have_long_forms() {
        for data in [&EN, &FR, &DE, &ES, &JA] {
            for &(key, _) in data.languages_short {
                assert!(lookup(data.languages, key).is_some(), "{}", key);
            }
            for &(key, _) in data.regions_short {
                assert!(lookup(data.regions, key).is_some(), "{}", key);
            }
        }
    }

    #[test]
    fn available_locales_all_parse() {
        assert_eq!(
            EmbeddedProvider.available_locales().len(),
            AVAILABLE.len()
        );
    }

    #[test]
    fn style_selects_short_override() {
        let short = lookup_for("en", DisplayStyle::Short, Fallback::Substitute);
        let long = lookup_for("en", DisplayStyle::Full, Fallback::Substitute);
        assert_eq!(short.region_name("GB").as_deref(), Some("UK"));
        assert_eq!(long.region_name("GB").as_deref(), Some("United Kingdom"));
        // No override: both styles agree.
        assert_eq!(short.region_name("FR").as_deref(), Some("France"));
        assert_eq!(short.language_name("en-GB").as_deref(), Some("UK English"));
        assert_eq!(long.language_name("en-GB").as_deref(), Some("British English"));
    }

    #[test]
    fn regional_locale_uses_language_tables() {
        let lookup = lookup_for("fr-CA", DisplayStyle::Full, Fallback::Substitute);
        assert_eq!(lookup.region_name("US").as_deref(), Some("États-Unis"));
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let lookup = lookup_for("it", DisplayStyle::Full, Fallback::NoSubstitute);
        assert_eq!(lookup.script_name("Latn").as_deref(), Some("Latin"));
    }

    #[test]
    fn composed_language_names() {
        let en = lookup_for("en", DisplayStyle::Full, Fallback::NoSubstitute);
        assert_eq!(en.language_name("fr").as_deref(), Some("French"));
        assert_eq!(en.language_name("de-AT").as_deref(), Some("German (AT)"));
        assert_eq!(en.language_name("de-DE").as_deref(), Some("German (Germany)"));
        assert_eq!(
            en.language_name("zh-Hant-TW").as_deref(),
            Some("Traditional Chinese (Taiwan)")
        );
        assert_eq!(
            en.language_name("sr-Latn").as_deref(),
            None,
            "no base name means nothing to compose"
        );
        assert_eq!(
            en.language_name("ru-Cyrl-CA").as_deref(),
            Some("Russian (Cyrillic, Canada)")
        );

        let ja = lookup_for("ja", DisplayStyle::Full, Fallback::NoSubstitute);
        assert_eq!(
            ja.language_name("ru-Cyrl-CA").as_deref(),
            Some("ロシア語（キリル文字、カナダ）")
        );
    }

    #[test]
    fn substitute_returns_code() {
        let sub = lookup_for("en", DisplayStyle::Short, Fallback::Substitute);
        let none = lookup_for("en", DisplayStyle::Short, Fallback::NoSubstitute);
        assert_eq!(sub.region_name("ZZ").as_deref(), Some("ZZ"));
        assert_eq!(none.region_name("ZZ"), None);
        assert_eq!(sub.key_value_name(CURRENCY_KEY, "ZZZ").as_deref(), Some("ZZZ"));
        assert_eq!(none.key_value_name(CURRENCY_KEY, "ZZZ"), None);
        assert_eq!(sub.language_name("xyz").as_deref(), Some("xyz"));
        assert_eq!(none.key_value_name("calendar", "USD"), None);
    }

    #[test]
    fn currency_names() {
        let fr = lookup_for("fr", DisplayStyle::Short, Fallback::NoSubstitute);
        assert_eq!(
            fr.key_value_name(CURRENCY_KEY, "USD").as_deref(),
            Some("dollar des États-Unis")
        );
    }
}
