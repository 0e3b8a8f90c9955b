// SPDX-License-Identifier: PMPL-1.0-or-later

//! Construction options for a display-names resolver.
//!
//! [`DisplayNamesOptions`] is the loosely typed option bag an embedding
//! layer hands over (everything is an optional string, exactly as a user
//! wrote it). [`DisplayNamesOptions::validate`] is the boundary where
//! missing or unsupported values become type errors; past that point only
//! typed values travel.
//!
//! Option bags can also be stored as JSON or YAML files:
//!
//! ```yaml
//! type: region
//! style: long
//! fallback: none
//! ```

use crate::error::{Error, Result};
use crate::resolver::ResolvedOptions;
use crate::types::{DisplayStyle, DisplayType, Fallback};
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayNamesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl DisplayNamesOptions {
    pub fn new(display_type: impl Into<String>) -> Self {
        DisplayNamesOptions {
            display_type: Some(display_type.into()),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Check every present value against its token vocabulary and return the
    /// display type, which is the only required option.
    pub fn validate(&self) -> Result<DisplayType> {
        let display_type = match self.display_type.as_deref() {
            None => return Err(Error::MissingType),
            Some(value) => DisplayType::parse(value).ok_or_else(|| {
                let tokens: Vec<&str> = DisplayType::all().iter().map(|t| t.as_str()).collect();
                Error::invalid_option("type", value, &tokens)
            })?,
        };
        if let Some(style) = self.style.as_deref() {
            if !DisplayStyle::TOKENS.contains(&style) {
                return Err(Error::invalid_option("style", style, DisplayStyle::TOKENS));
            }
        }
        if let Some(fallback) = self.fallback.as_deref() {
            if !Fallback::TOKENS.contains(&fallback) {
                return Err(Error::invalid_option("fallback", fallback, Fallback::TOKENS));
            }
        }
        Ok(display_type)
    }

    /// Fill unset fields from `other`; fields already set here win.
    pub fn or(self, other: DisplayNamesOptions) -> Self {
        DisplayNamesOptions {
            style: self.style.or(other.style),
            display_type: self.display_type.or(other.display_type),
            fallback: self.fallback.or(other.fallback),
        }
    }

    /// Load an option bag from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let format = OptionsFormat::from_path(path)?;
        format
            .parse(&content)
            .with_context(|| format!("parsing {}", path.display()))
    }
}

impl From<&ResolvedOptions> for DisplayNamesOptions {
    fn from(resolved: &ResolvedOptions) -> Self {
        DisplayNamesOptions {
            style: Some(resolved.style.clone()),
            display_type: Some(resolved.display_type.clone()),
            fallback: Some(resolved.fallback.clone()),
        }
    }
}

/// On-disk encodings for option bags and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OptionsFormat {
    Json,
    Yaml,
}

impl OptionsFormat {
    pub fn parse_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(OptionsFormat::Json),
            "yaml" | "yml" => Some(OptionsFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse_name)
            .ok_or_else(|| {
                anyhow!(
                    "unsupported options file {} (expected .json, .yaml or .yml)",
                    path.display()
                )
            })
    }

    pub fn parse(&self, content: &str) -> anyhow::Result<DisplayNamesOptions> {
        match self {
            OptionsFormat::Json => Ok(serde_json::from_str(content)?),
            OptionsFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        match self {
            OptionsFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OptionsFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}
