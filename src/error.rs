// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for display-name resolution

use crate::types::DisplayType;
use thiserror::Error;

/// Broad category of an [`Error`], mirroring the two recoverable failure
/// kinds an embedding runtime surfaces to its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value is outside the accepted range (bad code, bad locale tag).
    Range,
    /// A required option is missing or an option has an unsupported value.
    Type,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The code passed to `of` does not have the shape required by the
    /// resolver's display type.
    #[error("invalid {display_type} code {code:?}: expected {expected}")]
    InvalidCode {
        display_type: DisplayType,
        code: String,
        expected: &'static str,
    },

    /// A requested locale is not a structurally valid language tag.
    #[error("incorrect locale information provided: {tag:?}")]
    InvalidLocale { tag: String },

    #[error("required option `type` is missing")]
    MissingType,

    #[error("invalid value {value:?} for option `{option}`: expected one of {expected}")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: String,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCode { .. } | Error::InvalidLocale { .. } => ErrorKind::Range,
            Error::MissingType | Error::InvalidOption { .. } => ErrorKind::Type,
        }
    }

    pub(crate) fn invalid_code(display_type: DisplayType, code: &str) -> Self {
        Error::InvalidCode {
            display_type,
            code: code.to_string(),
            expected: display_type.expected_shape(),
        }
    }

    pub(crate) fn invalid_option(option: &'static str, value: &str, tokens: &[&str]) -> Self {
        Error::InvalidOption {
            option,
            value: value.to_string(),
            expected: tokens
                .iter()
                .map(|token| format!("{:?}", token))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
