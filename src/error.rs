// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the carousel core, the catalog loader and the
//! configuration layer.
//!
//! Every variant is recoverable: navigation errors are surfaced to the caller
//! that wired the control, catalog and configuration errors to the binary.

use thiserror::Error;

/// Failures of a single carousel navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The carousel has no items, so there is nothing to move to.
    #[error("cannot navigate an empty sequence")]
    EmptySequence,

    /// A direct jump (dot click) targeted an index outside `[0, len)`.
    #[error("index {index} is out of range for a sequence of {len} items")]
    OutOfRange { index: usize, len: usize },
}

impl NavigationError {
    /// Returns a stable key identifying the error kind.
    pub fn key(&self) -> &'static str {
        match self {
            NavigationError::EmptySequence => "navigation-empty-sequence",
            NavigationError::OutOfRange { .. } => "navigation-out-of-range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Navigation Error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn navigation_error_converts_into_crate_error() {
        let err: Error = NavigationError::EmptySequence.into();
        assert_eq!(err, Error::Navigation(NavigationError::EmptySequence));
        assert_eq!(
            format!("{}", err),
            "Navigation Error: cannot navigate an empty sequence"
        );
    }

    #[test]
    fn out_of_range_reports_index_and_length() {
        let err = NavigationError::OutOfRange { index: 7, len: 3 };
        let message = format!("{}", err);
        assert!(message.contains('7'));
        assert!(message.contains('3'));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_failure_maps_to_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml")
            .expect_err("input is not valid toml");
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn navigation_error_keys() {
        assert_eq!(
            NavigationError::EmptySequence.key(),
            "navigation-empty-sequence"
        );
        assert_eq!(
            NavigationError::OutOfRange { index: 1, len: 0 }.key(),
            "navigation-out-of-range"
        );
    }
}
