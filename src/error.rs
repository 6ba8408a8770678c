// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type for the I/O facing layers (config, content, media).
//!
//! The gallery viewer and preview carousel never fail; everything that can
//! fail lives at the edges and reports through [`Error`].

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Content error in '{path}': {message}")]
    Content { path: PathBuf, message: String },

    #[error("Image error: {0}")]
    Image(String),
}

impl Error {
    /// Returns the i18n message key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Content { .. } => "error-content",
            Error::Image(_) => "error-image",
        }
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_and_displays() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
        assert_eq!(err.i18n_key(), "error-io");
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err = Error::from(parse);
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.i18n_key(), "error-config");
    }

    #[test]
    fn content_error_names_the_file() {
        let err = Error::Content {
            path: PathBuf::from("portfolio.toml"),
            message: "missing field `profile`".into(),
        };
        let text = err.to_string();
        assert!(text.contains("portfolio.toml"));
        assert!(text.contains("profile"));
    }
}
