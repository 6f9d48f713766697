// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::parser;
use crate::ConfigError;

mod access;
mod conversion;
mod helpers;

/// Parses configuration text and keeps the most recent successful [`Document`].
///
/// Every parse call starts from scratch: a failed parse leaves an empty document
/// behind together with the error, never a partial result.
#[derive(Debug, Default)]
pub struct ConfigParser {
    document: Document,
    error: Option<ConfigError>,
}

impl ConfigParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a string
    ///
    /// # Example
    /// ```
    /// # use configparser::ConfigParser;
    /// let config = ConfigParser::from_str("[server]\nport = 8080\n")?;
    /// let port: u16 = config.get("server", "port")?;
    /// assert_eq!(port, 8080);
    /// # Ok::<(), configparser::ConfigError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        config.parse_text(content)?;
        Ok(config)
    }

    /// Load and parse a config file. A leading `~/` is expanded to the home directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        config.parse_file(path)?;
        Ok(config)
    }

    /// Load a config file with fallback support
    ///
    /// Tries the primary path first. Only when that fails with a file error
    /// (missing or unreadable) is the fallback path tried; parse errors in the
    /// primary file are returned as they are.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, ConfigError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(ConfigError::FileError { .. }) => {
                log::debug!(
                    "primary config '{}' unavailable, trying '{}'",
                    primary.as_ref().display(),
                    fallback.as_ref().display()
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    ConfigError::FileError { message, .. } => ConfigError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse `text`, replacing whatever a previous call produced.
    pub fn parse_text(&mut self, text: &str) -> Result<(), ConfigError> {
        self.document = Document::default();
        self.error = None;

        log::debug!("parsing {} bytes of configuration", text.len());
        let result = parser::Parser::new(text).and_then(|mut p| p.parse_document());

        match result {
            Ok(document) => {
                log::debug!("parsed {} section(s)", document.sections().len());
                self.document = document;
                Ok(())
            }
            Err(e) => {
                log::debug!("parse failed: {}", e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Read the whole file into memory and parse it.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        self.document = Document::default();
        self.error = None;

        let content = helpers::resolve_path(path.as_ref())
            .and_then(|resolved| {
                log::debug!("loading configuration from '{}'", resolved.display());
                fs::read_to_string(&resolved).map_err(|e| ConfigError::FileError {
                    message: format!("Failed to read file: {}", e),
                    path: resolved.to_string_lossy().to_string(),
                    hint: Some("Check that the file exists and is readable".into()),
                    code: Some(301),
                })
            });

        match content {
            Ok(content) => self.parse_text(&content),
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The error of the last failed parse call, if any.
    pub fn error(&self) -> Option<&ConfigError> {
        self.error.as_ref()
    }
}
