use std::fmt;

/// Discriminant of a [`ConfigError`], for callers that only need to branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // lexical
    UnexpectedCharacter,
    ExpectedClosingBracket,

    // structural
    ExpectedSectionFirst,
    ExpectingValueAfterIdentifier,
    UnexpectedValue,
    UnexpectedToken,

    // accessor surface
    FileError,
    NotFound,
    TypeError,
}

/// The main error type for tokenizing, parsing and reading configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised for a character that cannot start any token.
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a section header is not closed with `]`.
    ExpectedClosingBracket {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExpectedSectionFirst {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExpectingValueAfterIdentifier {
        identifier: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedValue {
        value: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedToken {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by lookups for a section, option or value index that does not exist.
    NotFound {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a stored value is read as a different type.
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            ConfigError::ExpectedClosingBracket { .. } => ErrorKind::ExpectedClosingBracket,
            ConfigError::ExpectedSectionFirst { .. } => ErrorKind::ExpectedSectionFirst,
            ConfigError::ExpectingValueAfterIdentifier { .. } => {
                ErrorKind::ExpectingValueAfterIdentifier
            }
            ConfigError::UnexpectedValue { .. } => ErrorKind::UnexpectedValue,
            ConfigError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ConfigError::FileError { .. } => ErrorKind::FileError,
            ConfigError::NotFound { .. } => ErrorKind::NotFound,
            ConfigError::TypeError { .. } => ErrorKind::TypeError,
        }
    }

    /// 1-based line of the offending input, or 0 for errors not tied to a position.
    pub fn line(&self) -> usize {
        self.position().map_or(0, |(line, _)| line)
    }

    /// 1-based column of the offending input, or 0 for errors not tied to a position.
    pub fn column(&self) -> usize {
        self.position().map_or(0, |(_, column)| column)
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            ConfigError::UnexpectedCharacter { code, .. }
            | ConfigError::ExpectedClosingBracket { code, .. }
            | ConfigError::ExpectedSectionFirst { code, .. }
            | ConfigError::ExpectingValueAfterIdentifier { code, .. }
            | ConfigError::UnexpectedValue { code, .. }
            | ConfigError::UnexpectedToken { code, .. }
            | ConfigError::FileError { code, .. }
            | ConfigError::NotFound { code, .. }
            | ConfigError::TypeError { code, .. } => *code,
        }
    }

    fn position(&self) -> Option<(usize, usize)> {
        match self {
            ConfigError::UnexpectedCharacter { line, column, .. }
            | ConfigError::ExpectedClosingBracket { line, column, .. }
            | ConfigError::ExpectedSectionFirst { line, column, .. }
            | ConfigError::ExpectingValueAfterIdentifier { line, column, .. }
            | ConfigError::UnexpectedValue { line, column, .. }
            | ConfigError::UnexpectedToken { line, column, .. } => Some((*line, *column)),
            ConfigError::FileError { .. }
            | ConfigError::NotFound { .. }
            | ConfigError::TypeError { .. } => None,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnexpectedCharacter { character, line, column, hint, code } =>
                write!(f, "Unexpected character {:?} at {}:{}{}",
                    character, line, column, suffix(hint, code)),
            ConfigError::ExpectedClosingBracket { line, column, hint, code } =>
                write!(f, "Expected closing bracket ']' after section name at {}:{}{}",
                    line, column, suffix(hint, code)),
            ConfigError::ExpectedSectionFirst { line, column, hint, code } =>
                write!(f, "Expected section before any option at {}:{}{}",
                    line, column, suffix(hint, code)),
            ConfigError::ExpectingValueAfterIdentifier { identifier, line, column, hint, code } =>
                write!(f, "Expecting value after option '{}' at {}:{}{}",
                    identifier, line, column, suffix(hint, code)),
            ConfigError::UnexpectedValue { value, line, column, hint, code } =>
                write!(f, "Unexpected value '{}' at {}:{}{}",
                    value, line, column, suffix(hint, code)),
            ConfigError::UnexpectedToken { token, line, column, hint, code } =>
                write!(f, "Unexpected token '{}' at {}:{}{}",
                    token, line, column, suffix(hint, code)),
            ConfigError::FileError { message, path, hint, code } =>
                write!(f, "File error '{}': {}{}", path, message, suffix(hint, code)),
            ConfigError::NotFound { message, hint, code } =>
                write!(f, "Not found: {}{}", message, suffix(hint, code)),
            ConfigError::TypeError { message, hint, code } =>
                write!(f, "Type error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for ConfigError {}
