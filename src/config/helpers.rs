use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Expand a leading "~/" to the home directory; other paths are used as given.
pub(super) fn resolve_path(raw_path: &Path) -> Result<PathBuf, ConfigError> {
    let Some(rest) = raw_path.to_str().and_then(|s| s.strip_prefix("~/")) else {
        return Ok(raw_path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| ConfigError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: raw_path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;

    Ok(home.join(rest))
}

/// Attach the `[section] option` location to a conversion error.
pub(super) fn with_location(e: ConfigError, section: &str, option: &str, idx: usize) -> ConfigError {
    match e {
        ConfigError::TypeError { message, hint, code } => ConfigError::TypeError {
            message: format!("[{}] {} (value {}): {}", section, option, idx, message),
            hint,
            code,
        },
        other => other,
    }
}

pub(super) fn section_not_found(section: &str) -> ConfigError {
    ConfigError::NotFound {
        message: format!("Section '{}' not found in configuration", section),
        hint: Some("Check the [Section] headers of your config file".into()),
        code: Some(304),
    }
}

pub(super) fn option_not_found(section: &str, option: &str) -> ConfigError {
    ConfigError::NotFound {
        message: format!("Option '{}' not found in section '{}'", option, section),
        hint: Some("Option names are case-sensitive".into()),
        code: Some(304),
    }
}

pub(super) fn index_out_of_range(option: &str, idx: usize, len: usize) -> ConfigError {
    ConfigError::NotFound {
        message: format!("Option '{}' has {} value(s), index {} is out of range", option, len, idx),
        hint: None,
        code: Some(305),
    }
}
