use super::*;
use crate::ast::{ConfigOption, Section, Value, ValueType};

impl ConfigParser {
    /// All sections in document order.
    pub fn sections(&self) -> &[Section] {
        self.document.sections()
    }

    pub fn section(&self, name: &str) -> Result<&Section, ConfigError> {
        self.document
            .section(name)
            .ok_or_else(|| helpers::section_not_found(name))
    }

    /// All options of a section in document order.
    pub fn options(&self, section: &str) -> Result<&[ConfigOption], ConfigError> {
        Ok(self.section(section)?.options())
    }

    pub fn option(&self, section: &str, option: &str) -> Result<&ConfigOption, ConfigError> {
        self.section(section)?
            .option(option)
            .ok_or_else(|| helpers::option_not_found(section, option))
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.document.has_section(section)
    }

    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.document
            .section(section)
            .is_some_and(|s| s.has_option(option))
    }

    /// Get the first value of an option as type `T`.
    ///
    /// # Examples
    /// ```
    /// # use configparser::ConfigParser;
    /// let config = ConfigParser::from_str("[app]\nname = demo\ndebug = on\n")?;
    /// let name: String = config.get("app", "name")?;
    /// let debug: bool = config.get("app", "debug")?;
    /// assert_eq!((name.as_str(), debug), ("demo", true));
    /// # Ok::<(), configparser::ConfigError>(())
    /// ```
    ///
    /// # Errors
    /// Returns `NotFound` if the section or option is missing and `TypeError`
    /// if the stored value is not a `T`.
    pub fn get<T>(&self, section: &str, option: &str) -> Result<T, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        self.get_at(section, option, 0)
    }

    /// Get the value at `idx` of a vector option as type `T`.
    pub fn get_at<T>(&self, section: &str, option: &str, idx: usize) -> Result<T, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        self.option(section, option)?
            .get(idx)
            .map_err(|e| helpers::with_location(e, section, option, idx))
    }

    /// Get an optional typed value - returns `None` if the option doesn't exist.
    pub fn get_optional<T>(&self, section: &str, option: &str) -> Result<Option<T>, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        match self.get(section, option) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, section: &str, option: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        self.get(section, option).unwrap_or(default)
    }

    /// Get every value of an option, all converted to `T`.
    pub fn get_vec<T>(&self, section: &str, option: &str) -> Result<Vec<T>, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        let opt = self.option(section, option)?;
        (0..opt.len())
            .map(|idx| opt.get(idx).map_err(|e| helpers::with_location(e, section, option, idx)))
            .collect()
    }
}

impl ConfigOption {
    pub fn value(&self, idx: usize) -> Result<&Value, ConfigError> {
        self.values()
            .get(idx)
            .ok_or_else(|| helpers::index_out_of_range(self.name(), idx, self.len()))
    }

    pub fn value_type(&self, idx: usize) -> Result<ValueType, ConfigError> {
        Ok(self.value(idx)?.value_type())
    }

    /// False for a mismatched type as well as for an index out of range.
    pub fn is_type(&self, idx: usize, ty: ValueType) -> bool {
        self.values().get(idx).is_some_and(|v| v.has_type(ty))
    }

    pub fn get<T>(&self, idx: usize) -> Result<T, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        T::try_from(self.value(idx)?.clone())
    }

    pub fn get_integer(&self, idx: usize) -> Result<i64, ConfigError> {
        self.get(idx)
    }

    pub fn get_double(&self, idx: usize) -> Result<f64, ConfigError> {
        self.get(idx)
    }

    pub fn get_bool(&self, idx: usize) -> Result<bool, ConfigError> {
        self.get(idx)
    }

    pub fn get_str(&self, idx: usize) -> Result<&str, ConfigError> {
        let value = self.value(idx)?;
        value.as_str().ok_or_else(|| ConfigError::TypeError {
            message: format!("Expected string, got {} {:?}", value.value_type(), value),
            hint: Some("Use a string value in your config".into()),
            code: Some(401),
        })
    }
}
