use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueType {
    Integer,
    Double,
    Boolean,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Double(f64),
    Boolean(bool),
    String(String),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Double(_) => ValueType::Double,
            Value::Boolean(_) => ValueType::Boolean,
            Value::String(_) => ValueType::String,
        }
    }

    pub fn has_type(&self, ty: ValueType) -> bool {
        self.value_type() == ty
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self { Some(*n) } else { None }
    }

    pub fn as_double(&self) -> Option<f64> {
        if let Value::Double(d) = self { Some(*d) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self { Some(*b) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Double(d) => write!(f, "{}", d),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Integer => "integer",
            ValueType::Double => "double",
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
        };
        f.write_str(name)
    }
}

/// A named option and its values, in document order. Never empty once parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigOption {
    name: String,
    values: Vec<Value>,
}

impl ConfigOption {
    pub(crate) fn new(name: String, values: Vec<Value>) -> Self {
        Self { name, values }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// An option is a vector when it holds more than one value.
    pub fn is_vector(&self) -> bool {
        self.values.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    name: String,
    options: Vec<ConfigOption>,
    #[serde(skip)]
    index: IndexMap<String, usize>,
}

impl Section {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            options: Vec::new(),
            index: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[ConfigOption] {
        &self.options
    }

    /// Looks up an option by name. With duplicate names the last one wins.
    pub fn option(&self, name: &str) -> Option<&ConfigOption> {
        self.index.get(name).map(|&i| &self.options[i])
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub(crate) fn push(&mut self, option: ConfigOption) {
        self.index.insert(option.name.clone(), self.options.len());
        self.options.push(option);
    }
}

/// Ordered sections produced by one successful parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    sections: Vec<Section>,
    #[serde(skip)]
    index: IndexMap<String, usize>,
}

impl Document {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by name. With duplicate names the last one wins.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&i| &self.sections[i])
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(crate) fn push_section(&mut self, section: Section) {
        self.index.insert(section.name.clone(), self.sections.len());
        self.sections.push(section);
    }

    pub(crate) fn last_section_mut(&mut self) -> Option<&mut Section> {
        self.sections.last_mut()
    }
}
