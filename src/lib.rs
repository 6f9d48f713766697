pub mod ast;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod resolver;
pub mod config;

pub use ast::{ConfigOption, Document, Section, Value, ValueType};
pub use error::{ConfigError, ErrorKind};
pub use config::ConfigParser;
