//! Literal classifiers applied to every value token after link resolution.

pub mod boolean;
pub mod escape;
pub mod number;

pub use boolean::parse_bool;
pub use escape::remove_escapes;
pub use number::{classify, parse_number, NumberKind};
