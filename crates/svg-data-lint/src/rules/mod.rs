//! Built-in lint rules.

pub mod duplicate_value;
pub mod missing_attribute;
pub mod missing_tag;

pub use duplicate_value::DuplicateValueRule;
pub use missing_attribute::MissingAttributeRule;
pub use missing_tag::MissingTagRule;
