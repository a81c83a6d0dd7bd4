pub mod generate;
pub mod lint;
pub mod validate;
