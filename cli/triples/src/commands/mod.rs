//! CLI command implementations.

pub mod table;
pub mod triple;
pub mod validate;
