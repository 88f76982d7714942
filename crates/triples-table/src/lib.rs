//! Target triple table for locating and naming prebuilt native binaries.
//!
//! Maps a `(platform, arch)` pair, as reported by a packaging tool for the
//! running system, to the compiler target triples built for it:
//!
//! - **Table:** compiled-in `platform -> arch -> [variant]` data and read-only lookup
//! - **Triple:** the rule deriving record fields from a raw triple
//! - **Document:** JSON/TOML exterior format of the table
//! - **Validate:** invariant checks over a table document
//! - **Host:** the running process's table key

mod data;
pub mod document;
pub mod error;
pub mod host;
pub mod record;
pub mod table;
pub mod triple;
pub mod validate;

pub use document::TableDocument;
pub use error::{Result, TableError};
pub use record::{RecordDocument, VariantRecord};
pub use table::{all_platforms, architectures_for, lookup};
pub use triple::parse_triple;
pub use validate::{validate_document, ValidationIssue};
