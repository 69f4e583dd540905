//! Recognize single-row parameterized INSERT statements and merge compatible
//! ones into a single multi-row INSERT.
//!
//! The pipeline is one-way and pure: SQL text goes through the matcher and the
//! column parser into an [`InsertDescriptor`], which is then compared with
//! [`is_compatible`] or expanded with [`generate_multi_row_insert`].
//!
//! ```
//! use insert_batch::{generate_multi_row_insert, is_parametrized_insert, parse_insert};
//!
//! let first = "INSERT INTO users (id, name) VALUES (?, ?)";
//! let second = "insert into users (`id`, `name`) values (?, ?)";
//! assert!(is_parametrized_insert(first) && is_parametrized_insert(second));
//!
//! let a = parse_insert(first).unwrap();
//! let b = parse_insert(second).unwrap();
//! assert!(a.is_compatible_with(&b));
//!
//! let sql = generate_multi_row_insert(Some(&a), 2).unwrap();
//! assert_eq!(sql, "INSERT INTO users (id, name) VALUES (?, ?), (?, ?)");
//! ```

pub mod batch;
pub mod error;
pub mod logger;
pub mod parser;
pub mod statements;

pub use batch::{generate_multi_row_insert, is_compatible};
pub use error::{BatchError, BatchResult, InsertParseError, InsertParseResult};
pub use parser::insert::{is_parametrized_insert, match_insert, parse_insert, InsertMatch};
pub use parser::InsertDescriptor;
pub use statements::split_statements;
