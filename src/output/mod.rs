//! Report writers.
//!
//! Each format has a `to_*` function returning a `String` and a `write_*`
//! function writing to a file path.
//!
//! - [`text`] - human-readable report (always available)
//! - [`json_writer`] - pretty-printed JSON (feature `json-output`)
//! - [`csv_writer`] - semicolon-delimited long-form rows (feature `csv-output`)

pub mod text;

#[cfg(feature = "csv-output")]
pub mod csv_writer;
#[cfg(feature = "json-output")]
pub mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text::{to_text, write_text};
