//! Shared parsing utilities.
//!
//! Line-level primitives used by [`crate::parser::TranscriptParser`]: the
//! message pattern, timestamp normalization and notice detection.

pub mod whatsapp;

// Re-export commonly used items
pub use whatsapp::{
    LINE_PATTERN, LINE_REGEX, RawLine, is_whatsapp_system_message, normalize_year,
    parse_whatsapp_timestamp, truncate_body,
};
