//! Tab-separated output generation.

mod writer;

pub use writer::{format_record, write_records};
