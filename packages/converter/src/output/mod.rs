//! Batch output generation.

mod writer;

pub use writer::{generate_json, generate_output, generate_yaml, save_batch};
