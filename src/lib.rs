// src/lib.rs
pub mod cli;
pub mod export;

pub use export::{generate_script, Credentials, ExportParams, OutputFormat, PrefixSplit};
