//! Tree to tree passes that run between parsing and code generation.

pub mod desugar;
