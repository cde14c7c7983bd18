//! JavaScript code generation for the lena language.

pub mod codegen;
pub mod error;

pub use codegen::{generate, BlockStyle, Codegen, CodegenOptions};
pub use error::{CodegenError, CodegenResult};
