use thiserror::Error;

/// The result of a code generation.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// An error that occurred during code generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The tree contains a node the generator has no output for.
    /// Only happens when generating a tree whose parse reported errors.
    #[error("cannot generate code for {node} node")]
    UnexpectedNode {
        /// The kind of node
        node: &'static str,
    },
}
