use thiserror::Error;

/// Fatal pipeline errors.
///
/// None of these are user-input errors: any well-formed bundle stream from
/// the lexer parses cleanly, and every tree-node kind has a render rule in
/// the default registry. When one of these surfaces it indicates a new
/// kind was introduced without a matching handler, or stages were driven
/// out of sequence. There is no partial output; the whole compile fails.
#[derive(Debug, Error)]
pub enum CompileError {
    /// No render rule matched a tree node. Carries the offending node,
    /// debug-serialized for diagnosis.
    #[error("no render rule matched tree node: {0}")]
    UnhandledNode(String),

    /// A code line arrived while no code block was open.
    #[error("code line outside of any open code block: {0:?}")]
    StrayCodeLine(String),

    /// A fence was opened while a code block was still being accumulated.
    #[error("code fence opened while a code block is still open")]
    FenceStillOpen,
}
