//! Markdown compiler: source text -> bundles -> tree -> output nodes.
//!
//! The stages form a strict one-way pipeline ([`inline`] -> [`lexing`] ->
//! [`parsing`] -> [`render`]); no stage calls back into an earlier one.
//! [`compile`] composes all four for the common case.

pub mod compile;
pub mod error;
pub mod inline;
pub mod lexing;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use compile::{compile, compile_to_markup};
pub use error::CompileError;
pub use inline::{Token, tokenize};
pub use lexing::{Bundle, LexerState, lex};
pub use parsing::{TreeNode, parse};
pub use render::{OutputNode, Renderer, to_markup};
