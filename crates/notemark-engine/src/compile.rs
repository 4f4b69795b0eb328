//! The compile façade: markdown string in, output-node tree (or markup
//! string) out.
//!
//! Every call runs the full pipeline (lex, parse, render) with fresh
//! per-call state, so concurrent compiles never share the fence toggle or
//! the parser accumulators. The pipeline is synchronous and does no I/O;
//! a call either completes or fails with a [`CompileError`].

use log::debug;

use crate::error::CompileError;
use crate::lexing::lex;
use crate::parsing::parse;
use crate::render::{OutputNode, Renderer, to_markup};

/// Compiles markdown into the abstract output-node tree.
pub fn compile(markdown: &str) -> Result<OutputNode, CompileError> {
    let bundles = lex(markdown);
    let tree = parse(bundles)?;
    debug!("parsed {} top-level nodes", tree.len());
    Renderer::new().render(&tree)
}

/// Compiles markdown straight to a markup string.
pub fn compile_to_markup(markdown: &str) -> Result<String, CompileError> {
    Ok(to_markup(&compile(markdown)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraphs_round_trip_in_order() {
        let root = compile("first\n\nsecond").unwrap();
        let kinds: Vec<&str> = root.children.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, vec!["p", "br", "p"]);
    }

    #[test]
    fn empty_input_yields_a_single_break() {
        let root = compile("").unwrap();
        // Splitting "" on '\n' yields one empty line, i.e. one break node.
        assert_eq!(root.kind, "div");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].kind, "br");
    }

    #[test]
    fn markup_for_a_small_document() {
        let markup = compile_to_markup("## Hi\n\n**a** *b*").unwrap();
        assert_eq!(
            markup,
            "<div class=\"markdown-body\"><h2>Hi</h2><br>\
             <p><strong>a</strong><span class=\"sp-half\"> </span><em>b</em></p></div>"
        );
    }
}
