//! Line bundler: splits the source into lines and classifies each one.
//!
//! Classification is attempted against an ordered list of line-kind
//! matchers (heading, blank, horizontal rule, ordered item, unordered
//! item, code fence) with paragraph as the fallback. The only cross-line
//! state is the code-fence toggle in [`LexerState`]: the opening fence
//! line emits a [`Bundle::CodeFence`], the closing line emits nothing, and
//! every line in between is wrapped verbatim as a [`Bundle::CodeLine`].

mod bundle;
mod classify;

pub use bundle::Bundle;

use classify::classify_line;
use log::debug;

/// Per-call lexer state. Never share one across concurrent `lex` calls.
#[derive(Debug, Default)]
pub struct LexerState {
    in_code_block: bool,
}

impl LexerState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Splits `markdown` on newlines and classifies every line.
///
/// Splitting is on `'\n'` with one trailing `'\r'` stripped per line, so
/// CRLF input lexes the same as LF input. A trailing newline therefore
/// produces a final empty line, which classifies as [`Bundle::NewLine`].
pub fn lex(markdown: &str) -> Vec<Bundle> {
    let mut state = LexerState::new();
    let mut bundles = Vec::new();

    for raw in markdown.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(bundle) = classify_line(line, &mut state) {
            bundles.push(bundle);
        }
    }

    debug!("lexed {} bundles", bundles.len());
    bundles
}
