/// An inline-level parsed unit produced by [`tokenize`](super::tokenize).
///
/// Tokens cover a line's content left to right with no gaps and no overlap:
/// every character of the trimmed, prefix-stripped line belongs to exactly
/// one token. Emphasis and code variants store the inner text (delimiters
/// stripped); link variants store the literal link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of plain text with no special meaning.
    Text(String),
    /// `**bold**` content.
    Bold(String),
    /// `*italic*` content.
    Italic(String),
    /// `~~struck~~` content.
    Strike(String),
    /// `` `code span` `` content.
    Code(String),
    /// A `[name](link)` link.
    LinkNamed { link: String, name: String },
    /// A bare `http://` / `https://` URL.
    LinkBare { link: String },
    /// A hyphenated Japanese phone number (`03-1234-5678` and friends).
    LinkPhone { link: String },
    /// A single half-width space.
    SpaceHalf,
    /// A single full-width space (U+3000).
    SpaceFull,
    /// A tab (or a run of four spaces).
    Tab,
}

impl Token {
    /// The literal source span this token was produced from.
    ///
    /// Concatenating the literals of a line's tokens reconstructs the line.
    pub fn literal(&self) -> String {
        match self {
            Token::Text(text) => text.clone(),
            Token::Bold(inner) => format!("**{inner}**"),
            Token::Italic(inner) => format!("*{inner}*"),
            Token::Strike(inner) => format!("~~{inner}~~"),
            Token::Code(inner) => format!("`{inner}`"),
            Token::LinkNamed { link, name } => format!("[{name}]({link})"),
            Token::LinkBare { link } => link.clone(),
            Token::LinkPhone { link } => link.clone(),
            Token::SpaceHalf => " ".to_string(),
            Token::SpaceFull => "\u{3000}".to_string(),
            Token::Tab => "\t".to_string(),
        }
    }
}
