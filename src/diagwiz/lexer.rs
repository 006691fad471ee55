//! Tokenizer for diagwiz source

use std::ops::Range;

/// Reserved word introducing an alias declaration
pub const ALIAS_KEYWORD: &str = "alias";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `// ...` or `# ...` up to the end of the line
    LineComment,
    Identifier,
    AliasKeyword,
    /// A double-quoted string; `terminated` is false if the line ended first
    String { terminated: bool },
    /// `->`, `-->`, `<-` or `<--`
    Arrow,
    Equals,
    Colon,
    Semicolon,
    /// A byte sequence no rule accepts
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

/// Split `source` into tokens, skipping whitespace
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer { source, pos: 0 };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl Lexer<'_> {
    fn rest(&self) -> &str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        let len: usize = self
            .rest()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        self.pos += len;
    }

    fn next_token(&mut self) -> Option<Token> {
        self.bump_while(char::is_whitespace);
        let start = self.pos;
        let c = self.peek()?;
        let rest = self.rest();

        let kind = if rest.starts_with("//") || c == '#' {
            self.bump_while(|c| c != '\n');
            TokenKind::LineComment
        } else if c.is_ascii_alphabetic() || c == '_' {
            self.bump_while(|c| c.is_ascii_alphanumeric() || c == '_');
            if &self.source[start..self.pos] == ALIAS_KEYWORD {
                TokenKind::AliasKeyword
            } else {
                TokenKind::Identifier
            }
        } else if c == '"' {
            self.pos += 1;
            self.lex_string_body()
        } else if let Some(arrow) = ["-->", "<--", "->", "<-"]
            .iter()
            .find(|arrow| rest.starts_with(*arrow))
        {
            self.pos += arrow.len();
            TokenKind::Arrow
        } else {
            self.pos += c.len_utf8();
            match c {
                '=' => TokenKind::Equals,
                ':' => TokenKind::Colon,
                ';' => TokenKind::Semicolon,
                _ => TokenKind::Unknown,
            }
        };

        Some(Token {
            kind,
            range: start..self.pos,
        })
    }

    /// Consume a string body after the opening quote
    fn lex_string_body(&mut self) -> TokenKind {
        let mut escaped = false;
        for (offset, c) in self.rest().char_indices() {
            match c {
                '\n' => {
                    self.pos += offset;
                    return TokenKind::String { terminated: false };
                }
                '"' if !escaped => {
                    self.pos += offset + 1;
                    return TokenKind::String { terminated: true };
                }
                '\\' if !escaped => escaped = true,
                _ => escaped = false,
            }
        }
        self.pos = self.source.len();
        TokenKind::String { terminated: false }
    }
}
