//! Lexical tokens produced by the scanner.

use std::fmt;

use serde::Serialize;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A property name, or the keyword opening a stanza
    Key,
    /// One line (or one comma-separated item) of a property value
    Value,
    /// The name following a stanza keyword
    ScopeName,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Key => write!(f, "Key"),
            TokenKind::Value => write!(f, "Value"),
            TokenKind::ScopeName => write!(f, "ScopeName"),
        }
    }
}

/// A single token: its kind and the text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn key(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Key, text)
    }

    pub fn value(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Value, text)
    }

    pub fn scope_name(text: impl Into<String>) -> Self {
        Token::new(TokenKind::ScopeName, text)
    }

    pub fn is_key(&self) -> bool {
        self.kind == TokenKind::Key
    }

    pub fn is_value(&self) -> bool {
        self.kind == TokenKind::Value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.kind, self.text)
    }
}
