//! Single-pass cursor over a token sequence.
//!
//! The structural parser only ever needs one token of lookahead: it peeks
//! to decide whether the next token still belongs to the construct being
//! parsed, and advances once it does.

use crate::parser::token::Token;

/// One-token-lookahead cursor.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Consume and return the next token, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Inspect the next token without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}
