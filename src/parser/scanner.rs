//! Character-level scanner for the manifest format.
//!
//! The scanner turns a byte stream into a flat [`Token`] sequence. It knows
//! nothing about field names: indentation decides whether a line is a new
//! key, a continuation of the previous value, or a line inside a stanza.
//!
//! # Design
//!
//! Every byte is fed through [`transition`], a pure function from the current
//! [`ScanState`] and the byte to the next state and an [`Action`]. The scanner
//! applies the action to its accumulation buffer. A stanza has no closing
//! marker: the first unindented line after it moves the machine back to the
//! top-level states.

use std::io::{self, Read};

use crate::parser::token::{Token, TokenKind};

/// Default size of the read buffer.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Start of a top-level line
    Init,
    /// Accumulating a top-level key
    Name,
    /// Skipping indentation before a top-level value
    ValueStart,
    /// Accumulating a top-level value
    Value,
    /// Accumulating the name after a stanza keyword
    ScopeStart,
    /// Start of a line inside a stanza
    ScopeEntryInit,
    /// Skipping indentation inside a stanza
    ScopeEntryNameStart,
    /// Accumulating a nested key
    ScopeEntryName,
    /// Skipping whitespace before a nested value
    ScopeEntryValueStart,
    /// Accumulating a nested value
    ScopeEntryValue,
}

/// What the scanner does with the byte that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop the byte.
    Skip,
    /// Append the byte to the accumulation buffer.
    Accumulate,
    /// Emit the buffer as a token of this kind and clear it. The byte
    /// itself is a delimiter and is dropped.
    Emit(TokenKind),
}

/// Compute the next state and action for one input byte.
pub fn transition(state: ScanState, byte: u8) -> (ScanState, Action) {
    use Action::*;
    use ScanState::*;

    match state {
        Init => match byte {
            b' ' | b'\t' => (ValueStart, Skip),
            b'\n' => (Init, Skip),
            _ => (Name, Accumulate),
        },
        Name => match byte {
            b':' => (ValueStart, Emit(TokenKind::Key)),
            b' ' | b'\t' => (ScopeStart, Emit(TokenKind::Key)),
            // bare keyword such as `library`
            b'\n' => (ScopeEntryInit, Emit(TokenKind::Key)),
            _ => (Name, Accumulate),
        },
        ValueStart => match byte {
            b' ' | b'\t' => (ValueStart, Skip),
            b'\n' => (Init, Skip),
            _ => (Value, Accumulate),
        },
        Value => match byte {
            b'\n' => (Init, Emit(TokenKind::Value)),
            _ => (Value, Accumulate),
        },
        ScopeStart => match byte {
            b'\n' => (ScopeEntryInit, Emit(TokenKind::ScopeName)),
            _ => (ScopeStart, Accumulate),
        },
        ScopeEntryInit => match byte {
            b' ' | b'\t' => (ScopeEntryNameStart, Skip),
            b'\n' => (ScopeEntryInit, Skip),
            // dedent: the stanza is over and this byte starts a top-level key
            _ => (Name, Accumulate),
        },
        ScopeEntryNameStart => match byte {
            b' ' | b'\t' => (ScopeEntryNameStart, Skip),
            b'\n' => (ScopeEntryInit, Skip),
            b',' => (ScopeEntryValueStart, Skip),
            _ => (ScopeEntryName, Accumulate),
        },
        ScopeEntryName => match byte {
            b':' => (ScopeEntryValueStart, Emit(TokenKind::Key)),
            b'\n' => (ScopeEntryInit, Emit(TokenKind::Value)),
            b',' => (ScopeEntryValueStart, Emit(TokenKind::Value)),
            _ => (ScopeEntryName, Accumulate),
        },
        ScopeEntryValueStart => match byte {
            b' ' | b'\t' | b',' => (ScopeEntryValueStart, Skip),
            // empty inline value: the next line decides between a value and a dedent
            b'\n' => (ScopeEntryInit, Skip),
            _ => (ScopeEntryValue, Accumulate),
        },
        ScopeEntryValue => match byte {
            b'\n' => (ScopeEntryInit, Emit(TokenKind::Value)),
            b',' => (ScopeEntryValueStart, Emit(TokenKind::Value)),
            _ => (ScopeEntryValue, Accumulate),
        },
    }
}

/// The token a state flushes when input ends mid-line.
fn pending_kind(state: ScanState) -> Option<TokenKind> {
    match state {
        ScanState::Name => Some(TokenKind::Key),
        ScanState::ScopeStart => Some(TokenKind::ScopeName),
        ScanState::Value | ScanState::ScopeEntryName | ScanState::ScopeEntryValue => {
            Some(TokenKind::Value)
        }
        ScanState::Init
        | ScanState::ValueStart
        | ScanState::ScopeEntryInit
        | ScanState::ScopeEntryNameStart
        | ScanState::ScopeEntryValueStart => None,
    }
}

/// Incremental scanner over a byte stream.
#[derive(Debug)]
pub struct Scanner {
    state: ScanState,
    buf: Vec<u8>,
    tokens: Vec<Token>,
    read_buffer_size: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner {
            state: ScanState::Init,
            buf: Vec::new(),
            tokens: Vec::new(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl Scanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size of the buffer used for each read.
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size.max(1);
        self
    }

    /// Scan a whole stream into tokens.
    ///
    /// Only a failing read can make this return an error; malformed text
    /// always produces some token sequence.
    pub fn scan<R: Read>(mut self, mut reader: R) -> io::Result<Vec<Token>> {
        let mut chunk = vec![0u8; self.read_buffer_size];

        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            for &byte in &chunk[..n] {
                self.feed(byte);
            }
        }

        Ok(self.finish())
    }

    /// Scan an in-memory string.
    pub fn scan_str(self, input: &str) -> Vec<Token> {
        let mut scanner = self;
        for byte in input.bytes() {
            scanner.feed(byte);
        }
        scanner.finish()
    }

    fn feed(&mut self, byte: u8) {
        if byte == b'\r' {
            return;
        }

        let (next, action) = transition(self.state, byte);
        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, "scanner transition");
        }

        match action {
            Action::Skip => {}
            Action::Accumulate => self.buf.push(byte),
            Action::Emit(kind) => self.emit(kind, byte == b','),
        }

        self.state = next;
    }

    fn emit(&mut self, kind: TokenKind, comma_terminated: bool) {
        let raw = String::from_utf8_lossy(&self.buf);
        let text = match kind {
            TokenKind::Key | TokenKind::ScopeName => raw.trim(),
            TokenKind::Value if comma_terminated => raw.trim_end_matches([' ', '\t']),
            TokenKind::Value => raw.as_ref(),
        };

        self.tokens.push(Token::new(kind, text));
        self.buf.clear();
    }

    fn finish(mut self) -> Vec<Token> {
        if let Some(kind) = pending_kind(self.state) {
            self.emit(kind, false);
        }

        tracing::debug!("scanned {} tokens", self.tokens.len());
        self.tokens
    }
}
