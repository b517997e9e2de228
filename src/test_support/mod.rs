//! Test utilities for the scanner and parser unit tests.
//!
//! Provides token builders, manifest fixtures, and readers that misbehave
//! in controlled ways (short reads, failing reads).

pub mod fixtures;

use std::io::{self, Read};

use crate::parser::token::Token;

// Re-export fixtures for convenience
pub use fixtures::*;

/// Build a Key token.
pub fn key(text: &str) -> Token {
    Token::key(text)
}

/// Build a Value token.
pub fn value(text: &str) -> Token {
    Token::value(text)
}

/// Build a ScopeName token.
pub fn scope(text: &str) -> Token {
    Token::scope_name(text)
}

/// Reader that hands out at most two bytes per `read` call and
/// interrupts every other call.
#[derive(Debug)]
pub struct TrickleReader<'a> {
    data: &'a [u8],
    interrupt: bool,
}

impl<'a> TrickleReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        TrickleReader {
            data,
            interrupt: false,
        }
    }
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt && !self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
        }

        let n = buf.len().min(2).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that yields some data and then fails.
#[derive(Debug)]
pub struct BrokenReader<'a> {
    data: &'a [u8],
}

impl<'a> BrokenReader<'a> {
    pub fn after(data: &'a [u8]) -> Self {
        BrokenReader { data }
    }
}

impl Read for BrokenReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"));
        }

        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
