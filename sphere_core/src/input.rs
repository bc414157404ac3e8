//! # Token Input
//!
//! Reads whitespace-delimited tokens from any [`BufRead`] source, one line at
//! a time. Several values may share a line; a value may also be followed by
//! blank lines. Each read consumes exactly one token, so a bad token never
//! swallows the values typed after it. Lines are read as raw bytes; a token
//! that is not valid UTF-8 is decoded lossily and then fails to parse like
//! any other malformed token.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        TokenReader {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> CalcResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            let read = self
                .source
                .read_until(b'\n', &mut line)
                .map_err(|e| CalcError::io("read input", &e))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Read one token and parse it as `T`.
    ///
    /// * `Err(CalcError::MalformedInput)` - the token was consumed but did not parse
    /// * `Err(CalcError::InputExhausted)` - no token left for `field`
    pub fn next_value<T: FromStr>(&mut self, field: &str) -> CalcResult<T> {
        let token = self
            .next_token()?
            .ok_or_else(|| CalcError::input_exhausted(field))?;
        match token.parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(CalcError::malformed_input(field, token)),
        }
    }
}
