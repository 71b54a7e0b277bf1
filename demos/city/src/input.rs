//! Whitespace-separated token reader for interactive prompts.
//!
//! Tokens may arrive one per line or several on a line; a prompt asking for
//! three numbers accepts either form.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("end of input")]
    Eof,

    #[error("expected {expected}, got {token:?}")]
    Invalid { expected: &'static str, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub struct Tokens<R> {
    reader:  R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new() }
    }

    /// Next token, reading further lines as needed.
    pub fn token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Eof);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Next token parsed as `T`.  `expected` names the value in the error.
    pub fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.token()?;
        token.parse().map_err(|_| InputError::Invalid { expected, token })
    }

    /// Next token as a finite `f64`; `nan` and `inf` are rejected like any
    /// other unreadable number.
    pub fn coordinate(&mut self, expected: &'static str) -> Result<f64, InputError> {
        let token = self.token()?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(InputError::Invalid { expected, token }),
        }
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
