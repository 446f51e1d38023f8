//! Stream-level tokenization with literal fallback.
//!
//! The `Tokenizer` owns at most one live [`SequenceParser`] and feeds it
//! every character that follows an ESC. Whenever a sequence fails — or
//! completes but decodes to nothing — the escape and every consumed
//! character are replayed as literal [`Token::Char`]s, in order. Total
//! ordering is preserved and no input character is ever silently
//! dropped.

use log::trace;

use super::parser::{Progress, SequenceParser};
use super::token::Token;

/// The escape introducer.
pub const ESC: char = '\u{1b}';

/// Receives decoded tokens from the [`Tokenizer`].
///
/// This is the seam between recognition and interpretation: the
/// interpreter implements it for the live path, and `Vec<Token>`
/// implements it so tests can collect output directly.
pub trait TokenSink {
    fn emit(&mut self, token: Token);
}

impl TokenSink for Vec<Token> {
    fn emit(&mut self, token: Token) {
        self.push(token);
    }
}

/// Drives escape-sequence parsers across the live character stream.
#[derive(Debug, Default)]
pub struct Tokenizer {
    parser: Option<SequenceParser>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one character, emitting any resulting tokens into `sink`.
    pub fn advance<S: TokenSink>(&mut self, c: char, sink: &mut S) {
        if c == ESC {
            // An escape aborts any in-flight sequence before starting a
            // fresh one.
            if let Some(parser) = self.parser.take() {
                flush(&parser, sink);
            }
            self.parser = Some(SequenceParser::new());
            return;
        }

        let Some(parser) = &mut self.parser else {
            sink.emit(Token::Char(c));
            return;
        };

        match parser.process(c) {
            Progress::Continue => {}
            Progress::Fail => {
                if let Some(parser) = self.parser.take() {
                    flush(&parser, sink);
                }
            }
            Progress::Complete => {
                if let Some(parser) = self.parser.take() {
                    match parser.tokens() {
                        Some(tokens) => {
                            for token in tokens {
                                sink.emit(token);
                            }
                        }
                        // A recognized terminator with unsupported
                        // content falls back exactly like a failure.
                        None => flush(&parser, sink),
                    }
                }
            }
        }
    }

    /// Process a slice of raw bytes; each byte is one character.
    pub fn advance_bytes<S: TokenSink>(&mut self, bytes: &[u8], sink: &mut S) {
        for &byte in bytes {
            self.advance(char::from(byte), sink);
        }
    }
}

/// Replay an abandoned sequence as literal characters.
fn flush<S: TokenSink>(parser: &SequenceParser, sink: &mut S) {
    trace!("replaying unrecognized sequence as text: {:?}", parser.raw_chars());
    sink.emit(Token::Char(ESC));
    for &c in parser.raw_chars() {
        sink.emit(Token::Char(c));
    }
}
