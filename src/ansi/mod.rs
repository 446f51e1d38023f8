//! ANSI/VT control-sequence recognition.
//!
//! The pipeline has two halves: [`SequenceParser`] consumes the
//! characters following an ESC introducer and yields decoded [`Token`]s
//! on completion, and [`Tokenizer`] drives parsers across the live
//! character stream, falling back to literal text whenever a sequence is
//! malformed or unsupported. The fallback path replays every consumed
//! character, so no input is ever dropped.

pub mod parser;
pub mod token;
pub mod tokenizer;

pub use parser::{Progress, SequenceParser};
pub use token::{LineClearMode, ScreenClearMode, Token};
pub use tokenizer::{TokenSink, Tokenizer};
