//! Core terminal control-sequence interpretation.
//!
//! This crate turns the raw character stream produced by a
//! pseudo-terminal into mutations of an addressable screen buffer. It
//! recognizes a subset of ANSI/VT CSI sequences (cursor placement,
//! screen/line erase, and an SGR color/bold subset) and falls back to
//! literal text for anything else — a malformed sequence's bytes are
//! replayed character-for-character, never dropped. It contains no GUI,
//! rendering, pty, or platform-specific code.
//!
//! Data flow: raw chars → [`Tokenizer`] → [`Token`] stream →
//! [`Term`] → [`Grid`] mutation → [`Viewport`] → renderer (external,
//! read-only via [`Screen`]).

#![deny(unsafe_code)]

pub mod ansi;
pub mod cell;
pub mod color;
pub mod event;
pub mod grid;
pub mod index;
pub mod term;

pub use ansi::{
    LineClearMode, Progress, ScreenClearMode, SequenceParser, Token, TokenSink, Tokenizer,
};
pub use cell::Cell;
pub use color::{NamedColor, Palette, Rgb};
pub use event::{Event, EventListener, VoidListener};
pub use grid::{Grid, Row, Screen, Viewport};
pub use index::{Column, Line, Point};
pub use term::{AttrFlags, Cursor, Pen, Term};
