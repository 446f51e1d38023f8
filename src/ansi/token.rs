//! Decoded control-stream operations.

use crate::color::NamedColor;

/// Which part of the screen a `ClearScreen` token erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClearMode {
    /// From the cursor to the end of the screen.
    Below,
    /// From the start of the screen to the cursor (exclusive).
    Above,
    /// The whole screen; the cursor homes to the origin.
    All,
    /// The whole screen including scrollback; the cursor stays put.
    AllAndScrollback,
}

/// Which part of the cursor line a `ClearLine` token erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClearMode {
    /// From the start of the line to the cursor (exclusive).
    Left,
    /// From the cursor to the end of the line.
    Right,
    /// The whole line.
    All,
}

/// One decoded operation from the control stream.
///
/// Tokens are transient: produced by the tokenizer, consumed by the
/// interpreter within the same step, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A literal character, including control characters and replayed
    /// bytes from unrecognized sequences.
    Char(char),
    /// CUP/HVP cursor placement; coordinates are 1-indexed as received.
    SetCursor { line: u16, col: u16 },
    /// ED: erase part or all of the screen.
    ClearScreen(ScreenClearMode),
    /// EL: erase part or all of the cursor line.
    ClearLine(LineClearMode),
    /// SGR 0: reset the foreground to the default.
    ResetAttrs,
    /// SGR 1: set or clear the bold flag.
    SetBold(bool),
    /// SGR 30–37: select a base color.
    SetColor { name: NamedColor, foreground: bool },
}
