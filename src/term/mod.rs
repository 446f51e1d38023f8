//! Terminal interpreter state machine.
//!
//! `Term<T: EventListener>` owns the grid, the cursor, the pen (current
//! write attributes), and the color palette, and applies decoded
//! [`Token`]s as atomic buffer mutations. It is the grid's only writer.
//! Generic over `EventListener` so tests can use `VoidListener` while a
//! real host routes events into its UI loop.

pub mod attr;
pub mod cursor;
mod erase;
mod input;

use crate::ansi::{Token, TokenSink};
use crate::color::Palette;
use crate::event::EventListener;
use crate::grid::Grid;

pub use attr::{AttrFlags, Pen};
pub use cursor::Cursor;

/// The terminal interpreter.
#[derive(Debug)]
pub struct Term<T: EventListener> {
    /// The screen buffer; its height is the total scrollback capacity.
    grid: Grid,
    /// Current write position.
    cursor: Cursor,
    /// Current write attributes.
    pen: Pen,
    /// Immutable color table for SGR resolution.
    palette: Palette,
    /// Event sink for out-of-band signals (bell).
    event_listener: T,
}

impl<T: EventListener> Term<T> {
    /// Create a new interpreter over an empty `lines × cols` grid, with
    /// the cursor at the origin and the default pen.
    pub fn new(lines: usize, cols: usize, listener: T) -> Self {
        Self {
            grid: Grid::new(lines, cols),
            cursor: Cursor::default(),
            pen: Pen::default(),
            palette: Palette::default(),
            event_listener: listener,
        }
    }

    /// Reference to the grid, for renderers and viewports.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current write attributes.
    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Reference to the event listener.
    pub fn event_listener(&self) -> &T {
        &self.event_listener
    }

    /// Apply one decoded token to the screen.
    ///
    /// Each application is a single atomic mutation of the buffer plus
    /// cursor/pen update. The dispatch is exhaustive: a new token
    /// variant is a compile error here, never a silent drop.
    pub fn apply(&mut self, token: Token) {
        match token {
            Token::Char(c) => self.input(c),
            Token::SetCursor { line, col } => self.goto(line, col),
            Token::ClearScreen(mode) => self.clear_screen(mode),
            Token::ClearLine(mode) => self.clear_line(mode),
            Token::ResetAttrs => self.reset_attrs(),
            Token::SetBold(set) => self.set_bold(set),
            Token::SetColor { name, foreground } => self.set_color(name, foreground),
        }
    }
}

/// Live-path wiring: a tokenizer can drive the interpreter directly.
impl<T: EventListener> TokenSink for Term<T> {
    fn emit(&mut self, token: Token) {
        self.apply(token);
    }
}
