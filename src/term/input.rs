//! Literal character handling: control characters and the
//! write-and-advance path.

use crate::cell::Cell;
use crate::event::{Event, EventListener};
use crate::index::{Column, Line};

use super::Term;

/// Fixed tab stops every 8 columns.
const TAB_WIDTH: usize = 8;

impl<T: EventListener> Term<T> {
    /// Interpret one literal character.
    pub(super) fn input(&mut self, c: char) {
        match c {
            // BEL: no buffer effect; the host decides what a bell is.
            '\x07' => self.event_listener.send_event(Event::Bell),
            '\r' => self.cursor.set_col(Column(0)),
            // Bare line feed: no implied carriage return.
            '\n' => self.linefeed(),
            '\t' => self.tab(),
            '\x08' => self.backspace(),
            // An escape that survived to this layer came from the
            // literal-fallback path; render it as a visible caret.
            '\x1b' => self.put_char('^'),
            _ => self.put_char(c),
        }
    }

    /// Write a character at the cursor and advance, wrapping at the
    /// right edge.
    fn put_char(&mut self, ch: char) {
        let point = self.cursor.point();
        self.grid[point.line][point.column] = Some(Cell::new(ch, self.pen.fg));

        let col = point.column.0 + 1;
        if col < self.grid.cols() {
            self.cursor.set_col(Column(col));
        } else {
            self.cursor.set_col(Column(0));
            self.linefeed();
        }
    }

    /// Move down one line, stopping at the bottom of the buffer.
    fn linefeed(&mut self) {
        let line = (self.cursor.line().0 + 1).min(self.grid.lines() - 1);
        self.cursor.set_line(Line(line));
    }

    /// Advance to the next multiple of `TAB_WIDTH` strictly greater than
    /// the current column, stopping at the last column.
    fn tab(&mut self) {
        let col = self.cursor.col().0;
        let next = col + (TAB_WIDTH - col % TAB_WIDTH);
        self.cursor.set_col(Column(next.min(self.grid.cols() - 1)));
    }

    /// Move the cursor back one position and clear what it lands on.
    ///
    /// At column 0 the cursor climbs to the previous line, landing just
    /// right of that line's rightmost written cell (column 0 if the line
    /// is empty). At the origin there is nowhere to go, but the cell
    /// under the cursor is still cleared.
    fn backspace(&mut self) {
        let col = self.cursor.col().0;
        if col > 0 {
            self.cursor.set_col(Column(col - 1));
        } else if self.cursor.line().0 > 0 {
            let line = Line(self.cursor.line().0 - 1);
            self.cursor.set_line(line);
            let col = self.grid[line]
                .last_occupied()
                .map_or(0, |c| c.0 + 1)
                .min(self.grid.cols() - 1);
            self.cursor.set_col(Column(col));
        }

        let point = self.cursor.point();
        self.grid[point.line][point.column] = None;
    }
}
