//! Screen and line erase operations.

use crate::ansi::{LineClearMode, ScreenClearMode};
use crate::event::EventListener;
use crate::index::{Column, Line};

use super::Term;

impl<T: EventListener> Term<T> {
    /// ED: erase part or all of the screen.
    pub(super) fn clear_screen(&mut self, mode: ScreenClearMode) {
        match mode {
            ScreenClearMode::Below => {
                self.clear_line(LineClearMode::Right);
                for line in self.cursor.line().0 + 1..self.grid.lines() {
                    self.grid[Line(line)].reset();
                }
            }
            ScreenClearMode::Above => {
                for line in 0..self.cursor.line().0 {
                    self.grid[Line(line)].reset();
                }
                self.clear_line(LineClearMode::Left);
            }
            ScreenClearMode::All => {
                self.grid.reset_all();
                self.cursor.set_line(Line(0));
                self.cursor.set_col(Column(0));
            }
            // The whole buffer is the scrollback; the cursor stays put.
            ScreenClearMode::AllAndScrollback => self.grid.reset_all(),
        }
    }

    /// EL: erase part or all of the cursor line.
    ///
    /// `Left` excludes the cursor cell; `Right` includes it.
    pub(super) fn clear_line(&mut self, mode: LineClearMode) {
        let line = self.cursor.line();
        let col = self.cursor.col();
        let cols = self.grid.cols();

        match mode {
            LineClearMode::Left => self.grid[line].clear_range(Column(0)..col),
            LineClearMode::Right => self.grid[line].clear_range(col..Column(cols)),
            LineClearMode::All => self.grid[line].reset(),
        }
    }
}
