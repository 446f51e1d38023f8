//! Pen state: the attributes applied to newly written cells.

use bitflags::bitflags;

use crate::color::{DEFAULT_FG, NamedColor, Rgb};
use crate::event::EventListener;

use super::Term;

bitflags! {
    /// Pen attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AttrFlags: u8 {
        const BOLD = 1 << 0;
    }
}

impl Default for AttrFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// The interpreter's current write attributes.
///
/// The foreground is fully resolved: bold participates when a color is
/// *selected*, not when a cell is written, so changing bold alone never
/// recolors anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    /// Resolved foreground color for new cells.
    pub fg: Rgb,
    /// Attribute flags.
    pub flags: AttrFlags,
}

impl Default for Pen {
    fn default() -> Self {
        Self { fg: DEFAULT_FG, flags: AttrFlags::empty() }
    }
}

impl<T: EventListener> Term<T> {
    /// SGR 0: the foreground returns to the default. The bold flag is
    /// deliberately left as-is; it only gates bright-variant selection
    /// at the next color change.
    pub(super) fn reset_attrs(&mut self) {
        self.pen.fg = DEFAULT_FG;
    }

    /// SGR 1: set or clear bold.
    pub(super) fn set_bold(&mut self, set: bool) {
        self.pen.flags.set(AttrFlags::BOLD, set);
    }

    /// SGR 30–37: select a base color. Background selection is accepted
    /// but has no visible effect in this model.
    pub(super) fn set_color(&mut self, name: NamedColor, foreground: bool) {
        if foreground {
            let bold = self.pen.flags.contains(AttrFlags::BOLD);
            self.pen.fg = self.palette.resolve(name, bold);
        }
    }
}
