//! Type-safe index newtypes for grid coordinates.
//!
//! `Line` and `Column` prevent mixing up row/column values at compile time.
//! `Point` combines them into a grid coordinate. Both indices are 0-based
//! and unsigned: the grid's full height is addressable directly, history
//! rows included.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Generate arithmetic and conversion impls for a newtype index wrapper.
macro_rules! index_ops {
    ($ty:ident, $inner:ty) => {
        impl From<$inner> for $ty {
            fn from(val: $inner) -> Self {
                Self(val)
            }
        }

        impl From<$ty> for $inner {
            fn from(val: $ty) -> Self {
                val.0
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

/// Unsigned line index (0-based, top of the grid first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Line(pub usize);

index_ops!(Line, usize);

/// Unsigned column index (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Column(pub usize);

index_ops!(Column, usize);

/// A grid coordinate combining a line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub line: Line,
    pub column: Column,
}

impl Point {
    /// Create a new point at the given line and column.
    pub fn new(line: Line, column: Column) -> Self {
        Self { line, column }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.line.cmp(&other.line) {
            Ordering::Equal => self.column.cmp(&other.column),
            ord => ord,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, Line, Point};

    #[test]
    fn line_arithmetic() {
        assert_eq!(Line(5) + Line(3), Line(8));
        assert_eq!(Line(5) - Line(3), Line(2));
    }

    #[test]
    fn line_assign_arithmetic() {
        let mut l = Line(5);
        l += Line(3);
        assert_eq!(l, Line(8));
        l -= Line(2);
        assert_eq!(l, Line(6));
    }

    #[test]
    fn line_conversions() {
        assert_eq!(Line::from(42_usize), Line(42));
        assert_eq!(usize::from(Line(42)), 42);
    }

    #[test]
    fn column_arithmetic() {
        assert_eq!(Column(5) + Column(3), Column(8));
        assert_eq!(Column(5) - Column(3), Column(2));
    }

    #[test]
    fn column_display() {
        assert_eq!(format!("{}", Column(7)), "7");
        assert_eq!(format!("{}", Line(3)), "3");
    }

    #[test]
    fn point_ordering() {
        let a = Point::new(Line(0), Column(5));
        let b = Point::new(Line(1), Column(0));
        let c = Point::new(Line(0), Column(10));

        // Line takes priority over column.
        assert!(a < b);
        // Same line: column breaks the tie.
        assert!(a < c);
        // Equality.
        assert_eq!(a, Point::new(Line(0), Column(5)));
    }
}
