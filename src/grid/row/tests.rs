use crate::cell::Cell;
use crate::color::DEFAULT_FG;
use crate::index::Column;

use super::Row;

fn written(ch: char) -> Option<Cell> {
    Some(Cell::new(ch, DEFAULT_FG))
}

#[test]
fn new_row_is_empty() {
    let row = Row::new(10);
    assert_eq!(row.cols(), 10);
    for col in 0..10 {
        assert_eq!(row[Column(col)], None);
    }
}

#[test]
fn index_mut_writes_cells() {
    let mut row = Row::new(4);
    row[Column(2)] = written('x');
    assert_eq!(row[Column(2)].unwrap().ch, 'x');
    assert_eq!(row[Column(1)], None);
}

#[test]
fn reset_clears_everything() {
    let mut row = Row::new(4);
    row[Column(0)] = written('a');
    row[Column(3)] = written('b');
    row.reset();
    assert_eq!(row.last_occupied(), None);
}

#[test]
fn clear_range_is_half_open() {
    let mut row = Row::new(5);
    for col in 0..5 {
        row[Column(col)] = written('x');
    }
    row.clear_range(Column(1)..Column(3));
    assert!(row[Column(0)].is_some());
    assert_eq!(row[Column(1)], None);
    assert_eq!(row[Column(2)], None);
    assert!(row[Column(3)].is_some());
    assert!(row[Column(4)].is_some());
}

#[test]
fn clear_range_caps_at_row_width() {
    let mut row = Row::new(3);
    row[Column(2)] = written('x');
    row.clear_range(Column(1)..Column(100));
    assert_eq!(row.last_occupied(), None);
}

#[test]
fn clear_range_ignores_empty_and_inverted_ranges() {
    let mut row = Row::new(3);
    row[Column(1)] = written('x');
    row.clear_range(Column(2)..Column(2));
    row.clear_range(Column(2)..Column(1));
    assert_eq!(row.last_occupied(), Some(Column(1)));
}

#[test]
fn last_occupied_finds_rightmost_cell() {
    let mut row = Row::new(8);
    row[Column(0)] = written('a');
    row[Column(4)] = written('b');
    assert_eq!(row.last_occupied(), Some(Column(4)));
}

#[test]
fn last_occupied_sees_written_spaces() {
    // A written space is content; only never-written cells are empty.
    let mut row = Row::new(8);
    row[Column(3)] = written(' ');
    assert_eq!(row.last_occupied(), Some(Column(3)));
}
