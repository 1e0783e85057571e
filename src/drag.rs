//! Pointer geometry for drag painting.
//!
//! Converts raw pointer positions into cell coordinates, snaps drag
//! movement onto a cardinal axis through the press position, and tracks
//! the span of covered cells so the game loop can tell an incremental
//! extend or retract apart from a full resync.

use crate::key::Axis;

/// A pointer position in board-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel geometry of the rendered board.
///
/// Maps pointer positions onto cells. Cells are square; cell `(0, 0)`
/// owns the pixel rectangle `[0, cell_size) x [0, cell_size)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    cell_size: f32,
}

impl CellMetrics {
    /// Default edge length of one cell, in pixels.
    pub const DEFAULT_CELL_SIZE: f32 = 18.0;

    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The `(row, col)` under `point`, or `None` when the point falls
    /// outside a `rows` x `cols` board.
    pub fn cell_at(&self, point: Point, rows: usize, cols: usize) -> Option<(usize, usize)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let row = (point.y / self.cell_size) as usize;
        let col = (point.x / self.cell_size) as usize;
        if row >= rows || col >= cols {
            return None;
        }
        Some((row, col))
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_SIZE)
    }
}

/// Snap `position` onto the cardinal axis through `origin` with the larger
/// displacement.
///
/// Horizontal movement wins the row axis only on a strict majority; ties
/// snap to the column axis. Returns the snapped point and the axis the
/// drag is following.
pub fn snap_to_cardinal(origin: Point, position: Point) -> (Point, Axis) {
    let dx = (position.x - origin.x).abs();
    let dy = (position.y - origin.y).abs();
    if dx > dy {
        (Point::new(position.x, origin.y), Axis::Row)
    } else {
        (Point::new(origin.x, position.y), Axis::Column)
    }
}

/// Which side of the anchor a span extends toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward greater row/column indices.
    Forward,
    /// Toward lesser row/column indices.
    Backward,
}

/// How the latest pointer position reshaped the drag span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanChange {
    /// Same cells as before.
    Unchanged,
    /// One cell longer at the far end.
    Extend,
    /// One cell shorter at the far end.
    Retract,
    /// Back on the anchor cell after having dragged away.
    Clear,
    /// Any other reshaping: axis switch, direction flip, multi-cell jump.
    Resync,
}

/// The cells a drag gesture currently covers beyond its anchor.
///
/// A span is a straight run of `length` cells leaving the anchor along
/// `axis` in `direction`; the anchor itself is never part of the span.
/// `length == 0` is the empty span (pointer still over the anchor cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    axis: Axis,
    direction: Direction,
    length: usize,
}

impl Span {
    /// The empty span: the pointer has not left the anchor cell.
    pub const fn empty() -> Self {
        Self { axis: Axis::Row, direction: Direction::Forward, length: 0 }
    }

    /// Span from `anchor` to `end` (inclusive) along `axis`.
    ///
    /// Both cells must already lie on the same line; the snapping step
    /// guarantees that for pointer input.
    pub fn between(anchor: (usize, usize), end: (usize, usize), axis: Axis) -> Self {
        let (from, to) = match axis {
            Axis::Row => (anchor.1, end.1),
            Axis::Column => (anchor.0, end.0),
        };
        let direction = if to >= from { Direction::Forward } else { Direction::Backward };
        Self { axis, direction, length: to.abs_diff(from) }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Cells covered by the span, nearest to the anchor first.
    pub fn cells(&self, anchor: (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
        let (row, col) = anchor;
        let (axis, direction) = (self.axis, self.direction);
        (1..=self.length).map(move |k| match (axis, direction) {
            (Axis::Row, Direction::Forward) => (row, col + k),
            (Axis::Row, Direction::Backward) => (row, col - k),
            (Axis::Column, Direction::Forward) => (row + k, col),
            (Axis::Column, Direction::Backward) => (row - k, col),
        })
    }

    /// The farthest covered cell, or `None` for the empty span.
    pub fn end(&self, anchor: (usize, usize)) -> Option<(usize, usize)> {
        self.cells(anchor).last()
    }

    /// Classify the move from this span to `new`.
    pub fn change_to(&self, new: &Span) -> SpanChange {
        if new.length == 0 {
            return if self.length == 0 { SpanChange::Unchanged } else { SpanChange::Clear };
        }
        if self.length == 0 {
            return if new.length == 1 { SpanChange::Extend } else { SpanChange::Resync };
        }
        if new.axis != self.axis || new.direction != self.direction {
            return SpanChange::Resync;
        }
        match new.length {
            l if l == self.length => SpanChange::Unchanged,
            l if l == self.length + 1 => SpanChange::Extend,
            l if l + 1 == self.length => SpanChange::Retract,
            _ => SpanChange::Resync,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_pixels_to_cells() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.cell_at(Point::new(0.0, 0.0), 5, 5), Some((0, 0)));
        assert_eq!(metrics.cell_at(Point::new(17.9, 0.0), 5, 5), Some((0, 0)));
        assert_eq!(metrics.cell_at(Point::new(18.0, 0.0), 5, 5), Some((0, 1)));
        assert_eq!(metrics.cell_at(Point::new(30.0, 40.0), 5, 5), Some((2, 1)));
    }

    #[test]
    fn test_cell_at_rejects_points_off_the_board() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.cell_at(Point::new(-0.1, 5.0), 5, 5), None);
        assert_eq!(metrics.cell_at(Point::new(5.0, -3.0), 5, 5), None);
        assert_eq!(metrics.cell_at(Point::new(90.0, 0.0), 5, 5), None);
        assert_eq!(metrics.cell_at(Point::new(0.0, 90.0), 5, 5), None);
    }

    #[test]
    fn test_snap_strict_majority_wins_row_axis() {
        let origin = Point::new(9.0, 9.0);
        let (snapped, axis) = snap_to_cardinal(origin, Point::new(50.0, 12.0));
        assert_eq!(axis, Axis::Row);
        assert_eq!(snapped, Point::new(50.0, 9.0));
    }

    #[test]
    fn test_snap_tie_goes_to_column_axis() {
        let origin = Point::new(9.0, 9.0);
        let (snapped, axis) = snap_to_cardinal(origin, Point::new(14.0, 14.0));
        assert_eq!(axis, Axis::Column);
        assert_eq!(snapped, Point::new(9.0, 14.0));

        let (snapped, axis) = snap_to_cardinal(origin, Point::new(10.0, 40.0));
        assert_eq!(axis, Axis::Column);
        assert_eq!(snapped, Point::new(9.0, 40.0));
    }

    #[test]
    fn test_span_between_measures_length_and_direction() {
        let span = Span::between((2, 2), (2, 5), Axis::Row);
        assert_eq!(span.len(), 3);
        assert_eq!(span.direction(), Direction::Forward);

        let span = Span::between((4, 1), (1, 1), Axis::Column);
        assert_eq!(span.len(), 3);
        assert_eq!(span.direction(), Direction::Backward);

        assert!(Span::between((3, 3), (3, 3), Axis::Row).is_empty());
    }

    #[test]
    fn test_span_cells_walk_out_from_anchor() {
        let span = Span::between((2, 2), (2, 5), Axis::Row);
        let cells: Vec<_> = span.cells((2, 2)).collect();
        assert_eq!(cells, vec![(2, 3), (2, 4), (2, 5)]);
        assert_eq!(span.end((2, 2)), Some((2, 5)));

        let span = Span::between((4, 1), (2, 1), Axis::Column);
        let cells: Vec<_> = span.cells((4, 1)).collect();
        assert_eq!(cells, vec![(3, 1), (2, 1)]);

        assert_eq!(Span::empty().end((0, 0)), None);
    }

    #[test]
    fn test_change_extend_and_retract_by_one() {
        let anchor = (0, 0);
        let one = Span::between(anchor, (0, 1), Axis::Row);
        let two = Span::between(anchor, (0, 2), Axis::Row);
        assert_eq!(one.change_to(&two), SpanChange::Extend);
        assert_eq!(two.change_to(&one), SpanChange::Retract);
        assert_eq!(two.change_to(&two), SpanChange::Unchanged);
    }

    #[test]
    fn test_change_from_empty_span() {
        let anchor = (3, 3);
        let empty = Span::empty();
        let one = Span::between(anchor, (3, 4), Axis::Row);
        let jump = Span::between(anchor, (3, 6), Axis::Row);
        assert_eq!(empty.change_to(&one), SpanChange::Extend);
        assert_eq!(empty.change_to(&jump), SpanChange::Resync);
        assert_eq!(empty.change_to(&Span::empty()), SpanChange::Unchanged);
    }

    #[test]
    fn test_change_back_to_anchor_clears() {
        let anchor = (3, 3);
        let two = Span::between(anchor, (3, 5), Axis::Row);
        assert_eq!(two.change_to(&Span::empty()), SpanChange::Clear);
    }

    #[test]
    fn test_change_axis_or_direction_flip_resyncs() {
        let anchor = (3, 3);
        let row = Span::between(anchor, (3, 5), Axis::Row);
        let col = Span::between(anchor, (5, 3), Axis::Column);
        let back = Span::between(anchor, (3, 1), Axis::Row);
        assert_eq!(row.change_to(&col), SpanChange::Resync);
        assert_eq!(row.change_to(&back), SpanChange::Resync);
    }

    #[test]
    fn test_change_multi_cell_jump_resyncs() {
        let anchor = (0, 0);
        let one = Span::between(anchor, (0, 1), Axis::Row);
        let four = Span::between(anchor, (0, 4), Axis::Row);
        assert_eq!(one.change_to(&four), SpanChange::Resync);
        assert_eq!(four.change_to(&one), SpanChange::Resync);
    }
}
