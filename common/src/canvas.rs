use strum::IntoEnumIterator;

use crate::geometry::Line;
use crate::maze::{Cell, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stroke {
    Wall,   // A wall that is present.
    Erased, // A wall that has been carved away.
    Move,   // Solver stepping forward.
    Undo,   // Solver backing out of a dead end.
}

/// Where the maze draws itself while it is being built and solved.
///
/// Only `draw_line` is required. The other calls are built on top of it and
/// are free to be invoked as often as the core likes, so implementations
/// should keep them cheap.
pub trait Canvas {
    fn draw_line(&mut self, line: Line, stroke: Stroke);

    /// Flush whatever has been drawn so far. Called once per observable step.
    fn refresh(&mut self) {}

    fn draw_cell_walls(&mut self, cell: &Cell) {
        for side in Side::iter() {
            let stroke = if cell.has_wall(side) {
                Stroke::Wall
            } else {
                Stroke::Erased
            };
            self.draw_line(cell.edge(side), stroke);
        }
    }

    fn draw_move(&mut self, from: &Cell, to: &Cell, undo: bool) {
        let stroke = if undo { Stroke::Undo } else { Stroke::Move };
        self.draw_line(Line::new(from.centerpoint(), to.centerpoint()), stroke);
        self.refresh();
    }
}

/// The canvas used when nothing is watching.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Canvas for Headless {
    fn draw_line(&mut self, _line: Line, _stroke: Stroke) {}

    fn draw_cell_walls(&mut self, _cell: &Cell) {}

    fn draw_move(&mut self, _from: &Cell, _to: &Cell, _undo: bool) {}
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        (**self).draw_line(line, stroke);
    }

    fn refresh(&mut self) {
        (**self).refresh();
    }

    fn draw_cell_walls(&mut self, cell: &Cell) {
        (**self).draw_cell_walls(cell);
    }

    fn draw_move(&mut self, from: &Cell, to: &Cell, undo: bool) {
        (**self).draw_move(from, to, undo);
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;
    use crate::geometry::Bounds;

    #[derive(Default)]
    struct MockCanvas {
        lines: Vec<(Line, Stroke)>,
        refreshes: usize,
    }

    impl Canvas for MockCanvas {
        fn draw_line(&mut self, line: Line, stroke: Stroke) {
            self.lines.push((line, stroke));
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    fn cell_at(x: f32, y: f32) -> Cell {
        Cell::new(Bounds::from_corners(vec2(x, y), vec2(x + 10.0, y + 10.0)))
    }

    #[test]
    fn cell_walls_are_drawn_with_stroke_keyed_by_presence() {
        let mut canvas = MockCanvas::default();
        let mut cell = cell_at(0.0, 0.0);
        cell.set_wall(Side::Top, false);
        cell.set_wall(Side::Right, false);

        canvas.draw_cell_walls(&cell);

        assert_eq!(canvas.lines.len(), 4);
        for (line, stroke) in &canvas.lines {
            let expected = if *line == cell.edge(Side::Top) || *line == cell.edge(Side::Right) {
                Stroke::Erased
            } else {
                Stroke::Wall
            };
            assert_eq!(*stroke, expected, "wrong stroke for {:?}", line);
        }
        assert_eq!(canvas.refreshes, 0);
    }

    #[test]
    fn moves_join_centerpoints_and_refresh() {
        let mut canvas = MockCanvas::default();
        let from = cell_at(0.0, 0.0);
        let to = cell_at(10.0, 0.0);

        canvas.draw_move(&from, &to, false);
        canvas.draw_move(&from, &to, true);

        let expected_line = Line::new(vec2(5.0, 5.0), vec2(15.0, 5.0));
        assert_eq!(
            canvas.lines,
            vec![(expected_line, Stroke::Move), (expected_line, Stroke::Undo)]
        );
        assert_eq!(canvas.refreshes, 2);
    }

    fn paint<C: Canvas>(mut canvas: C) {
        canvas.draw_cell_walls(&cell_at(0.0, 0.0));
        canvas.refresh();
    }

    #[test]
    fn borrowed_canvas_forwards_calls() {
        let mut canvas = MockCanvas::default();
        paint(&mut canvas);
        assert_eq!(canvas.lines.len(), 4);
        assert_eq!(canvas.refreshes, 1);
    }

    #[test]
    fn headless_canvas_accepts_every_call() {
        let from = cell_at(0.0, 0.0);
        let to = cell_at(10.0, 0.0);
        let mut canvas = Headless;
        canvas.draw_cell_walls(&from);
        canvas.draw_move(&from, &to, true);
        canvas.refresh();
    }
}
