use log::debug;
use strum::EnumIter;

use crate::canvas::Canvas;
use crate::geometry::{Bounds, Line, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    /// The side of `from` that faces `to`, if the two are grid-adjacent.
    pub fn facing(from: (usize, usize), to: (usize, usize)) -> Option<Side> {
        let (i, j) = from;
        let (next_i, next_j) = to;
        if next_j == j && next_i == i + 1 {
            Some(Side::Right)
        } else if next_j == j && next_i + 1 == i {
            Some(Side::Left)
        } else if next_i == i && next_j == j + 1 {
            Some(Side::Bottom)
        } else if next_i == i && next_j + 1 == j {
            Some(Side::Top)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub has_left_wall: bool,
    pub has_right_wall: bool,
    pub has_top_wall: bool,
    pub has_bottom_wall: bool,
    pub visited: bool, // Scratch mark left by whichever traversal ran last.
    bounds: Bounds,
}

impl Cell {
    pub fn new(bounds: Bounds) -> Self {
        Cell {
            has_left_wall: true,
            has_right_wall: true,
            has_top_wall: true,
            has_bottom_wall: true,
            visited: false,
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn centerpoint(&self) -> Point {
        self.bounds.centerpoint()
    }

    pub fn has_wall(&self, side: Side) -> bool {
        match side {
            Side::Left => self.has_left_wall,
            Side::Right => self.has_right_wall,
            Side::Top => self.has_top_wall,
            Side::Bottom => self.has_bottom_wall,
        }
    }

    pub fn set_wall(&mut self, side: Side, present: bool) {
        match side {
            Side::Left => self.has_left_wall = present,
            Side::Right => self.has_right_wall = present,
            Side::Top => self.has_top_wall = present,
            Side::Bottom => self.has_bottom_wall = present,
        }
    }

    pub fn edge(&self, side: Side) -> Line {
        match side {
            Side::Left => self.bounds.left_edge(),
            Side::Right => self.bounds.right_edge(),
            Side::Top => self.bounds.top_edge(),
            Side::Bottom => self.bounds.bottom_edge(),
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_cell_walls(self);
    }

    pub fn draw_move<C: Canvas + ?Sized>(&self, to_cell: &Cell, undo: bool, canvas: &mut C) {
        debug!(
            "drawing {} move from {} to {}",
            if undo { "undo" } else { "forward" },
            self.centerpoint(),
            to_cell.centerpoint()
        );
        canvas.draw_move(self, to_cell, undo);
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use strum::IntoEnumIterator;

    use super::*;

    fn unit_cell() -> Cell {
        Cell::new(Bounds::from_corners(vec2(0.0, 0.0), vec2(10.0, 10.0)))
    }

    #[test]
    fn new_cell_is_walled_on_every_side_and_unvisited() {
        let cell = unit_cell();
        assert!(Side::iter().all(|side| cell.has_wall(side)));
        assert!(!cell.visited);
    }

    #[test]
    fn set_wall_changes_only_the_given_side() {
        for side in Side::iter() {
            let mut cell = unit_cell();
            cell.set_wall(side, false);
            for other in Side::iter() {
                assert_eq!(cell.has_wall(other), other != side, "{:?} / {:?}", side, other);
            }
            cell.set_wall(side, true);
            assert!(cell.has_wall(side));
        }
    }

    #[test]
    fn facing_names_the_shared_edge() {
        assert_eq!(Side::facing((1, 1), (2, 1)), Some(Side::Right));
        assert_eq!(Side::facing((1, 1), (0, 1)), Some(Side::Left));
        assert_eq!(Side::facing((1, 1), (1, 2)), Some(Side::Bottom));
        assert_eq!(Side::facing((1, 1), (1, 0)), Some(Side::Top));
        assert_eq!(Side::facing((1, 1), (2, 2)), None);
        assert_eq!(Side::facing((1, 1), (1, 1)), None);
        assert_eq!(Side::facing((0, 0), (3, 0)), None);
    }

    #[test]
    fn opposite_sides_pair_up() {
        for side in Side::iter() {
            assert_ne!(side, side.opposite());
            assert_eq!(side, side.opposite().opposite());
        }
    }

    #[test]
    fn centerpoint_comes_from_bounds() {
        let cell = Cell::new(Bounds::from_corners(vec2(20.0, 40.0), vec2(0.0, 0.0)));
        assert_eq!(cell.centerpoint(), vec2(10.0, 20.0));
    }
}
