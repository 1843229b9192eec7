use glam::{Vec2, vec2};

pub type Point = Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Line { start, end }
    }
}

/// The rectangle a cell occupies on the canvas.
///
/// The corners are normalized on construction, so the order in which they are
/// given does not matter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    top_left: Point,
    bottom_right: Point,
}

impl Bounds {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Bounds {
            top_left: a.min(b),
            bottom_right: a.max(b),
        }
    }

    /// Bounds of the cell in column `i`, row `j` of a grid whose first cell
    /// has its top-left corner at `origin`.
    pub fn of_grid_cell(origin: Point, cell_size: Vec2, i: usize, j: usize) -> Self {
        let top_left = origin + cell_size * vec2(i as f32, j as f32);
        Self::from_corners(top_left, top_left + cell_size)
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn centerpoint(&self) -> Point {
        (self.top_left + self.bottom_right) / 2.0
    }

    pub fn left_edge(&self) -> Line {
        Line::new(self.top_left, vec2(self.top_left.x, self.bottom_right.y))
    }

    pub fn right_edge(&self) -> Line {
        Line::new(vec2(self.bottom_right.x, self.top_left.y), self.bottom_right)
    }

    pub fn top_edge(&self) -> Line {
        Line::new(self.top_left, vec2(self.bottom_right.x, self.top_left.y))
    }

    pub fn bottom_edge(&self) -> Line {
        Line::new(vec2(self.top_left.x, self.bottom_right.y), self.bottom_right)
    }
}
