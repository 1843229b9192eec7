pub mod canvas;
pub mod constants;
pub mod geometry;
pub mod maze;

pub use canvas::{Canvas, Headless, Stroke};
pub use geometry::{Bounds, Line, Point};
pub use maze::{Cell, Maze, MazeConfig, MazeError, Side, Tile};
