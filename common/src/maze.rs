mod cell;
pub mod maker;
pub mod solver;

use std::fmt;

use glam::{Vec2, vec2};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

pub use cell::{Cell, Side};

use crate::canvas::{Canvas, Headless};
use crate::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_NUM_COLS, DEFAULT_NUM_ROWS, DEFAULT_ORIGIN, MAX_DIMENSION,
};
use crate::geometry::{Bounds, Point};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MazeError {
    #[error(
        "maze dimensions must be between 1 and {max}, got {num_cols} columns by {num_rows} rows",
        max = MAX_DIMENSION
    )]
    InvalidDimension { num_rows: usize, num_cols: usize },
    #[error("cell sizes must be positive, got {width} by {height}")]
    InvalidCellSize { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    pub origin: Point,
    pub num_rows: usize,
    pub num_cols: usize,
    pub cell_size: Vec2,
    pub seed: Option<u64>, // None draws a fresh seed from the thread RNG.
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            origin: vec2(DEFAULT_ORIGIN.0, DEFAULT_ORIGIN.1),
            num_rows: DEFAULT_NUM_ROWS,
            num_cols: DEFAULT_NUM_COLS,
            cell_size: Vec2::splat(DEFAULT_CELL_SIZE),
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), MazeError> {
        let dimensions = 1..=MAX_DIMENSION;
        if !dimensions.contains(&self.num_rows) || !dimensions.contains(&self.num_cols) {
            return Err(MazeError::InvalidDimension {
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            });
        }

        // Written so that NaN fails too.
        if !(self.cell_size.x > 0.0 && self.cell_size.y > 0.0) {
            return Err(MazeError::InvalidCellSize {
                width: self.cell_size.x,
                height: self.cell_size.y,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Space,
    Path,
}

/// Per-traversal record of which cells have been reached.
///
/// Each traversal owns a fresh one, so carving and solving never see each
/// other's marks.
pub(crate) struct Visited {
    flags: Vec<bool>,
    num_rows: usize,
}

impl Visited {
    pub(crate) fn new(num_cols: usize, num_rows: usize) -> Self {
        Visited {
            flags: vec![false; num_cols * num_rows],
            num_rows,
        }
    }

    pub(crate) fn mark(&mut self, (i, j): (usize, usize)) {
        self.flags[i * self.num_rows + j] = true;
    }

    pub(crate) fn contains(&self, (i, j): (usize, usize)) -> bool {
        self.flags[i * self.num_rows + j]
    }
}

/// A rectangular grid of cells, indexed `[column][row]`.
pub struct Maze<C: Canvas = Headless> {
    cells: Vec<Vec<Cell>>,
    origin: Point,
    cell_size: Vec2,
    num_rows: usize,
    num_cols: usize,
    canvas: C,
    rng: StdRng,
}

impl Maze<Headless> {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        Self::with_canvas(config, Headless)
    }
}

impl<C: Canvas> Maze<C> {
    pub fn with_canvas(config: MazeConfig, canvas: C) -> Result<Self, MazeError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut maze = Maze {
            cells: Vec::new(),
            origin: config.origin,
            cell_size: config.cell_size,
            num_rows: config.num_rows,
            num_cols: config.num_cols,
            canvas,
            rng,
        };
        maze.create_cells();
        maze.break_entrance_and_exit();

        info!(
            "built {}x{} maze at {} with {}x{} cells",
            maze.num_cols, maze.num_rows, maze.origin, maze.cell_size.x, maze.cell_size.y
        );

        Ok(maze)
    }

    fn create_cells(&mut self) {
        self.cells = (0..self.num_cols)
            .map(|i| {
                (0..self.num_rows)
                    .map(|j| Cell::new(Bounds::of_grid_cell(self.origin, self.cell_size, i, j)))
                    .collect()
            })
            .collect();

        for i in 0..self.num_cols {
            for j in 0..self.num_rows {
                self.draw_cell(i, j);
            }
        }
    }

    pub(crate) fn draw_cell(&mut self, i: usize, j: usize) {
        self.cells[i][j].draw(&mut self.canvas);
        self.canvas.refresh();
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    pub fn entrance(&self) -> (usize, usize) {
        (0, 0)
    }

    pub fn exit(&self) -> (usize, usize) {
        (self.num_cols - 1, self.num_rows - 1)
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        self.cells.get(i).and_then(|column| column.get(j))
    }

    /// Direct access for callers that want to shape the grid by hand. Nothing
    /// is redrawn.
    pub fn cell_mut(&mut self, i: usize, j: usize) -> Option<&mut Cell> {
        self.cells.get_mut(i).and_then(|column| column.get_mut(j))
    }

    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn break_entrance_and_exit(&mut self) {
        let (i, j) = self.entrance();
        self.cells[i][j].has_top_wall = false;
        self.draw_cell(i, j);

        let (i, j) = self.exit();
        self.cells[i][j].has_bottom_wall = false;
        self.draw_cell(i, j);
    }

    pub fn reset_cells_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.visited = false;
        }
    }

    pub(crate) fn in_bounds(&self, i: usize, j: usize) -> bool {
        i < self.num_cols && j < self.num_rows
    }

    /// The maze as blocks, two per cell in each direction plus a border, with
    /// `path` (if any) marked through the cells and the gaps between them.
    pub fn tiles(&self, path: Option<&[(usize, usize)]>) -> Vec<Vec<Tile>> {
        let width = 2 * self.num_cols + 1;
        let height = 2 * self.num_rows + 1;
        let mut tiles = vec![vec![Tile::Wall; width]; height];

        for (i, column) in self.cells.iter().enumerate() {
            for (j, cell) in column.iter().enumerate() {
                let (x, z) = (2 * i + 1, 2 * j + 1);
                tiles[z][x] = Tile::Space;

                if !cell.has_top_wall && (j == 0 || !self.cells[i][j - 1].has_bottom_wall) {
                    tiles[z - 1][x] = Tile::Space;
                }
                if !cell.has_left_wall && (i == 0 || !self.cells[i - 1][j].has_right_wall) {
                    tiles[z][x - 1] = Tile::Space;
                }
                if !cell.has_bottom_wall && j + 1 == self.num_rows {
                    tiles[z + 1][x] = Tile::Space;
                }
                if !cell.has_right_wall && i + 1 == self.num_cols {
                    tiles[z][x + 1] = Tile::Space;
                }
            }
        }

        for window in path.unwrap_or_default().windows(2) {
            let (a, b) = (window[0], window[1]);
            tiles[a.1 + b.1 + 1][a.0 + b.0 + 1] = Tile::Path;
        }
        for &(i, j) in path.unwrap_or_default() {
            tiles[2 * j + 1][2 * i + 1] = Tile::Path;
        }

        tiles
    }

    pub fn log(&self) -> String {
        self.tiles(None)
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&tile| if tile == Tile::Wall { "██" } else { "  " })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl<C: Canvas> fmt::Debug for Maze<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<C: Canvas> fmt::Display for Maze<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
