// Grid limits:
pub const MAX_DIMENSION: usize = 100; // Per side, so at most 10,000 cells.

// Defaults matching the demo layout:
pub const DEFAULT_ORIGIN: (f32, f32) = (50.0, 50.0);
pub const DEFAULT_NUM_ROWS: usize = 10;
pub const DEFAULT_NUM_COLS: usize = 10;
pub const DEFAULT_CELL_SIZE: f32 = 40.0;
