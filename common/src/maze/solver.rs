use log::{debug, info, trace};

use super::{Maze, Side, Visited};
use crate::canvas::Canvas;

struct Frame {
    cell: (usize, usize),
    moves: Vec<(usize, usize)>,
    next: usize,
}

impl<C: Canvas> Maze<C> {
    /// Whether the exit can be reached from the entrance through open walls.
    pub fn solve(&mut self) -> bool {
        self.solve_path().is_some()
    }

    /// Depth-first walk from the entrance to the exit.
    ///
    /// Moves are tried right, left, down, up. Every move is drawn forward
    /// before it is explored and drawn again as an undo if it led nowhere. The
    /// walk keeps its own visited record, so it does not depend on the cells'
    /// `visited` flags having been reset, though it does set them as it goes.
    pub fn solve_path(&mut self) -> Option<Vec<(usize, usize)>> {
        let exit = self.exit();
        let mut visited = Visited::new(self.num_cols, self.num_rows);
        let mut stack: Vec<Frame> = Vec::new();
        let mut next = Some(self.entrance());

        loop {
            if let Some(cell) = next.take() {
                self.step_into(&mut visited, cell);
                if cell == exit {
                    let mut path: Vec<_> = stack.iter().map(|frame| frame.cell).collect();
                    path.push(cell);
                    info!("found the exit after {} moves", path.len() - 1);
                    return Some(path);
                }
                let moves = self.valid_moves(cell, &visited);
                debug!("valid moves at ({}, {}): {:?}", cell.0, cell.1, moves);
                stack.push(Frame {
                    cell,
                    moves,
                    next: 0,
                });
            }

            let frame = stack.last_mut()?;
            if let Some(&to) = frame.moves.get(frame.next) {
                frame.next += 1;
                let from = frame.cell;
                trace!("trying move from {:?} to {:?}", from, to);
                self.draw_move(from, to, false);
                next = Some(to);
                continue;
            }

            let dead_end = frame.cell;
            stack.pop();
            match stack.last() {
                Some(parent) => {
                    debug!("no way on from {:?}, backtracking", dead_end);
                    self.draw_move(parent.cell, dead_end, true);
                }
                None => info!("no path from the entrance to the exit"),
            }
        }
    }

    fn step_into(&mut self, visited: &mut Visited, (i, j): (usize, usize)) {
        self.canvas.refresh();
        visited.mark((i, j));
        self.cells[i][j].visited = true;
    }

    // Right, left, down, up.
    fn valid_moves(&self, (i, j): (usize, usize), visited: &Visited) -> Vec<(usize, usize)> {
        let candidates = [
            (i + 1 < self.num_cols).then(|| (i + 1, j)),
            (i > 0).then(|| (i - 1, j)),
            (j + 1 < self.num_rows).then(|| (i, j + 1)),
            (j > 0).then(|| (i, j - 1)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter(|&to| !visited.contains(to) && self.is_open((i, j), to))
            .collect()
    }

    fn is_open(&self, from: (usize, usize), to: (usize, usize)) -> bool {
        Side::facing(from, to).is_some_and(|side| !self.cells[from.0][from.1].has_wall(side))
    }

    fn draw_move(&mut self, from: (usize, usize), to: (usize, usize), undo: bool) {
        let (from_cell, to_cell) = (&self.cells[from.0][from.1], &self.cells[to.0][to.1]);
        from_cell.draw_move(to_cell, undo, &mut self.canvas);
    }
}
