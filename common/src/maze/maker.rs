use log::{debug, info, warn};
use rand::Rng;

use super::{Maze, Side, Visited};
use crate::canvas::Canvas;

impl<C: Canvas> Maze<C> {
    /// Carves a perfect maze out of the grid, starting from the entrance.
    ///
    /// Any wall opened earlier, by a previous carve or by hand, is put back
    /// first, so every call yields a fresh spanning tree.
    pub fn generate(&mut self) {
        self.restore_walls();

        let passages = self.carve_from(0, 0);
        self.reset_cells_visited();

        info!(
            "carved {} passages through {} cells",
            passages,
            self.num_cols * self.num_rows
        );
    }

    /// Randomized depth-first carving from `(i, j)`. Returns the number of
    /// walls knocked through.
    ///
    /// Each step picks an unvisited neighbour of the cell on top of the stack
    /// uniformly at random, opens the wall between them and moves there. A
    /// cell is popped once none of its neighbours are left unvisited.
    ///
    /// Carving needs a fully walled grid (apart from the entrance and exit).
    /// If any other wall is already open nothing is carved, since a second
    /// tree over the first would close loops.
    pub fn carve_from(&mut self, i: usize, j: usize) -> usize {
        if !self.in_bounds(i, j) {
            warn!("cannot carve from ({}, {}): outside the grid", i, j);
            return 0;
        }
        if !self.is_fully_walled() {
            warn!("cannot carve from ({}, {}): the grid already has open walls", i, j);
            return 0;
        }

        let mut visited = Visited::new(self.num_cols, self.num_rows);
        let mut stack = vec![(i, j)];
        let mut passages = 0;
        self.enter(&mut visited, (i, j));

        while let Some(&current) = stack.last() {
            let mut to_visit = self.unvisited_neighbors(current, &visited);
            let Some(next) = self.pick_out_cell(&mut to_visit) else {
                stack.pop();
                continue;
            };

            self.remove_wall_between(current, next);
            self.draw_cell(current.0, current.1);
            self.draw_cell(next.0, next.1);
            passages += 1;

            self.enter(&mut visited, next);
            stack.push(next);
        }

        passages
    }

    fn enter(&mut self, visited: &mut Visited, cell: (usize, usize)) {
        debug!("visiting cell ({}, {})", cell.0, cell.1);
        visited.mark(cell);
        self.cells[cell.0][cell.1].visited = true;

        if self.unvisited_neighbors(cell, visited).is_empty() {
            self.draw_cell(cell.0, cell.1);
        }
    }

    // Right, left, down, up.
    fn unvisited_neighbors(&self, (i, j): (usize, usize), visited: &Visited) -> Vec<(usize, usize)> {
        let mut to_visit = Vec::with_capacity(4);

        if i + 1 < self.num_cols && !visited.contains((i + 1, j)) {
            to_visit.push((i + 1, j));
        }
        if i > 0 && !visited.contains((i - 1, j)) {
            to_visit.push((i - 1, j));
        }
        if j + 1 < self.num_rows && !visited.contains((i, j + 1)) {
            to_visit.push((i, j + 1));
        }
        if j > 0 && !visited.contains((i, j - 1)) {
            to_visit.push((i, j - 1));
        }

        to_visit
    }

    fn pick_out_cell(&mut self, cells: &mut Vec<(usize, usize)>) -> Option<(usize, usize)> {
        if cells.is_empty() {
            return None;
        }

        let i = self.rng.random_range(0..cells.len());
        Some(cells.swap_remove(i))
    }

    fn remove_wall_between(&mut self, from: (usize, usize), to: (usize, usize)) {
        let Some(side) = Side::facing(from, to) else {
            warn!("cells {:?} and {:?} are not adjacent", from, to);
            return;
        };

        self.cells[from.0][from.1].set_wall(side, false);
        self.cells[to.0][to.1].set_wall(side.opposite(), false);
    }

    // Walls a cell has before any carving: all four, less the entrance and exit.
    fn uncarved_walls(&self, cell: (usize, usize)) -> [bool; 4] {
        [
            true,
            true,
            cell != self.entrance(),
            cell != self.exit(),
        ]
    }

    fn walls_of(&self, (i, j): (usize, usize)) -> [bool; 4] {
        let cell = &self.cells[i][j];
        [
            cell.has_left_wall,
            cell.has_right_wall,
            cell.has_top_wall,
            cell.has_bottom_wall,
        ]
    }

    fn is_fully_walled(&self) -> bool {
        (0..self.num_cols)
            .flat_map(|i| (0..self.num_rows).map(move |j| (i, j)))
            .all(|cell| self.walls_of(cell) == self.uncarved_walls(cell))
    }

    /// Puts back every wall carving could have removed. Only cells that change
    /// are redrawn.
    fn restore_walls(&mut self) {
        for i in 0..self.num_cols {
            for j in 0..self.num_rows {
                let [left, right, top, bottom] = self.uncarved_walls((i, j));
                if self.walls_of((i, j)) == [left, right, top, bottom] {
                    continue;
                }
                let cell = &mut self.cells[i][j];
                cell.has_left_wall = left;
                cell.has_right_wall = right;
                cell.has_top_wall = top;
                cell.has_bottom_wall = bottom;
                self.draw_cell(i, j);
            }
        }
    }

    /// Number of internal walls that are open, each counted once.
    pub fn passage_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.num_cols {
            for j in 0..self.num_rows {
                let cell = &self.cells[i][j];
                if i + 1 < self.num_cols && !cell.has_right_wall {
                    count += 1;
                }
                if j + 1 < self.num_rows && !cell.has_bottom_wall {
                    count += 1;
                }
            }
        }
        count
    }
}
