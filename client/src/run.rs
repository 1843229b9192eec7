use std::io;

use log::info;

use common::{Canvas, Headless, Maze, MazeConfig, MazeError};

use crate::recorder::Recorder;
use crate::replay::Replay;
use crate::settings::Settings;
use crate::{terminal, window};

pub struct Solved<C: Canvas> {
    pub maze: Maze<C>,
    pub path: Option<Vec<(usize, usize)>>,
}

pub fn build_and_solve<C: Canvas>(config: MazeConfig, canvas: C) -> Result<Solved<C>, MazeError> {
    let mut maze = Maze::with_canvas(config, canvas)?;
    maze.generate();
    let path = maze.solve_path();
    Ok(Solved { maze, path })
}

pub fn summary(path: Option<&[(usize, usize)]>) -> String {
    match path {
        Some(path) => format!("Solved in {} moves.", path.len().saturating_sub(1)),
        None => "No path from the entrance to the exit.".to_string(),
    }
}

pub fn run_headless(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let Solved { maze, path } = build_and_solve(settings.maze, Headless)?;
    let mut stdout = io::stdout();
    terminal::print_maze(&mut stdout, &maze.tiles(path.as_deref()))?;
    println!("{}", summary(path.as_deref()));
    Ok(())
}

pub fn run_windowed(settings: &Settings) -> Result<(), MazeError> {
    let Solved { maze, path } = build_and_solve(settings.maze, Recorder::default())?;
    let summary = summary(path.as_deref());
    info!("{}", summary);

    let replay = Replay::new(maze.into_canvas().into_commands(), settings.pacing());
    macroquad::Window::from_config(
        window::window_conf(settings),
        window::run_window(replay, summary),
    );
    Ok(())
}
