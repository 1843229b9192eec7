use std::{env, str::FromStr};

use glam::vec2;
use thiserror::Error;

use common::MazeConfig;

use crate::replay::Pacing;

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
pub const DEFAULT_STEP_DELAY_MS: u64 = 50;
pub const DEFAULT_MOVE_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub maze: MazeConfig,
    pub window_width: i32,
    pub window_height: i32,
    pub step_delay_ms: u64,
    pub move_delay_ms: u64,
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            maze: MazeConfig::default(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            move_delay_ms: DEFAULT_MOVE_DELAY_MS,
            headless: false,
        }
    }
}

impl Settings {
    /// Reads settings from the environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let maze = defaults.maze;

        // MAZE_CELL_SIZE sets both sides; MAZE_CELL_WIDTH and MAZE_CELL_HEIGHT override one each.
        let cell_size: f32 = parse(&lookup, "MAZE_CELL_SIZE", maze.cell_size.x)?;
        let cell_width: f32 = parse(&lookup, "MAZE_CELL_WIDTH", cell_size)?;
        let cell_height: f32 = parse(&lookup, "MAZE_CELL_HEIGHT", cell_size)?;
        let seed = match lookup("MAZE_SEED") {
            Some(value) if !value.trim().is_empty() => Some(parse_value("MAZE_SEED", &value)?),
            _ => None,
        };

        Ok(Settings {
            maze: MazeConfig {
                origin: vec2(
                    parse(&lookup, "MAZE_ORIGIN_X", maze.origin.x)?,
                    parse(&lookup, "MAZE_ORIGIN_Y", maze.origin.y)?,
                ),
                num_rows: parse(&lookup, "MAZE_ROWS", maze.num_rows)?,
                num_cols: parse(&lookup, "MAZE_COLS", maze.num_cols)?,
                cell_size: vec2(cell_width, cell_height),
                seed,
            },
            window_width: parse_window_side(&lookup, "MAZE_WINDOW_WIDTH", defaults.window_width)?,
            window_height: parse_window_side(
                &lookup,
                "MAZE_WINDOW_HEIGHT",
                defaults.window_height,
            )?,
            step_delay_ms: parse(&lookup, "MAZE_STEP_DELAY_MS", defaults.step_delay_ms)?,
            move_delay_ms: parse(&lookup, "MAZE_MOVE_DELAY_MS", defaults.move_delay_ms)?,
            headless: parse_flag(&lookup, "MAZE_HEADLESS")?,
        })
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            step_delay: self.step_delay_ms as f32 / 1000.0,
            move_delay: self.move_delay_ms as f32 / 1000.0,
        }
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => parse_value(key, &value),
        _ => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidValue {
            key,
            value: value.to_string(),
        })
}

fn parse_window_side(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: i32,
) -> Result<i32, SettingsError> {
    let side = parse(lookup, key, default)?;
    if side <= 0 {
        return Err(SettingsError::InvalidValue {
            key,
            value: side.to_string(),
        });
    }
    Ok(side)
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<bool, SettingsError> {
    let Some(value) = lookup(key) else {
        return Ok(false);
    };
    match value.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(SettingsError::InvalidValue { key, value }),
    }
}
