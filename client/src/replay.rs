use std::collections::HashMap;

use common::{Line, Stroke};

use crate::recorder::DrawCommand;

/// Seconds to wait before each kind of command appears.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pacing {
    pub step_delay: f32, // Before each refresh.
    pub move_delay: f32, // Before each solver move is drawn.
}

type SegmentKey = [[u32; 2]; 2];

// A move and its undo cover the same segment in opposite directions.
fn segment_key(line: &Line) -> SegmentKey {
    let start = [line.start.x.to_bits(), line.start.y.to_bits()];
    let end = [line.end.x.to_bits(), line.end.y.to_bits()];
    if start <= end { [start, end] } else { [end, start] }
}

/// Reveals recorded draw commands a few at a time so the build and the
/// search can be watched.
///
/// Revealed lines are folded into a scene holding only the latest stroke for
/// each segment, so drawing a frame costs one line per segment rather than
/// one per command seen so far.
#[derive(Debug)]
pub struct Replay {
    commands: Vec<DrawCommand>,
    revealed: usize,
    owed: f32, // Time carried over towards the next command.
    pacing: Pacing,
    scene: Vec<(Line, Stroke)>,
    scene_index: HashMap<SegmentKey, usize>,
}

impl Replay {
    pub fn new(commands: Vec<DrawCommand>, pacing: Pacing) -> Self {
        let mut replay = Replay {
            commands,
            revealed: 0,
            owed: 0.0,
            pacing,
            scene: Vec::new(),
            scene_index: HashMap::new(),
        };
        replay.advance(0.0);
        replay
    }

    fn delay_before(&self, command: &DrawCommand) -> f32 {
        match command {
            DrawCommand::Refresh => self.pacing.step_delay,
            DrawCommand::Line(_, Stroke::Move | Stroke::Undo) => self.pacing.move_delay,
            DrawCommand::Line(_, Stroke::Wall | Stroke::Erased) => 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.owed += dt.max(0.0);

        while let Some(command) = self.commands.get(self.revealed) {
            let delay = self.delay_before(command);
            if self.owed < delay {
                break;
            }
            self.owed -= delay;
            self.reveal_next();
        }

        if self.is_finished() {
            self.owed = 0.0;
        }
    }

    fn reveal_next(&mut self) {
        if let Some(&DrawCommand::Line(line, stroke)) = self.commands.get(self.revealed) {
            let key = segment_key(&line);
            match self.scene_index.get(&key) {
                Some(&index) => self.scene[index].1 = stroke,
                None => {
                    self.scene_index.insert(key, self.scene.len());
                    self.scene.push((line, stroke));
                }
            }
        }
        self.revealed += 1;
    }

    pub fn skip_to_end(&mut self) {
        while !self.is_finished() {
            self.reveal_next();
        }
        self.owed = 0.0;
    }

    pub fn is_finished(&self) -> bool {
        self.revealed == self.commands.len()
    }

    pub fn revealed(&self) -> &[DrawCommand] {
        &self.commands[..self.revealed]
    }

    /// What is on screen: each segment once, with its most recent stroke.
    pub fn scene(&self) -> &[(Line, Stroke)] {
        &self.scene
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;

    const PACING: Pacing = Pacing {
        step_delay: 0.05,
        move_delay: 0.2,
    };

    fn line(stroke: Stroke) -> DrawCommand {
        DrawCommand::Line(Line::new(vec2(0.0, 0.0), vec2(1.0, 1.0)), stroke)
    }

    #[test]
    fn walls_up_to_the_first_refresh_show_immediately() {
        let replay = Replay::new(
            vec![line(Stroke::Wall), line(Stroke::Erased), DrawCommand::Refresh],
            PACING,
        );
        assert_eq!(replay.revealed().len(), 2);
        assert!(!replay.is_finished());
    }

    #[test]
    fn refreshes_and_moves_wait_their_delay() {
        let mut replay = Replay::new(
            vec![
                DrawCommand::Refresh,
                line(Stroke::Wall),
                line(Stroke::Move),
                DrawCommand::Refresh,
            ],
            PACING,
        );
        assert_eq!(replay.revealed().len(), 0);

        replay.advance(0.04);
        assert_eq!(replay.revealed().len(), 0);

        replay.advance(0.02);
        assert_eq!(replay.revealed().len(), 2);

        replay.advance(0.2);
        assert_eq!(replay.revealed().len(), 3);

        replay.advance(1.0);
        assert!(replay.is_finished());
    }

    #[test]
    fn a_long_frame_reveals_several_commands() {
        let commands = vec![DrawCommand::Refresh; 10];
        let mut replay = Replay::new(commands, PACING);
        replay.advance(0.26);
        assert_eq!(replay.revealed().len(), 5);
    }

    #[test]
    fn skip_to_end_reveals_everything() {
        let mut replay = Replay::new(vec![line(Stroke::Undo), DrawCommand::Refresh], PACING);
        replay.skip_to_end();
        assert!(replay.is_finished());
        assert_eq!(replay.revealed().len(), 2);
    }

    fn segment(x: f32, stroke: Stroke) -> DrawCommand {
        DrawCommand::Line(Line::new(vec2(x, 0.0), vec2(x, 10.0)), stroke)
    }

    #[test]
    fn scene_keeps_the_latest_stroke_per_segment() {
        let replay = Replay::new(
            vec![
                segment(0.0, Stroke::Wall),
                segment(10.0, Stroke::Wall),
                segment(0.0, Stroke::Erased),
                segment(0.0, Stroke::Wall),
                segment(10.0, Stroke::Erased),
            ],
            PACING,
        );

        assert_eq!(replay.revealed().len(), 5);
        assert_eq!(
            replay.scene(),
            &[
                (Line::new(vec2(0.0, 0.0), vec2(0.0, 10.0)), Stroke::Wall),
                (Line::new(vec2(10.0, 0.0), vec2(10.0, 10.0)), Stroke::Erased),
            ]
        );
    }

    #[test]
    fn scene_stays_bounded_by_segments_for_a_whole_maze() {
        use common::{Maze, MazeConfig};

        use crate::recorder::Recorder;

        let config = MazeConfig {
            origin: vec2(0.0, 0.0),
            num_rows: 20,
            num_cols: 20,
            cell_size: vec2(10.0, 10.0),
            seed: Some(6),
        };
        let mut maze = Maze::with_canvas(config, Recorder::default()).expect("valid config");
        maze.generate();
        assert!(maze.solve());
        let commands = maze.into_canvas().into_commands();
        let line_count = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line(..)))
            .count();

        let mut replay = Replay::new(commands, PACING);
        replay.skip_to_end();

        // One line per cell edge, plus at most one solver line per pair of neighbouring cells.
        let edges = 2 * 20 * 21;
        let neighbour_pairs = 2 * 20 * 19;
        assert!(replay.scene().len() <= edges + neighbour_pairs);
        assert!(replay.scene().len() < line_count);
    }

    #[test]
    fn an_undo_overwrites_the_move_it_retraces() {
        let forward = Line::new(vec2(5.0, 5.0), vec2(15.0, 5.0));
        let back = Line::new(vec2(15.0, 5.0), vec2(5.0, 5.0));
        let mut replay = Replay::new(
            vec![
                DrawCommand::Line(forward, Stroke::Move),
                DrawCommand::Line(back, Stroke::Undo),
            ],
            PACING,
        );
        replay.skip_to_end();
        assert_eq!(replay.scene(), &[(forward, Stroke::Undo)]);
    }

    #[test]
    fn skipping_builds_the_same_scene_as_playing_through() {
        let commands = vec![
            segment(0.0, Stroke::Wall),
            DrawCommand::Refresh,
            segment(0.0, Stroke::Erased),
            segment(5.0, Stroke::Move),
            DrawCommand::Refresh,
        ];
        let mut played = Replay::new(commands.clone(), PACING);
        played.advance(10.0);
        let mut skipped = Replay::new(commands, PACING);
        skipped.skip_to_end();
        assert_eq!(played.scene(), skipped.scene());
    }

    #[test]
    fn zero_pacing_shows_everything_at_once() {
        let pacing = Pacing {
            step_delay: 0.0,
            move_delay: 0.0,
        };
        let replay = Replay::new(vec![line(Stroke::Move), DrawCommand::Refresh], pacing);
        assert!(replay.is_finished());
    }
}
