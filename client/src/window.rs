use macroquad::prelude::*;
use macroquad::window::Conf;

use common::Stroke;

use crate::replay::Replay;
use crate::settings::Settings;

pub const BG_COLOR: Color = Color::new(0.851, 0.851, 0.851, 1.0);
pub const LINE_THICKNESS: f32 = 2.0;
pub const FONT_SIZE: f32 = 20.0;

pub fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: "Maze Solver".to_owned(),
        window_width: settings.window_width,
        window_height: settings.window_height,
        ..Default::default()
    }
}

pub fn stroke_color(stroke: Stroke) -> Color {
    match stroke {
        Stroke::Wall => BLACK,
        Stroke::Erased => BG_COLOR, // Painted over the old wall.
        Stroke::Move => RED,
        Stroke::Undo => GRAY,
    }
}

pub async fn run_window(mut replay: Replay, summary: String) {
    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            replay.skip_to_end();
        }

        replay.advance(get_frame_time());

        clear_background(BG_COLOR);
        for (line, stroke) in replay.scene() {
            draw_line(
                line.start.x,
                line.start.y,
                line.end.x,
                line.end.y,
                LINE_THICKNESS,
                stroke_color(*stroke),
            );
        }

        let status = if replay.is_finished() {
            summary.as_str()
        } else {
            "Space to skip, Esc to quit"
        };
        draw_text(status, 10.0, screen_height() - 10.0, FONT_SIZE, BLACK);

        next_frame().await;
    }
}
