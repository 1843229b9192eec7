use common::{Canvas, Line, Stroke};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Line(Line, Stroke),
    Refresh,
}

/// A canvas that keeps every call so it can be played back later.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Canvas for Recorder {
    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        self.commands.push(DrawCommand::Line(line, stroke));
    }

    fn refresh(&mut self) {
        self.commands.push(DrawCommand::Refresh);
    }
}
