use std::io::{Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::maze::{CellState, Direction, Grid, StepSink};

/// Render a maze grid as ASCII box art.
///
/// Each cell occupies a 4x2 block sharing corners with its neighbors:
/// walls are drawn from the cell's own wall flags, the entry cell shows a
/// green `S`, the exit cell a red `E`, and solved-route cells a dot.
pub fn render_ascii(grid: &Grid, entry: Option<(u16, u16)>, exit: Option<(u16, u16)>) -> String {
    if grid.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(grid.height() as usize * 2 + 1);
    for y in 0..grid.height() {
        let mut top_line = String::new();
        let mut mid_line = String::new();
        for x in 0..grid.width() {
            let cell = grid[(x, y)];
            top_line.push('+');
            top_line.push_str(if cell.has_wall(Direction::North) {
                "---"
            } else {
                "   "
            });

            mid_line.push(if cell.has_wall(Direction::West) { '|' } else { ' ' });
            let content = if entry == Some((x, y)) {
                format!(" {} ", "S".with(Color::Green))
            } else if exit == Some((x, y)) {
                format!(" {} ", "E".with(Color::Red))
            } else if cell.state == CellState::Path {
                " . ".to_string()
            } else {
                "   ".to_string()
            };
            mid_line.push_str(&content);
        }
        top_line.push('+');
        mid_line.push(
            if grid[(grid.width() - 1, y)].has_wall(Direction::East) {
                '|'
            } else {
                ' '
            },
        );
        lines.push(top_line);
        lines.push(mid_line);
    }

    let mut bottom_line = String::new();
    for x in 0..grid.width() {
        bottom_line.push('+');
        bottom_line.push_str(
            if grid[(x, grid.height() - 1)].has_wall(Direction::South) {
                "---"
            } else {
                "   "
            },
        );
    }
    bottom_line.push('+');
    lines.push(bottom_line);

    lines.join("\n")
}

/// Animation observer: redraws the whole grid on every step with a fixed
/// frame delay. Pacing lives here, on the caller's side of the sink
/// boundary, never in the generators.
pub struct AnimationSink {
    stdout: Stdout,
    frame_delay: Duration,
    entry: (u16, u16),
    exit: (u16, u16),
    frames: u64,
}

impl AnimationSink {
    pub fn new(frame_delay: Duration, entry: (u16, u16), exit: (u16, u16)) -> Self {
        AnimationSink {
            stdout: std::io::stdout(),
            frame_delay,
            entry,
            exit,
            frames: 0,
        }
    }

    fn draw(&mut self, grid: &Grid) -> std::io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for line in render_ascii(grid, Some(self.entry), Some(self.exit)).lines() {
            queue!(self.stdout, crossterm::style::Print(line))?;
            queue!(self.stdout, crossterm::style::Print("\r\n"))?;
        }

        let status = format!(
            "step {} | {} open edges | {} masked cells",
            self.frames,
            grid.open_edge_count(),
            grid.masked_count()
        );
        // Fit the status line to the terminal so it never wraps mid-frame.
        let term_width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
        let (status, _) = status.unicode_truncate(term_width);
        queue!(
            self.stdout,
            crossterm::style::Print(status.dark_grey().to_string())
        )?;
        self.stdout.flush()
    }
}

impl StepSink for AnimationSink {
    fn on_step(&mut self, grid: &Grid) {
        self.frames += 1;
        if let Err(err) = self.draw(grid) {
            tracing::warn!(%err, "animation frame dropped");
        }
        std::thread::sleep(self.frame_delay);
    }
}
