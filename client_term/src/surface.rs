//! Character-cell drawing surface.
//!
//! The board is scaled onto the terminal grid; every draw call fills cells in
//! an off-screen buffer and `present` writes the whole buffer out in one go.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use game_core::render::{Color, Drawable, Font, Surface, BLACK};
use game_core::Board;
use glam::Vec2;
use std::io::{self, Write};

const BLOCK: char = '█';
const BALL: char = '●';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
    bold: bool,
}

impl Cell {
    fn blank() -> Self {
        Self {
            ch: ' ',
            color: BLACK,
            bold: false,
        }
    }
}

/// Text rendered for the terminal: one cell per character
#[derive(Debug, Clone)]
pub struct TextLabel {
    text: String,
    color: Color,
    bold: bool,
    cell_width: f32,  // Board units per column
    cell_height: f32, // Board units per row
}

impl Drawable for TextLabel {
    fn width(&self) -> f32 {
        self.text.chars().count() as f32 * self.cell_width
    }

    fn height(&self) -> f32 {
        self.cell_height
    }
}

pub struct TermSurface<W: Write> {
    out: W,
    board: Board,
    cols: u16,
    rows: u16,
    background: Color,
    cells: Vec<Cell>,
    error: Option<io::Error>,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16, board: Board) -> Self {
        let mut surface = Self {
            out,
            board,
            cols: 0,
            rows: 0,
            background: BLACK,
            cells: Vec::new(),
            error: None,
        };
        surface.resize(cols, rows);
        surface
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.cells = vec![Cell::blank(); self.cols as usize * self.rows as usize];
    }

    /// Write failure from the last `present`, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 / self.board.width,
            self.rows as f32 / self.board.height,
        )
    }

    /// Cell containing a board point, if it is on screen
    fn cell_of(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let scale = self.scale();
        let col = (x * scale.x).floor();
        let row = (y * scale.y).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn put(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.cols && row < self.rows {
            let index = row as usize * self.cols as usize + col as usize;
            self.cells[index] = cell;
        }
    }

    #[cfg(test)]
    fn char_at(&self, col: u16, row: u16) -> char {
        self.cells[row as usize * self.cols as usize + col as usize].ch
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let mut current: Option<(Color, bool)> = None;
        queue!(self.out, SetBackgroundColor(to_term(self.background)))?;
        for row in 0..self.rows {
            queue!(self.out, MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if current != Some((cell.color, cell.bold)) {
                    let weight = if cell.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    };
                    queue!(
                        self.out,
                        SetForegroundColor(to_term(cell.color)),
                        SetAttribute(weight)
                    )?;
                    current = Some((cell.color, cell.bold));
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

fn to_term(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}

impl<W: Write> Surface for TermSurface<W> {
    type Text = TextLabel;

    fn clear(&mut self, color: Color) {
        self.background = color;
        self.cells.fill(Cell {
            ch: ' ',
            color,
            bold: false,
        });
    }

    fn draw_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32) {
        let scale = self.scale();
        let col_start = (x * scale.x).floor().max(0.0) as u16;
        let col_end = ((x + w) * scale.x).ceil().min(self.cols as f32) as u16;
        let row_start = (y * scale.y).floor().max(0.0) as u16;
        let row_end = ((y + h) * scale.y).ceil().min(self.rows as f32) as u16;

        let cell = Cell {
            ch: BLOCK,
            color,
            bold: false,
        };
        for row in row_start..row_end {
            for col in col_start..col_end {
                self.put(col, row, cell);
            }
        }
    }

    fn draw_circle(&mut self, color: Color, x: f32, y: f32, r: f32) {
        let cell = Cell {
            ch: BALL,
            color,
            bold: false,
        };
        let scale = self.scale();
        let col_start = ((x - r) * scale.x).floor().max(0.0) as u16;
        let col_end = ((x + r) * scale.x).ceil().min(self.cols as f32) as u16;
        let row_start = ((y - r) * scale.y).floor().max(0.0) as u16;
        let row_end = ((y + r) * scale.y).ceil().min(self.rows as f32) as u16;

        // Cells whose centre lies inside the circle
        for row in row_start..row_end {
            for col in col_start..col_end {
                let center = Vec2::new(
                    (col as f32 + 0.5) / scale.x,
                    (row as f32 + 0.5) / scale.y,
                );
                if center.distance(Vec2::new(x, y)) <= r {
                    self.put(col, row, cell);
                }
            }
        }

        // A ball smaller than a cell still shows up
        if let Some((col, row)) = self.cell_of(x, y) {
            self.put(col, row, cell);
        }
    }

    fn draw_line(&mut self, color: Color, from: Vec2, to: Vec2, _thickness: f32) {
        let ch = if from.x == to.x {
            '│'
        } else if from.y == to.y {
            '─'
        } else {
            '·'
        };
        let cell = Cell {
            ch,
            color,
            bold: false,
        };

        let scale = self.scale();
        let span = ((to - from) * scale).abs();
        // Two samples per cell so rounding at cell borders leaves no gaps
        let steps = (span.x.max(span.y).ceil() * 2.0).max(1.0) as usize;
        for i in 0..=steps {
            let point = from.lerp(to, i as f32 / steps as f32);
            // Points on the far board edge fall outside the grid and are skipped
            if let Some((col, row)) = self.cell_of(point.x, point.y) {
                self.put(col, row, cell);
            }
        }
    }

    fn render_text(&mut self, text: &str, _font: &Font, bold: bool, color: Color) -> TextLabel {
        let scale = self.scale();
        TextLabel {
            text: text.to_string(),
            color,
            bold,
            cell_width: 1.0 / scale.x,
            cell_height: 1.0 / scale.y,
        }
    }

    fn blit(&mut self, drawable: &TextLabel, x: f32, y: f32) {
        let Some((col, row)) = self.cell_of(x.max(0.0), y.max(0.0)) else {
            return;
        };
        for (offset, ch) in drawable.text.chars().enumerate() {
            let cell = Cell {
                ch,
                color: drawable.color,
                bold: drawable.bold,
            };
            self.put(col.saturating_add(offset as u16), row, cell);
        }
    }

    fn present(&mut self) {
        if let Err(err) = self.write_frame() {
            self.error = Some(err);
        }
    }
}
