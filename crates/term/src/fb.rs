//! Framebuffer and palette for the scoreboard.
//!
//! Cells are stored row-major; writes outside the buffer are dropped so layout
//! code can draw a full-width sheet into a narrower terminal.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::text()
    }
}

impl CellStyle {
    /// Plain sheet text.
    pub const fn text() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    /// Horizontal rules between bowlers.
    pub const fn rule() -> Self {
        Self {
            fg: Rgb::new(120, 120, 130),
            dim: true,
            ..Self::text()
        }
    }

    /// Header labels.
    pub const fn label() -> Self {
        Self {
            bold: true,
            ..Self::text()
        }
    }

    /// Name of the bowler who is up.
    pub const fn up() -> Self {
        Self {
            fg: Rgb::new(100, 220, 120),
            bold: true,
            ..Self::text()
        }
    }

    pub const fn strike() -> Self {
        Self {
            fg: Rgb::new(220, 80, 80),
            bold: true,
            ..Self::text()
        }
    }

    pub const fn spare() -> Self {
        Self {
            fg: Rgb::new(240, 220, 80),
            bold: true,
            ..Self::text()
        }
    }

    /// Status line under the sheet.
    pub const fn status() -> Self {
        Self {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..Self::text()
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::text().into_cell(' ')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is big enough. Contents are unspecified afterwards.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(usize::from(width) * usize::from(height), Cell::default());
    }

    /// One row of cells, or an empty slice past the bottom edge.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(usize::from(x)).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let i = usize::from(y) * usize::from(self.width) + usize::from(x);
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write `s` from `x` rightwards. Returns the number of columns it spans.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            self.put_char(cx, y, ch, style);
            cx = cx.saturating_add(1);
        }
        cx - x
    }

    /// Repeat `ch` across columns `x0..x1`.
    pub fn put_hline(&mut self, x0: u16, x1: u16, y: u16, ch: char, style: CellStyle) {
        for x in x0..x1.min(self.width) {
            self.put_char(x, y, ch, style);
        }
    }

    /// Write a decimal number starting at `x`. Returns the number of columns used.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0usize;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
        len as u16
    }

    /// Write a decimal number so that its last digit lands at `right_x`.
    pub fn put_u32_right(&mut self, right_x: u16, y: u16, value: u32, style: CellStyle) {
        let width = decimal_width(value);
        let x = right_x.saturating_add(1).saturating_sub(width);
        self.put_u32(x, y, value, style);
    }

    /// Text content of one row, styles dropped.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

fn decimal_width(mut value: u32) -> u16 {
    let mut width = 1;
    while value >= 10 {
        value /= 10;
        width += 1;
    }
    width
}
