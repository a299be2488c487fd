use std::fmt;

use super::player::Seat;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of same-owner cells in a line needed to win.
pub const CONNECT: usize = 4;

/// Step vectors (row, col) scanned from every cell: right, down, down-right,
/// down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Four cells forming a line, as (row, col) pairs.
pub type Line = [(usize, usize); CONNECT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

impl Dimensions {
    pub fn new(height: usize, width: usize) -> Self {
        Dimensions { height, width }
    }

    pub fn cell_count(&self) -> usize {
        self.height.saturating_mul(self.width)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Seat),
}

impl Cell {
    pub fn seat(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Taken(seat) => Some(seat),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Where a piece dropped into a column lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSpot {
    Row(usize),
    ColumnFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("column {column} is outside the board (width {width})")]
pub struct InvalidColumn {
    pub column: usize,
    pub width: usize,
}

/// Row-major grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Get the cell at a specific position, `None` when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.dims.height || col >= self.dims.width {
            return None;
        }
        Some(self.cells[row * self.dims.width + col])
    }

    fn check_column(&self, col: usize) -> Result<(), InvalidColumn> {
        if col >= self.dims.width {
            return Err(InvalidColumn {
                column: col,
                width: self.dims.width,
            });
        }
        Ok(())
    }

    /// Find the lowest empty row in a column, scanning from the bottom up
    pub fn lowest_empty_row(&self, col: usize) -> Result<DropSpot, InvalidColumn> {
        self.check_column(col)?;

        let spot = (0..self.dims.height)
            .rev()
            .find(|&row| self.cells[row * self.dims.width + col].is_empty())
            .map_or(DropSpot::ColumnFull, DropSpot::Row);
        Ok(spot)
    }

    /// Check if a column is full. Off-board columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        !matches!(self.lowest_empty_row(col), Ok(DropSpot::Row(_)))
    }

    /// Drop a piece in a column. Returns the row where it landed, or
    /// `ColumnFull` with the board untouched.
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Result<DropSpot, InvalidColumn> {
        let spot = self.lowest_empty_row(col)?;
        if let DropSpot::Row(row) = spot {
            self.cells[row * self.dims.width + col] = Cell::Taken(seat);
        }
        Ok(spot)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Scan every cell in every direction for four pieces owned by `seat`.
    /// Returns the first line found.
    pub fn find_line(&self, seat: Seat) -> Option<Line> {
        let target = Cell::Taken(seat);
        for row in 0..self.dims.height {
            for col in 0..self.dims.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.line_from(row, col, dr, dc) {
                        if line.iter().all(|&(r, c)| self.get(r, c) == Some(target)) {
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    pub fn has_line(&self, seat: Seat) -> bool {
        self.find_line(seat).is_some()
    }

    /// The four in-bounds cells starting at (row, col) stepping by (dr, dc),
    /// or `None` if the line leaves the board.
    fn line_from(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Line> {
        let mut line = [(0, 0); CONNECT];
        for (k, slot) in line.iter_mut().enumerate() {
            let k = k as isize;
            let r = row.checked_add_signed(dr * k)?;
            let c = col.checked_add_signed(dc * k)?;
            if r >= self.dims.height || c >= self.dims.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.height {
            for col in 0..self.dims.width {
                let symbol = match self.cells[row * self.dims.width + col] {
                    Cell::Empty => '.',
                    Cell::Taken(Seat::First) => 'X',
                    Cell::Taken(Seat::Second) => 'O',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
