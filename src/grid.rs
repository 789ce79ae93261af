#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Manhattan distance to another position.
    pub fn manhattan(&self, other: &Position) -> i32 {
        (self.row as i32 - other.row as i32).abs() + (self.col as i32 - other.col as i32).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Start,
    Goal,
    Wall,
    Empty,
}

/// Orthogonal step offsets in the fixed expansion order: right, down, left, up.
/// Every search strategy expands neighbors in this order, so it decides
/// tie-breaks; changing it changes visit orders and reconstructed paths.
const MOVES: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A rectangular maze. Immutable for the duration of a search call; the
/// engine never writes to it.
#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from row-major cells. Returns `None` if there are no
    /// rows, no columns, or the rows are ragged.
    pub fn new(cells: Vec<Vec<Cell>>) -> Option<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, |r| r.len());
        if rows == 0 || cols == 0 || cells.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Grid { rows, cols, cells })
    }

    /// Parse a grid from text, one row per line (or per `;`-separated chunk).
    /// Legend: `S` start, `G` goal, `#` or `1` wall, `.` or `0` empty.
    /// Whitespace inside a row is skipped. Returns `None` on unknown
    /// characters or a non-rectangular layout.
    pub fn parse(text: &str) -> Option<Self> {
        let mut cells = Vec::new();
        for line in text.split(|c| c == '\n' || c == ';') {
            let mut row = Vec::new();
            for ch in line.chars() {
                let cell = match ch {
                    'S' => Cell::Start,
                    'G' => Cell::Goal,
                    '#' | '1' => Cell::Wall,
                    '.' | '0' => Cell::Empty,
                    c if c.is_whitespace() => continue,
                    _ => return None,
                };
                row.push(cell);
            }
            if !row.is_empty() {
                cells.push(row);
            }
        }
        Grid::new(cells)
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// First row-major occurrence of `cell`, if any. Duplicate occurrences
    /// are ignored on purpose: the grid comes from an interactive editor
    /// that may transiently violate the single-start/single-goal rule, and
    /// taking the first match keeps this total.
    pub fn locate(&self, cell: Cell) -> Option<Position> {
        for (row, cols) in self.cells.iter().enumerate() {
            for (col, &c) in cols.iter().enumerate() {
                if c == cell {
                    return Some(Position { row, col });
                }
            }
        }
        None
    }

    /// The start and goal positions, or `None` if either is absent.
    pub fn endpoints(&self) -> Option<(Position, Position)> {
        Some((self.locate(Cell::Start)?, self.locate(Cell::Goal)?))
    }

    /// In bounds and not a wall. Start and goal cells are traversable.
    pub fn is_traversable(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols && self.cell(pos) != Cell::Wall
    }

    /// The up-to-4 in-bounds orthogonal neighbors, in the fixed order
    /// right, down, left, up. Walls are included; callers filter with
    /// [`Grid::is_traversable`].
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as i32, pos.col as i32);

        for (dr, dc) in &MOVES {
            let nr = row + dr;
            let nc = col + dc;
            if nr >= 0 && nr < self.rows as i32 && nc >= 0 && nc < self.cols as i32 {
                neighbors.push(Position {
                    row: nr as usize,
                    col: nc as usize,
                });
            }
        }
        neighbors
    }
}
