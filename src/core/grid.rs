//! Board geometry: lines, boxes and how they touch.
//!
//! ## Coordinates
//!
//! Dots sit at `(row, col)` for `row in 0..=rows`, `col in 0..=cols`.
//!
//! - A horizontal line `h r c` joins dot `(r, c)` to dot `(r, c + 1)`,
//!   so `r in 0..=rows` and `c in 0..cols`.
//! - A vertical line `v r c` joins dot `(r, c)` to dot `(r + 1, c)`,
//!   so `r in 0..rows` and `c in 0..=cols`.
//! - Box `(r, c)` is bordered by `h r c` (top), `h r+1 c` (bottom),
//!   `v r c` (left) and `v r c+1` (right).
//!
//! Lines and boxes are plain coordinates. Whether a line is drawn or a box
//! is owned lives in `GameState`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::config::GridSize;
use crate::error::ParseLineError;

/// Direction of a line between two adjacent dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// Short notation letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}

/// A line identified by `(row, col, orientation)`.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{GridSize, Line};
///
/// let size = GridSize::new(2, 2).unwrap();
/// let line: Line = "h 2 1".parse().unwrap();
///
/// assert_eq!(line, Line::horizontal(2, 1));
/// assert!(line.is_within(size));
/// assert!(!Line::vertical(2, 1).is_within(size));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Dot row the line starts at.
    pub row: usize,
    /// Dot column the line starts at.
    pub col: usize,
    /// Direction from the starting dot.
    pub orientation: Orientation,
}

impl Line {
    /// Create a line.
    #[must_use]
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Horizontal line from dot `(row, col)` to `(row, col + 1)`.
    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    /// Vertical line from dot `(row, col)` to `(row + 1, col)`.
    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    /// Check whether this line exists on a grid of the given size.
    #[must_use]
    pub const fn is_within(self, size: GridSize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row <= size.rows() && self.col < size.cols(),
            Orientation::Vertical => self.row < size.rows() && self.col <= size.cols(),
        }
    }

    /// Boxes bordered by this line: one on the boundary, two inside.
    ///
    /// Assumes the line is within `size`.
    #[must_use]
    pub fn adjacent_boxes(self, size: GridSize) -> SmallVec<[BoxCoord; 2]> {
        let mut boxes = SmallVec::new();
        match self.orientation {
            Orientation::Horizontal => {
                if self.row > 0 {
                    boxes.push(BoxCoord::new(self.row - 1, self.col));
                }
                if self.row < size.rows() {
                    boxes.push(BoxCoord::new(self.row, self.col));
                }
            }
            Orientation::Vertical => {
                if self.col > 0 {
                    boxes.push(BoxCoord::new(self.row, self.col - 1));
                }
                if self.col < size.cols() {
                    boxes.push(BoxCoord::new(self.row, self.col));
                }
            }
        }
        boxes
    }

    /// Every line on a grid: horizontals row by row, then verticals.
    pub fn all(size: GridSize) -> impl Iterator<Item = Line> {
        let horizontals = (0..=size.rows())
            .flat_map(move |row| (0..size.cols()).map(move |col| Line::horizontal(row, col)));
        let verticals = (0..size.rows())
            .flat_map(move |row| (0..=size.cols()).map(move |col| Line::vertical(row, col)));
        horizontals.chain(verticals)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.orientation.letter(), self.row, self.col)
    }
}

/// Parses `h 0 1`, `v,2,3` or `h0 1` style notation (case-insensitive).
impl FromStr for Line {
    type Err = ParseLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let orientation = match chars.next().map(|c| c.to_ascii_lowercase()) {
            Some('h') => Orientation::Horizontal,
            Some('v') => Orientation::Vertical,
            Some(other) => return Err(ParseLineError::Orientation(other.to_string())),
            None => return Err(ParseLineError::Shape(s.to_string())),
        };

        let coords: SmallVec<[&str; 2]> = chars
            .as_str()
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();
        let [row, col] = coords.as_slice() else {
            return Err(ParseLineError::Shape(s.to_string()));
        };

        let parse = |token: &str| {
            token
                .parse::<usize>()
                .map_err(|_| ParseLineError::Coordinate(token.to_string()))
        };
        Ok(Line::new(parse(*row)?, parse(*col)?, orientation))
    }
}

/// A box identified by its top-left dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoxCoord {
    /// Box row.
    pub row: usize,
    /// Box column.
    pub col: usize,
}

impl BoxCoord {
    /// Create a box coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The four bordering lines: top, bottom, left, right.
    #[must_use]
    pub const fn lines(self) -> [Line; 4] {
        [
            Line::horizontal(self.row, self.col),
            Line::horizontal(self.row + 1, self.col),
            Line::vertical(self.row, self.col),
            Line::vertical(self.row, self.col + 1),
        ]
    }

    /// Check whether this box exists on a grid of the given size.
    #[must_use]
    pub const fn is_within(self, size: GridSize) -> bool {
        self.row < size.rows() && self.col < size.cols()
    }

    /// Row-major index into a `rows x cols` grid.
    #[must_use]
    pub const fn index(self, size: GridSize) -> usize {
        self.row * size.cols() + self.col
    }

    /// Every box on a grid, row-major.
    pub fn all(size: GridSize) -> impl Iterator<Item = BoxCoord> {
        (0..size.rows()).flat_map(move |row| (0..size.cols()).map(move |col| BoxCoord::new(row, col)))
    }
}

impl std::fmt::Display for BoxCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
