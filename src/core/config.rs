//! Grid configuration.
//!
//! The only knob a game has is the size of its grid: `rows` x `cols` boxes,
//! surrounded by `(rows + 1) x (cols + 1)` dots. A `GridSize` is validated
//! once at construction, so everything downstream can assume both
//! dimensions are positive and every count fits in a `usize`. Deserialized
//! sizes go through the same check.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Dimensions of a board, measured in boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridSize")]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Rows and columns used when nothing else is configured.
    pub const DEFAULT_DIMENSION: usize = 4;

    /// Create a grid size.
    ///
    /// ```
    /// use dots_boxes::core::GridSize;
    ///
    /// let size = GridSize::new(2, 3).unwrap();
    /// assert_eq!(size.box_count(), 6);
    /// assert_eq!(size.line_count(), 17);
    ///
    /// assert!(GridSize::new(0, 3).is_err());
    /// assert!(GridSize::new(usize::MAX, 2).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        // line_count is the largest count: 2 * rows * cols + rows + cols.
        let line_count = rows
            .checked_mul(cols)
            .and_then(|boxes| boxes.checked_mul(2))
            .and_then(|n| n.checked_add(rows))
            .and_then(|n| n.checked_add(cols));
        if line_count.is_none() {
            return Err(GridError::TooLarge { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// A square grid.
    pub fn square(side: usize) -> Result<Self, GridError> {
        Self::new(side, side)
    }

    /// Number of box rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of box columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total boxes on the board.
    #[must_use]
    pub const fn box_count(self) -> usize {
        self.rows * self.cols
    }

    /// Number of horizontal lines: `(rows + 1) x cols`.
    #[must_use]
    pub const fn horizontal_line_count(self) -> usize {
        (self.rows + 1) * self.cols
    }

    /// Number of vertical lines: `rows x (cols + 1)`.
    #[must_use]
    pub const fn vertical_line_count(self) -> usize {
        self.rows * (self.cols + 1)
    }

    /// Total lines on the board.
    #[must_use]
    pub const fn line_count(self) -> usize {
        self.horizontal_line_count() + self.vertical_line_count()
    }
}

/// Wire shape of a `GridSize`, validated on the way in.
#[derive(Deserialize)]
struct RawGridSize {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = GridError;

    fn try_from(raw: RawGridSize) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_DIMENSION,
            cols: Self::DEFAULT_DIMENSION,
        }
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_counts() {
        let size = GridSize::new(1, 1).unwrap();
        assert_eq!(size.box_count(), 1);
        assert_eq!(size.horizontal_line_count(), 2);
        assert_eq!(size.vertical_line_count(), 2);
        assert_eq!(size.line_count(), 4);

        let size = GridSize::new(1, 2).unwrap();
        assert_eq!(size.line_count(), 7);
    }

    #[test]
    fn test_grid_size_default() {
        let size = GridSize::default();
        assert_eq!(size.rows(), 4);
        assert_eq!(size.cols(), 4);
        assert_eq!(size.line_count(), 40);
    }

    #[test]
    fn test_grid_size_rejects_zero() {
        assert_eq!(
            GridSize::new(0, 0),
            Err(GridError::ZeroDimension { rows: 0, cols: 0 })
        );
        assert!(GridSize::new(3, 0).is_err());
        assert!(GridSize::square(0).is_err());
    }

    #[test]
    fn test_grid_size_rejects_overflowing_counts() {
        assert_eq!(
            GridSize::new(usize::MAX, 2),
            Err(GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(GridSize::new(1, usize::MAX).is_err());
        assert!(GridSize::square(usize::MAX / 2).is_err());
        assert!(GridSize::new(1000, 1000).is_ok());
    }

    #[test]
    fn test_grid_size_deserialize_validates() {
        let size: GridSize = serde_json::from_str(r#"{"rows":2,"cols":3}"#).unwrap();
        assert_eq!(size, GridSize::new(2, 3).unwrap());

        assert!(serde_json::from_str::<GridSize>(r#"{"rows":0,"cols":0}"#).is_err());
        assert!(serde_json::from_str::<GridSize>(r#"{"rows":4,"cols":0}"#).is_err());
        let huge = format!(r#"{{"rows":{},"cols":2}}"#, usize::MAX);
        assert!(serde_json::from_str::<GridSize>(&huge).is_err());
    }

    #[test]
    fn test_grid_size_round_trip() {
        let size = GridSize::new(3, 5).unwrap();
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, r#"{"rows":3,"cols":5}"#);
        assert_eq!(serde_json::from_str::<GridSize>(&json).unwrap(), size);
    }

    #[test]
    fn test_grid_size_display() {
        assert_eq!(GridSize::new(2, 5).unwrap().to_string(), "2x5");
    }
}
