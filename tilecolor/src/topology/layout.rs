use crate::limits;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the renderer draws a tile. Quadrant tiles together form one circle; their
/// four regions keep the same external neighbours as a standard tile, so the
/// region graph does not depend on the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Standard = 0,
    TopLeft = 1,
    TopRight = 2,
    BottomLeft = 3,
    BottomRight = 4,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileLayout {
    rows: u32,
    cols: u32,
    kinds: Vec<TileKind>,
    circle: Option<(u32, u32)>,
}

impl TileLayout {
    /// All standard tiles plus, when the grid is at least 2x2, one 2x2 circle block
    /// at a position drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(rows: i32, cols: i32, rng: &mut R) -> Self {
        let rows = limits::clamp_dim(rows, limits::MAX_ROWS);
        let cols = limits::clamp_dim(cols, limits::MAX_COLS);
        let mut kinds = vec![TileKind::Standard; (rows * cols) as usize];
        if rows < 2 || cols < 2 {
            return TileLayout {
                rows,
                cols,
                kinds,
                circle: None,
            };
        }
        let i = rng.gen_range(0..rows - 1);
        let j = rng.gen_range(0..cols - 1);
        let at = |r: u32, c: u32| (r * cols + c) as usize;
        kinds[at(i, j)] = TileKind::TopLeft;
        kinds[at(i, j + 1)] = TileKind::TopRight;
        kinds[at(i + 1, j)] = TileKind::BottomLeft;
        kinds[at(i + 1, j + 1)] = TileKind::BottomRight;
        TileLayout {
            rows,
            cols,
            kinds,
            circle: Some((i, j)),
        }
    }

    /// The standalone circle board: one 2x2 block of quadrants.
    pub fn circle() -> Self {
        TileLayout {
            rows: 2,
            cols: 2,
            kinds: vec![
                TileKind::TopLeft,
                TileKind::TopRight,
                TileKind::BottomLeft,
                TileKind::BottomRight,
            ],
            circle: Some((0, 0)),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Row-major, same order as the grid builder's tile ids.
    pub fn kinds(&self) -> &[TileKind] {
        &self.kinds
    }

    pub fn kind_at(&self, row: u32, col: u32) -> Option<TileKind> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.kinds.get((row * self.cols + col) as usize).copied()
    }

    /// Top-left tile (row, col) of the circle block.
    pub fn circle_origin(&self) -> Option<(u32, u32)> {
        self.circle
    }
}
