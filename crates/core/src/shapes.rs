//! Shape library - the seven canonical piece masks
//!
//! Each piece is defined by one textual seed grid. The four rotation
//! variants are derived from the seed by successive 90-degree clockwise
//! rotation, each variant trimmed to its minimal bounding box (so an
//! asymmetric piece has differently-sized boxes per rotation). The full
//! table is built once at first use and shared read-only by every piece
//! instance.

use std::sync::OnceLock;

use blockfall_types::PieceKind;

/// Seed grids in type-index order; `'1'` marks an occupied cell.
const SEEDS: [&[&str]; 7] = [
    &["....", "1111", "....", "...."],
    &["1..", "111", "..."],
    &["..1", "111", "..."],
    &["11", "11"],
    &[".11", "11.", "..."],
    &[".1.", "111", "..."],
    &["11.", ".11", "..."],
];

/// An immutable occupancy bitmask trimmed to its minimal bounding box.
///
/// Invariant: at least one cell, no all-empty border row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMask {
    rows: Vec<Vec<bool>>,
}

impl ShapeMask {
    fn new(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Bounding-box height in cells
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Bounding-box width in cells
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether the cell at (row, col) within the bounding box is occupied
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|&&set| set).count())
            .sum()
    }

    /// Occupied cells as (row, col) offsets within the bounding box
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &set)| set)
                .map(move |(c, _)| (r, c))
        })
    }

    /// This mask rotated 90 degrees clockwise, re-trimmed
    pub fn rotated_cw(&self) -> ShapeMask {
        ShapeMask::new(trim(&rot_cw(&self.rows)))
    }
}

/// Build the four rotation variants of a textual seed grid.
///
/// The seed is parsed into a 0/1 matrix and trimmed; each variant is the
/// trim of the current matrix, and the untrimmed intermediate is what gets
/// rotated for the next step, so orientation stays correct across all four.
pub fn rotations_from_seed(seed: &[&str]) -> [ShapeMask; 4] {
    let mut cur = parse(seed);
    std::array::from_fn(|_| {
        let variant = ShapeMask::new(trim(&cur));
        cur = rot_cw(&cur);
        variant
    })
}

fn parse(rows: &[&str]) -> Vec<Vec<bool>> {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let grid: Vec<Vec<bool>> = rows
        .iter()
        .map(|r| {
            let mut cells = vec![false; width];
            for (c, ch) in r.chars().enumerate() {
                cells[c] = ch == '1';
            }
            cells
        })
        .collect();
    trim(&grid)
}

/// `new[col][h-1-row] = old[row][col]`
fn rot_cw(m: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let h = m.len();
    let w = m.first().map_or(0, |row| row.len());
    let mut out = vec![vec![false; h]; w];
    for (r, row) in m.iter().enumerate() {
        for (c, &set) in row.iter().enumerate() {
            if set {
                out[c][h - 1 - r] = true;
            }
        }
    }
    out
}

/// Drop all-empty border rows and columns.
///
/// An entirely empty matrix degrades to a single occupied 1x1 cell rather
/// than an empty mask; none of the canonical seeds hit this path.
fn trim(m: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let row_occupied = |row: &Vec<bool>| row.iter().any(|&set| set);
    let first_row = m.iter().position(row_occupied);
    let Some(first_row) = first_row else {
        return vec![vec![true]];
    };
    let last_row = m.iter().rposition(row_occupied).unwrap_or(first_row);

    let width = m[0].len();
    let col_occupied = |c: usize| m.iter().any(|row| row[c]);
    let first_col = (0..width).find(|&c| col_occupied(c)).unwrap_or(0);
    let last_col = (0..width).rev().find(|&c| col_occupied(c)).unwrap_or(first_col);

    m[first_row..=last_row]
        .iter()
        .map(|row| row[first_col..=last_col].to_vec())
        .collect()
}

/// The shared 7x4 rotation table, built on first access.
#[derive(Debug)]
pub struct ShapeTable {
    rotations: [[ShapeMask; 4]; 7],
}

impl ShapeTable {
    pub fn get() -> &'static ShapeTable {
        static TABLE: OnceLock<ShapeTable> = OnceLock::new();
        TABLE.get_or_init(|| ShapeTable {
            rotations: std::array::from_fn(|i| rotations_from_seed(SEEDS[i])),
        })
    }

    pub fn mask(&self, kind: PieceKind, rot: u8) -> &ShapeMask {
        &self.rotations[kind.as_index()][(rot % 4) as usize]
    }
}

/// Mask for a piece kind at a rotation index, from the shared table.
pub fn mask(kind: PieceKind, rot: u8) -> &'static ShapeMask {
    ShapeTable::get().mask(kind, rot)
}
