//! Strictly lower-triangular dense matrices with append-only growth.
//!
//! Both matrices store only cells `(row, col)` with `row > col`, one row after another in a
//! single contiguous buffer. Row `r` never changes size once allocated, so adding rows
//! only appends to the buffer: existing cells keep their offsets across growth.
//!
//! - [`TriangularBitMatrix`]: one bit per cell, row `r` owns `ceil(r / 64)` words.
//! - [`TriangularMatrix<T>`]: one `T` per cell, row `r` owns `r` cells.
//!
//! Callers are responsible for canonicalizing an unordered pair to `(max, min)`.

use super::bit_set::{bit_mask, word_index, words_for, WORD_BITS};

/// Word offset of the first word of `row` in a [`TriangularBitMatrix`].
///
/// Equals `Σ_{i < row} ceil(i / 64)`: rows `1..=64` hold one word, rows `65..=128` two, etc.
#[inline(always)]
pub(crate) const fn bit_row_offset(row: usize) -> usize {
    if row == 0 {
        return 0;
    }
    let n = row - 1;
    let full = n / WORD_BITS;
    let rem = n % WORD_BITS;
    n + WORD_BITS * (full * full.saturating_sub(1) / 2) + full * rem
}

/// Cell offset of the first cell of `row` in a [`TriangularMatrix`].
#[inline(always)]
pub(crate) const fn row_offset(row: usize) -> usize {
    row * row.saturating_sub(1) / 2
}

/// Linear index of `(row, col)` in a [`TriangularMatrix`]. Requires `row > col`.
#[inline(always)]
pub(crate) const fn cell_index(row: usize, col: usize) -> usize {
    row_offset(row) + col
}

/// A bit-packed strictly lower-triangular matrix.
#[derive(Clone, Debug, Default)]
pub struct TriangularBitMatrix {
    words: Vec<u64>,
    rows: usize,
}

impl TriangularBitMatrix {
    /// Creates an empty matrix with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zeroed matrix with `rows` rows.
    pub fn with_rows(rows: usize) -> Self {
        Self {
            words: vec![0; bit_row_offset(rows)],
            rows,
        }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grows the matrix to `rows` rows. New cells are cleared; shrinking is a no-op.
    pub fn grow_rows(&mut self, rows: usize) {
        if rows <= self.rows {
            return;
        }
        self.words.resize(bit_row_offset(rows), 0);
        self.rows = rows;

        #[cfg(feature = "tracing")]
        tracing::trace!(rows, words = self.words.len(), "bit matrix grown");
    }

    #[inline(always)]
    fn locate(&self, row: usize, col: usize) -> (usize, u64) {
        debug_assert!(col < row, "cell ({row}, {col}) is not below the diagonal");
        debug_assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        (bit_row_offset(row) + word_index(col), bit_mask(col))
    }

    /// Returns the bit at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` is not below [`rows`](Self::rows). Requires `row > col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        let (idx, mask) = self.locate(row, col);
        self.words[idx] & mask != 0
    }

    /// Sets the bit at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        let (idx, mask) = self.locate(row, col);
        self.words[idx] |= mask;
    }

    /// Clears the bit at `(row, col)`.
    #[inline]
    pub fn clear(&mut self, row: usize, col: usize) {
        let (idx, mask) = self.locate(row, col);
        self.words[idx] &= !mask;
    }

    /// The words of `row`, covering columns `[0, row)`.
    pub fn row_words(&self, row: usize) -> &[u64] {
        let start = bit_row_offset(row);
        &self.words[start..start + words_for(row)]
    }
}

/// A dense strictly lower-triangular matrix of `T`.
#[derive(Clone, Debug)]
pub struct TriangularMatrix<T> {
    cells: Vec<T>,
    rows: usize,
}

impl<T> Default for TriangularMatrix<T> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
        }
    }
}

impl<T: Copy> TriangularMatrix<T> {
    /// Creates an empty matrix with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matrix with `rows` rows, every cell set to `fill`.
    pub fn with_rows(rows: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; row_offset(rows)],
            rows,
        }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grows the matrix to `rows` rows, initializing new cells with `fill`.
    pub fn grow_rows(&mut self, rows: usize, fill: T) {
        if rows <= self.rows {
            return;
        }
        self.cells.resize(row_offset(rows), fill);
        self.rows = rows;

        #[cfg(feature = "tracing")]
        tracing::trace!(rows, cells = self.cells.len(), "matrix grown");
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` is not below [`rows`](Self::rows). Requires `row > col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < row, "cell ({row}, {col}) is not below the diagonal");
        self.cells[cell_index(row, col)]
    }

    /// Overwrites the cell at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(col < row, "cell ({row}, {col}) is not below the diagonal");
        self.cells[cell_index(row, col)] = value;
    }

    /// Row `row` as a slice, covering columns `[0, row)`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row_offset(row);
        &self.cells[start..start + row]
    }

    /// All cells, row after row.
    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.cells
    }
}
