//! Binary field GF(2) linear algebra
//!
//! Addition in GF(2) is XOR and multiplication is AND, so the product of a
//! matrix row with a vector is the parity of their bitwise AND. Every stage
//! of the decode pipeline (basis transform, syndrome computation) is built on
//! [`BitMatrix::mul_vec`].

use crate::bits::{zeros, Bits, BitsRef};

/// Inner product over GF(2): XOR-reduction of the bitwise AND
#[inline]
pub fn dot(a: &BitsRef, b: &BitsRef) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter_ones().filter(|&i| b[i]).count() % 2 == 1
}

/// Dense boolean matrix stored row-major, one bit vector per row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<Bits>,
    cols: usize,
}

impl BitMatrix {
    /// Create an all-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| zeros(cols)).collect(),
            cols,
        }
    }

    /// Create a square identity matrix
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        for i in 0..size {
            matrix.set(i, i, true);
        }
        matrix
    }

    /// Build a matrix by evaluating `entry(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, entry: impl Fn(usize, usize) -> bool) -> Self {
        let mut matrix = Self::zeros(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                if entry(row, col) {
                    matrix.set(row, col, true);
                }
            }
        }
        matrix
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set(col, value);
    }

    /// Borrow one row
    #[inline]
    pub fn row(&self, row: usize) -> &BitsRef {
        &self.rows[row]
    }

    /// Copy one column out as a vector
    pub fn column(&self, col: usize) -> Bits {
        let mut column = zeros(self.rows());
        for (i, row) in self.rows.iter().enumerate() {
            column.set(i, row[col]);
        }
        column
    }

    /// Matrix–vector product over GF(2).
    ///
    /// Output bit `i` is `dot(row i, vector)`. The vector length must equal
    /// the column count.
    pub fn mul_vec(&self, vector: &BitsRef) -> Bits {
        assert_eq!(
            vector.len(),
            self.cols,
            "vector length does not match matrix column count"
        );
        let mut out = zeros(self.rows());
        for (i, row) in self.rows.iter().enumerate() {
            if dot(row, vector) {
                out.set(i, true);
            }
        }
        out
    }

    /// Matrix–matrix product over GF(2)
    pub fn mul(&self, other: &BitMatrix) -> BitMatrix {
        assert_eq!(self.cols, other.rows(), "inner dimensions do not match");
        let columns: Vec<Bits> = (0..other.cols()).map(|c| other.column(c)).collect();
        Self::from_fn(self.rows(), other.cols(), |r, c| dot(self.row(r), &columns[c]))
    }

    pub fn is_identity(&self) -> bool {
        self.rows() == self.cols
            && self
                .rows
                .iter()
                .enumerate()
                .all(|(i, row)| row.count_ones() == 1 && row[i])
    }

    /// True when the matrix is its own inverse (`M · M = I`)
    pub fn is_involution(&self) -> bool {
        self.rows() == self.cols && self.mul(self).is_identity()
    }
}
