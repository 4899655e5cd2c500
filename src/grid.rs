//! A fixed-size N×N bit-set over grid coordinates, packed into an unsigned
//! integer `T`. Used for attacked-cell tracking and per-player shot history,
//! giving set membership on structured `(row, col)` keys instead of
//! formatted strings.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

impl std::error::Error for BitGridError {}

/// A fixed-size N×N cell set stored in the unsigned integer `T`.
///
/// `T` must provide at least `N * N` bits; `u128` comfortably holds the
/// standard 10×10 board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const GRID_BITS: usize = N * N;

    /// Create a new empty grid (all cells cleared).
    #[inline]
    pub fn new() -> Self {
        debug_assert!(Self::GRID_BITS <= mem::size_of::<T>() * 8);
        BitGrid { bits: T::zero() }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell on the grid is set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == Self::GRID_BITS
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Membership test that treats out-of-bounds coordinates as absent.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitGridError> {
        if row >= N || col >= N {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Iterator over the set cells of the grid in row-major order.
    #[inline]
    pub fn iter_set(&self) -> SetCells<'_, T, N> {
        SetCells { grid: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let cell = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a grid.
#[derive(Clone, Copy)]
pub struct SetCells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetCells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type G = BitGrid<u128, 10>;

    #[test]
    fn set_get_and_count() {
        let mut g = G::new();
        assert!(g.is_empty());
        g.set(3, 7).unwrap();
        assert!(g.get(3, 7).unwrap());
        assert!(!g.get(7, 3).unwrap());
        assert_eq!(g.count_ones(), 1);
    }

    #[test]
    fn out_of_bounds_is_error() {
        let mut g = G::new();
        assert!(matches!(
            g.set(10, 0),
            Err(BitGridError::IndexOutOfBounds { .. })
        ));
        assert!(!g.contains(0, 10));
    }

    #[test]
    fn full_after_setting_every_cell() {
        let mut g = G::new();
        for r in 0..10 {
            for c in 0..10 {
                g.set(r, c).unwrap();
            }
        }
        assert!(g.is_full());
        assert_eq!(g.iter_set().count(), 100);
    }
}
