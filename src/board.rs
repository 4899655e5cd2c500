//! Game board state: ship occupancy, placement validation and attack
//! resolution.

use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::grid::BitGrid;
use crate::ship::{Orientation, Ship, ShipSpec};
use core::fmt;
use rand::Rng;

/// Cell set used for attack de-duplication.
pub type CellSet = BitGrid<u128, BOARD_SIZE>;

/// Attempt cap for seating one ship at random before reporting
/// setup-exhaustion. Practically unreachable with the standard fleet on a
/// 10×10 board.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 200;

/// A cell's occupant: index of the ship in the board's fleet plus the
/// segment of that ship covering the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ship: usize,
    pub segment: usize,
}

/// Read-only render state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    pub occupied: bool,
    pub hit: bool,
}

/// Read-only snapshot of a board for rendering: per-cell occupancy and hit
/// state plus the ordered miss list. Whether occupied-but-unhit cells are
/// drawn is a render-time decision, not board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub cells: [[CellView; BOARD_SIZE]; BOARD_SIZE],
    pub misses: Vec<(usize, usize)>,
}

/// One player's board: a 10×10 grid of occupancy, the placed fleet, and the
/// attack record.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Cell>; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    misses: Vec<(usize, usize)>,
    attacked: CellSet,
}

impl Board {
    /// Create an empty board (no ships placed, no attacks recorded).
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            misses: Vec::new(),
            attacked: CellSet::new(),
        }
    }

    /// Bounds check only: would a ship of `length` fit starting at
    /// (row, col)?
    fn fits(length: usize, row: usize, col: usize, orientation: Orientation) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        // subtraction cannot underflow once the start cell is in bounds
        match orientation {
            Orientation::Horizontal => length <= BOARD_SIZE - col,
            Orientation::Vertical => length <= BOARD_SIZE - row,
        }
    }

    /// Cells a placement would cover, in segment order. Caller must have
    /// checked `fits` first.
    fn span(
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> impl Iterator<Item = (usize, usize)> {
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Pure placement query: in bounds and every target cell empty. Basis
    /// for UI preview highlighting; no side effects.
    pub fn can_place(
        &self,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        length > 0
            && Self::fits(length, row, col, orientation)
            && Self::span(length, row, col, orientation).all(|(r, c)| self.cells[r][c].is_none())
    }

    /// Place a ship built from `spec` at (row, col). All-or-nothing: on any
    /// failure the board is left untouched.
    pub fn place_ship(
        &mut self,
        spec: ShipSpec,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = Ship::new(spec)?;
        if !self.can_place(spec.length(), row, col, orientation) {
            return Err(if Self::fits(spec.length(), row, col, orientation) {
                BoardError::ShipOverlaps
            } else {
                BoardError::ShipOutOfBounds
            });
        }
        let index = self.ships.len();
        for (segment, (r, c)) in Self::span(spec.length(), row, col, orientation).enumerate() {
            self.cells[r][c] = Some(Cell {
                ship: index,
                segment,
            });
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Returns a random placement for a ship of `length` that the board can
    /// accept, drawing row, column and orientation uniformly each attempt.
    /// Exhausting the attempt cap is a fatal setup error.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            if self.can_place(length, row, col, orientation) {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve an attack at (row, col). Returns `None` when the coordinate
    /// is out of bounds or already attacked: the attack is rejected and no
    /// turn is consumed. Each in-bounds coordinate resolves exactly once.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Option<ShotResult> {
        if self.attacked.get(row, col).ok()? {
            return None;
        }
        // in bounds and fresh from here on
        let _ = self.attacked.set(row, col);
        match self.cells[row][col] {
            Some(cell) => {
                let ship = &mut self.ships[cell.ship];
                ship.register_hit(cell.segment);
                if ship.is_sunk() {
                    Some(ShotResult::Sunk(ship.name()))
                } else {
                    Some(ShotResult::Hit)
                }
            }
            None => {
                self.misses.push((row, col));
                Some(ShotResult::Miss)
            }
        }
    }

    /// Returns `true` when every placed ship is sunk. Vacuously true for an
    /// empty fleet; the match controller never consults this before
    /// placement completes.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of ships placed so far.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Immutable view of the placed fleet.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ordered list of missed attacks.
    pub fn misses(&self) -> &[(usize, usize)] {
        &self.misses
    }

    /// Set of all resolved attack coordinates (hits and misses).
    pub fn attacked(&self) -> CellSet {
        self.attacked
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> BoardView {
        let mut cells = [[CellView::default(); BOARD_SIZE]; BOARD_SIZE];
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if let Some(cell) = self.cells[r][c] {
                    cells[r][c] = CellView {
                        occupied: true,
                        hit: self.ships[cell.ship].is_hit_at(cell.segment),
                    };
                }
            }
        }
        BoardView {
            cells,
            misses: self.misses.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for r in 0..BOARD_SIZE {
            write!(f, "  ")?;
            for c in 0..BOARD_SIZE {
                let ch = match self.cells[r][c] {
                    Some(cell) if self.ships[cell.ship].is_hit_at(cell.segment) => 'X',
                    Some(_) => 'S',
                    None if self.attacked.contains(r, c) => 'o',
                    None => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
