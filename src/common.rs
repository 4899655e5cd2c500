//! Common result and error types shared by the board, player and match
//! controller.

use crate::grid::BitGridError;
use core::fmt;

/// Result of a resolved shot on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot hit an undepleted ship segment.
    Hit,
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
    /// Shot missed all ships.
    Miss,
}

/// Outcome of a player's attack attempt. `Rejected` signals the attack was
/// disallowed without consuming a turn and without mutating any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit,
    Sunk(&'static str),
    Miss,
    /// Attack disallowed: repeat coordinate, out of bounds, or no legal
    /// move left on the board.
    Rejected,
}

impl From<ShotResult> for AttackOutcome {
    fn from(res: ShotResult) -> Self {
        match res {
            ShotResult::Hit => AttackOutcome::Hit,
            ShotResult::Sunk(name) => AttackOutcome::Sunk(name),
            ShotResult::Miss => AttackOutcome::Miss,
        }
    }
}

/// Errors returned by ship and board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (invalid index).
    BitGridError(BitGridError),
    /// Ship length must be at least one segment.
    InvalidShipLength,
    /// Ship placement runs off the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement could not seat the ship within the attempt cap.
    UnableToPlaceShip,
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        BoardError::BitGridError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitGridError(e) => write!(f, "grid error: {}", e),
            BoardError::InvalidShipLength => write!(f, "ship length must be positive"),
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            BoardError::UnableToPlaceShip => write!(f, "unable to place ship"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors returned by the match controller. All are recoverable: the match
/// continues and the same actor retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation is not valid in the current phase.
    WrongPhase,
    /// Ship selection index does not refer to a pending ship.
    InvalidShipSelection,
    /// Manual placement failed; the board is unchanged.
    Placement(BoardError),
    /// Random placement exhausted its attempt cap. Fatal for this placement
    /// pass; ships seated earlier in the pass remain on the board.
    SetupFailed(BoardError),
    /// A manual player attacked without supplying a coordinate.
    CoordinateRequired,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongPhase => write!(f, "operation not valid in the current phase"),
            GameError::InvalidShipSelection => write!(f, "no pending ship at that index"),
            GameError::Placement(e) => write!(f, "invalid placement: {}", e),
            GameError::SetupFailed(e) => write!(f, "fleet setup failed: {}", e),
            GameError::CoordinateRequired => write!(f, "a target coordinate is required"),
        }
    }
}

impl std::error::Error for GameError {}
