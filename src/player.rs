//! Players: board ownership, attack history, and the autonomous targeting
//! heuristic (random search with hit-streak follow-up).

use crate::board::{Board, CellSet};
use crate::common::{AttackOutcome, ShotResult};
use crate::config::BOARD_SIZE;
use rand::Rng;

/// Random draws attempted before falling back to the deterministic scan.
const RANDOM_TARGET_ATTEMPTS: usize = 100;

/// Orthogonal neighbour offsets in fixed north, south, west, east order.
/// Pushed onto the LIFO hunt stack in this order, so east pops first.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Resolved attack attempt: the outcome plus the coordinate actually fired
/// at (for autonomous players, the derived target).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    pub row: usize,
    pub col: usize,
}

impl AttackReport {
    fn rejected(row: usize, col: usize) -> Self {
        AttackReport {
            outcome: AttackOutcome::Rejected,
            row,
            col,
        }
    }
}

/// One side of the match: owns a board, records every coordinate it has
/// fired at, and (when autonomous) hunts ships by expanding neighbours of
/// recent hits.
pub struct Player {
    name: String,
    autonomous: bool,
    board: Board,
    history: CellSet,
    pending_targets: Vec<(usize, usize)>,
}

impl Player {
    /// Create a player with a fresh board and empty attack history.
    pub fn new(name: impl Into<String>, autonomous: bool) -> Self {
        Player {
            name: name.into(),
            autonomous,
            board: Board::new(),
            history: CellSet::new(),
            pending_targets: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_autonomous(&self) -> bool {
        self.autonomous
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Coordinates this player has fired at on the opponent's board.
    pub fn attack_history(&self) -> CellSet {
        self.history
    }

    /// Fire at the opponent's board.
    ///
    /// Manual players must supply a coordinate and get `Rejected` for
    /// repeats or out-of-bounds targets. Autonomous players ignore the
    /// supplied coordinate and derive their own. A `Rejected` outcome
    /// mutates nothing: no history insertion, no board mutation.
    pub fn attack<R: Rng>(
        &mut self,
        enemy_board: &mut Board,
        coord: Option<(usize, usize)>,
        rng: &mut R,
    ) -> AttackReport {
        let (row, col) = if self.autonomous {
            match self.select_target(rng) {
                Some(target) => target,
                // every cell already attacked: no legal move
                None => return AttackReport::rejected(0, 0),
            }
        } else {
            match coord {
                Some((r, c)) if !self.history.contains(r, c) => (r, c),
                Some((r, c)) => return AttackReport::rejected(r, c),
                None => return AttackReport::rejected(0, 0),
            }
        };

        let Some(result) = enemy_board.receive_attack(row, col) else {
            return AttackReport::rejected(row, col);
        };
        let _ = self.history.set(row, col);

        if self.autonomous {
            match result {
                ShotResult::Hit => self.enqueue_neighbours(row, col),
                // ship fully discovered, drop the remaining probes
                ShotResult::Sunk(_) => self.pending_targets.clear(),
                ShotResult::Miss => {}
            }
        }

        AttackReport {
            outcome: result.into(),
            row,
            col,
        }
    }

    /// Targeting heuristic, in strict priority order: drain the hunt stack,
    /// then bounded random search, then a row-major scan. Returns `None`
    /// only when the whole board has been attacked.
    fn select_target<R: Rng>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        while let Some((r, c)) = self.pending_targets.pop() {
            if r < BOARD_SIZE && c < BOARD_SIZE && !self.history.contains(r, c) {
                return Some((r, c));
            }
        }

        if self.history.is_full() {
            return None;
        }

        for _ in 0..RANDOM_TARGET_ATTEMPTS {
            let r = rng.random_range(0..BOARD_SIZE);
            let c = rng.random_range(0..BOARD_SIZE);
            if !self.history.contains(r, c) {
                return Some((r, c));
            }
        }

        // guaranteed termination: first unattacked cell in row-major order
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if !self.history.contains(r, c) {
                    return Some((r, c));
                }
            }
        }
        None
    }

    /// Queue the in-bounds, not-yet-tried orthogonal neighbours of a hit.
    fn enqueue_neighbours(&mut self, row: usize, col: usize) {
        for (dr, dc) in NEIGHBOUR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || c < 0 {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            if r < BOARD_SIZE && c < BOARD_SIZE && !self.history.contains(r, c) {
                self.pending_targets.push((r, c));
            }
        }
        log::debug!(
            "{}: hit at ({}, {}), {} pending targets",
            self.name,
            row,
            col,
            self.pending_targets.len()
        );
    }

    /// Pending hunt targets, most recently derived last.
    pub fn pending_targets(&self) -> &[(usize, usize)] {
        &self.pending_targets
    }
}
