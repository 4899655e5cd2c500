//! Match controller: phase sequencing, turn order, the placement queue and
//! restart. Sole entry point for the presentation layer and sole caller
//! into boards and players.

use crate::board::BoardView;
use crate::common::{AttackOutcome, GameError};
use crate::config::FLEET;
use crate::player::{AttackReport, Player};
use crate::ship::{Orientation, ShipSpec};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Match phase. Transitions only forward; a restart rebuilds placement
/// state from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placement,
    Combat,
    Finished,
}

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One manual player against the computer.
    VsComputer,
    /// Two manual players sharing the controller.
    TwoPlayer,
    /// Computer against computer, for simulations.
    Spectate,
}

/// Placement-phase state exposed for UI labeling: ships still to place,
/// the current selection and the default orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOptions<'a> {
    pub remaining: &'a [ShipSpec],
    pub selected: usize,
    pub orientation: Orientation,
}

/// An explicitly constructed match instance. Multiple matches can coexist;
/// restarting one never touches another.
pub struct Game {
    mode: Mode,
    phase: Phase,
    players: [Player; 2],
    active: usize,
    pending: Vec<ShipSpec>,
    selected: usize,
    orientation: Orientation,
    winner: Option<usize>,
    epoch: u64,
    rng: SmallRng,
}

impl Game {
    /// Create a match with an OS-seeded RNG.
    pub fn new(mode: Mode) -> Result<Self, GameError> {
        Self::with_rng(mode, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Create a match with a caller-supplied RNG for reproducible games.
    pub fn with_rng(mode: Mode, rng: SmallRng) -> Result<Self, GameError> {
        let mut game = Game {
            mode,
            phase: Phase::Placement,
            players: Self::make_players(mode),
            active: 0,
            pending: FLEET.to_vec(),
            selected: 0,
            orientation: Orientation::Horizontal,
            winner: None,
            epoch: 0,
            rng,
        };
        game.begin()?;
        Ok(game)
    }

    fn make_players(mode: Mode) -> [Player; 2] {
        match mode {
            Mode::VsComputer => [
                Player::new("Player 1", false),
                Player::new("Computer", true),
            ],
            Mode::TwoPlayer => [Player::new("Player 1", false), Player::new("Player 2", false)],
            Mode::Spectate => [
                Player::new("Computer 1", true),
                Player::new("Computer 2", true),
            ],
        }
    }

    /// Enter the placement phase, or combat directly when nobody places by
    /// hand.
    fn begin(&mut self) -> Result<(), GameError> {
        if self.players.iter().all(Player::is_autonomous) {
            self.enter_combat()?;
        }
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the player whose turn (or placement) it is.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Name of the player whose turn (or placement) it is.
    pub fn active_player(&self) -> &str {
        self.players[self.active].name()
    }

    pub fn active_is_autonomous(&self) -> bool {
        self.players[self.active].is_autonomous()
    }

    /// Winner's player index once the match is finished.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Winner's name once the match is finished.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|i| self.players[i].name())
    }

    /// Monotonic counter bumped on every restart. A delayed autonomous-turn
    /// callback carries the epoch it was scheduled under and becomes a
    /// no-op once stale.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Read-only render snapshot of one player's board.
    pub fn board_view(&self, player: usize) -> BoardView {
        self.players[player].board().view()
    }

    /// Placement-phase options, or an error outside that phase.
    pub fn placement_options(&self) -> Result<PlacementOptions<'_>, GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        Ok(PlacementOptions {
            remaining: &self.pending,
            selected: self.selected,
            orientation: self.orientation,
        })
    }

    /// Select which pending ship the next `place_at` seats.
    pub fn select_ship(&mut self, index: usize) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        if index >= self.pending.len() {
            return Err(GameError::InvalidShipSelection);
        }
        self.selected = index;
        Ok(())
    }

    /// Set the default orientation for the next placement.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Place the selected ship at (row, col) on the active player's board.
    /// On failure neither queue nor board changes.
    pub fn place_at(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        let spec = *self
            .pending
            .get(self.selected)
            .ok_or(GameError::InvalidShipSelection)?;
        self.players[self.active]
            .board_mut()
            .place_ship(spec, row, col, self.orientation)
            .map_err(GameError::Placement)?;
        log::debug!(
            "{} placed {} at ({}, {})",
            self.players[self.active].name(),
            spec.name(),
            row,
            col
        );
        self.pending.remove(self.selected);
        self.selected = 0;
        if self.pending.is_empty() {
            self.advance_placement()?;
        }
        Ok(())
    }

    /// Seat every remaining ship of the active player at random. Exhausting
    /// the attempt cap for one ship is fatal for the pass; earlier ships
    /// remain seated.
    pub fn place_randomly(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        while let Some(&spec) = self.pending.first() {
            Self::seat_randomly(&mut self.players[self.active], spec, &mut self.rng)?;
            self.pending.remove(0);
        }
        self.selected = 0;
        self.advance_placement()
    }

    fn seat_randomly(
        player: &mut Player,
        spec: ShipSpec,
        rng: &mut SmallRng,
    ) -> Result<(), GameError> {
        let board = player.board_mut();
        let (row, col, orientation) = board
            .random_placement(rng, spec.length())
            .map_err(GameError::SetupFailed)?;
        board
            .place_ship(spec, row, col, orientation)
            .map_err(GameError::SetupFailed)?;
        Ok(())
    }

    /// The active player's queue emptied: hand placement to the next manual
    /// player, or seed the autonomous fleets and start combat.
    fn advance_placement(&mut self) -> Result<(), GameError> {
        if self.active + 1 < self.players.len() && !self.players[self.active + 1].is_autonomous() {
            self.active += 1;
            self.pending = FLEET.to_vec();
            self.selected = 0;
            self.orientation = Orientation::Horizontal;
            return Ok(());
        }
        self.enter_combat()
    }

    fn enter_combat(&mut self) -> Result<(), GameError> {
        for player in self.players.iter_mut().filter(|p| p.is_autonomous()) {
            if player.board().ship_count() == 0 {
                for spec in FLEET {
                    Self::seat_randomly(player, spec, &mut self.rng)?;
                }
            }
        }
        self.pending.clear();
        self.phase = Phase::Combat;
        self.active = 0;
        log::info!("combat begins, {} to move", self.players[0].name());
        Ok(())
    }

    /// Resolve one attack by the active player against the opponent's
    /// board. A `Rejected` outcome keeps the turn with the same player;
    /// anything else passes the turn, unless the opponent's fleet is now
    /// fully sunk, which finishes the match with the attacker as winner.
    pub fn attack(&mut self, coord: Option<(usize, usize)>) -> Result<AttackReport, GameError> {
        if self.phase != Phase::Combat {
            return Err(GameError::WrongPhase);
        }
        if !self.players[self.active].is_autonomous() && coord.is_none() {
            return Err(GameError::CoordinateRequired);
        }

        let defender = 1 - self.active;
        let (attacker_ref, defender_ref) = {
            let (left, right) = self.players.split_at_mut(1);
            if self.active == 0 {
                (&mut left[0], &mut right[0])
            } else {
                (&mut right[0], &mut left[0])
            }
        };
        let report = attacker_ref.attack(defender_ref.board_mut(), coord, &mut self.rng);

        match report.outcome {
            AttackOutcome::Rejected => {}
            _ => {
                if self.players[defender].board().all_sunk() {
                    self.phase = Phase::Finished;
                    self.winner = Some(self.active);
                    log::info!("match finished, {} wins", self.players[self.active].name());
                } else {
                    self.active = defender;
                }
            }
        }
        Ok(report)
    }

    /// Play the autonomous side's scheduled move. Returns `None` (a no-op)
    /// when the epoch is stale, the match is no longer in combat, or the
    /// active player is not autonomous.
    pub fn autonomous_turn(&mut self, epoch: u64) -> Option<AttackReport> {
        if epoch != self.epoch
            || self.phase != Phase::Combat
            || !self.players[self.active].is_autonomous()
        {
            return None;
        }
        self.attack(None).ok()
    }

    /// Discard all match state and rebuild a fresh placement phase from the
    /// canonical fleet. Bumps the epoch so any in-flight delayed autonomous
    /// move becomes a no-op.
    pub fn restart(&mut self) -> Result<(), GameError> {
        log::info!("match restarted");
        self.epoch += 1;
        self.phase = Phase::Placement;
        self.players = Self::make_players(self.mode);
        self.active = 0;
        self.pending = FLEET.to_vec();
        self.selected = 0;
        self.orientation = Orientation::Horizontal;
        self.winner = None;
        self.begin()
    }
}
