//! Ship definitions: fleet specs, orientation and per-segment damage.

use crate::common::BoardError;
use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Spec of a ship slot in the fleet: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    /// Create a new ship spec.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in segments.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A vessel tracking per-segment damage. Segments are indexed 0..length in
/// placement order; the board stores which cell maps to which segment.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    spec: ShipSpec,
    hits: Vec<bool>,
}

impl Ship {
    /// Create a new undamaged ship. Fails for a zero-length spec.
    pub fn new(spec: ShipSpec) -> Result<Self, BoardError> {
        if spec.length() == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        Ok(Ship {
            spec,
            hits: vec![false; spec.length()],
        })
    }

    /// Mark a segment damaged. Out-of-range indices are a silent no-op,
    /// guarding against stale coordinates.
    pub fn register_hit(&mut self, segment: usize) {
        if let Some(hit) = self.hits.get_mut(segment) {
            *hit = true;
        }
    }

    /// Whether a segment is damaged; false for out-of-range.
    pub fn is_hit_at(&self, segment: usize) -> bool {
        self.hits.get(segment).copied().unwrap_or(false)
    }

    /// Check if the ship is sunk (all segments damaged).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&hit| hit)
    }

    /// Number of damaged segments.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&hit| hit).count()
    }

    /// Ship's spec.
    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    /// Ship's length in segments.
    pub fn length(&self) -> usize {
        self.spec.length()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, hits: {}/{} }}",
            self.spec.name(),
            self.spec.length(),
            self.hit_count(),
            self.spec.length(),
        )
    }
}
