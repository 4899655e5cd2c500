//! Terminal rendering of board snapshots and coordinate parsing. This is
//! the presentation side of the core's read-only contract: it consumes
//! `BoardView`s and produces discrete intents, never reaching into ship
//! internals.

use crate::board::BoardView;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// Format a coordinate in `A5` notation (column letter, 1-based row).
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse an `A5`-style coordinate. Returns `None` for anything that does
/// not name a cell on the 10×10 board.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

/// Parse an orientation flag: `H`/`V`, any case.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.chars().next()?.to_ascii_uppercase() {
        'H' => Some(Orientation::Horizontal),
        'V' => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Render a board snapshot. `reveal` controls whether unhit ship cells are
/// drawn; during combat an opponent's board is rendered unrevealed, after
/// the match both fleets are shown.
pub fn render_board(view: &BoardView, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        out.push_str(&format!("{:2} ", r + 1));
        for c in 0..BOARD_SIZE {
            let cell = view.cells[r][c];
            let ch = if cell.occupied && cell.hit {
                'X'
            } else if view.misses.contains(&(r, c)) {
                'o'
            } else if reveal && cell.occupied {
                'S'
            } else {
                '.'
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_roundtrip() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("j10"), Some((9, 9)));
        assert_eq!(coord_to_string(4, 2), "C5");
        assert_eq!(parse_coord(&coord_to_string(7, 3)), Some((7, 3)));
    }

    #[test]
    fn bad_coords_rejected() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("K1"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("A11"), None);
        assert_eq!(parse_coord("55"), None);
    }

    #[test]
    fn orientation_flags() {
        assert_eq!(parse_orientation("h"), Some(Orientation::Horizontal));
        assert_eq!(parse_orientation("Vertical"), Some(Orientation::Vertical));
        assert_eq!(parse_orientation("x"), None);
    }
}
