//! Hard constraints a candidate must satisfy before it is scored

use serde::Serialize;

use crate::board::{Board, Position};

/// A broken hard constraint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Violation {
    /// Two neighboring hexes both hold a 6 or an 8 (lower position first)
    AdjacentHighNumbers(Position, Position),
    /// A desert sits on an edge position
    DesertOnEdge(Position),
}

/// No hex holding a 6 or 8 touches another hex holding a 6 or 8
pub fn no_adjacent_high_numbers(board: &Board) -> bool {
    board
        .iter()
        .filter(|hex| hex.is_high())
        .all(|hex| !board.neighbors(hex.position()).any(|n| n.is_high()))
}

/// No desert on the layout's edge set
pub fn desert_interior(board: &Board) -> bool {
    let layout = board.layout();
    board
        .iter()
        .filter(|hex| hex.terrain().is_desert())
        .all(|hex| !layout.is_edge(hex.position()))
}

/// Both hard constraints; the 6/8 check rejects far more candidates so it runs first
pub fn is_valid(board: &Board) -> bool {
    no_adjacent_high_numbers(board) && desert_interior(board)
}

/// Every violation on the board, each adjacent pair reported once
pub fn violations(board: &Board) -> Vec<Violation> {
    let layout = board.layout();
    let mut found = Vec::new();

    for hex in board.iter().filter(|hex| hex.is_high()) {
        let pos = hex.position();
        for neighbor in board.neighbors(pos) {
            if neighbor.is_high() && pos < neighbor.position() {
                found.push(Violation::AdjacentHighNumbers(pos, neighbor.position()));
            }
        }
    }

    found.extend(
        board
            .iter()
            .filter(|hex| hex.terrain().is_desert() && layout.is_edge(hex.position()))
            .map(|hex| Violation::DesertOnEdge(hex.position())),
    );

    found
}
