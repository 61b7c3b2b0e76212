//! Board geometry: layouts, adjacency tables, hexes and boards

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::tiles::{pip_weight, NumberToken, Terrain};

/// Index of a hex on the board, zero-based, row by row
pub type Position = u8;

/// Static description of one board shape
#[derive(Debug)]
pub struct Topology {
    /// Hexes per display row, top to bottom
    pub rows: &'static [usize],
    /// Neighbors of each position
    pub adjacency: &'static [&'static [Position]],
    /// Positions on which a desert may not be placed
    pub edges: &'static [Position],
}

/// Standard 3-4-5-4-3 board (19 hexes)
pub static STANDARD: Topology = Topology {
    rows: &[3, 4, 5, 4, 3],
    adjacency: &[
        &[1, 3, 4],
        &[0, 2, 4, 5],
        &[1, 5, 6],
        &[0, 4, 7, 8],
        &[0, 1, 3, 5, 8, 9],
        &[1, 2, 4, 6, 9, 10],
        &[2, 5, 10, 11],
        &[3, 8, 12],
        &[3, 4, 7, 9, 12, 13],
        &[4, 5, 8, 10, 13, 14],
        &[5, 6, 9, 11, 14, 15],
        &[6, 10, 15],
        &[7, 8, 13, 16],
        &[8, 9, 12, 14, 16, 17],
        &[9, 10, 13, 15, 17, 18],
        &[10, 11, 14, 18],
        &[12, 13, 17],
        &[13, 14, 16, 18],
        &[14, 15, 17],
    ],
    // Position 15 sits on the rim but has always been allowed to hold the desert
    edges: &[0, 1, 2, 3, 6, 7, 11, 12, 16, 17, 18],
};

/// Extended 3-4-5-6-5-4-3 board for 5-6 players (30 hexes)
pub static EXTENDED: Topology = Topology {
    rows: &[3, 4, 5, 6, 5, 4, 3],
    adjacency: &[
        &[1, 3, 4],
        &[0, 2, 4, 5],
        &[1, 5, 6],
        &[0, 4, 7, 8],
        &[0, 1, 3, 5, 8, 9],
        &[1, 2, 4, 6, 9, 10],
        &[2, 5, 10, 11],
        &[3, 8, 12, 13],
        &[3, 4, 7, 9, 13, 14],
        &[4, 5, 8, 10, 14, 15],
        &[5, 6, 9, 11, 15, 16],
        &[6, 10, 16, 17],
        &[7, 13, 18],
        &[7, 8, 12, 14, 18, 19],
        &[8, 9, 13, 15, 19, 20],
        &[9, 10, 14, 16, 20, 21],
        &[10, 11, 15, 17, 21, 22],
        &[11, 16, 22],
        &[12, 13, 19, 23],
        &[13, 14, 18, 20, 23, 24],
        &[14, 15, 19, 21, 24, 25],
        &[15, 16, 20, 22, 25, 26],
        &[16, 17, 21, 26],
        &[18, 19, 24, 27],
        &[19, 20, 23, 25, 27, 28],
        &[20, 21, 24, 26, 28, 29],
        &[21, 22, 25, 29],
        &[23, 24, 28],
        &[24, 25, 27, 29],
        &[25, 26, 28],
    ],
    edges: &[0, 1, 2, 3, 6, 7, 11, 12, 17, 18, 22, 23, 26, 27, 28, 29],
};

/// Board shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    Standard,
    Extended,
}

impl Layout {
    pub fn topology(self) -> &'static Topology {
        match self {
            Layout::Standard => &STANDARD,
            Layout::Extended => &EXTENDED,
        }
    }

    /// Number of hexes on this layout
    pub fn hex_count(self) -> usize {
        self.topology().adjacency.len()
    }

    /// Neighbors of a position (empty if out of range)
    pub fn neighbors(self, pos: Position) -> &'static [Position] {
        self.topology()
            .adjacency
            .get(pos as usize)
            .copied()
            .unwrap_or(&[])
    }

    pub fn is_adjacent(self, a: Position, b: Position) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn is_edge(self, pos: Position) -> bool {
        self.topology().edges.contains(&pos)
    }

    /// Position ranges of each display row
    pub fn rows(self) -> Vec<std::ops::Range<usize>> {
        let mut start = 0;
        self.topology()
            .rows
            .iter()
            .map(|&len| {
                let range = start..start + len;
                start += len;
                range
            })
            .collect()
    }
}

/// One board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hex {
    position: Position,
    terrain: Terrain,
    number: Option<NumberToken>,
}

impl Hex {
    /// Create a hex; deserts carry no token and every other terrain carries one
    pub fn new(position: Position, terrain: Terrain, number: Option<NumberToken>) -> Result<Self> {
        match (terrain.is_desert(), number) {
            (true, Some(n)) => Err(GeneratorError::InvalidHex {
                position,
                reason: format!("desert cannot carry number {}", n),
            }),
            (false, None) => Err(GeneratorError::InvalidHex {
                position,
                reason: format!("{} requires a number token", terrain),
            }),
            _ => Ok(Self { position, terrain, number }),
        }
    }

    /// Skip validation; the caller guarantees the desert rule
    pub(crate) fn from_parts(position: Position, terrain: Terrain, number: Option<NumberToken>) -> Self {
        debug_assert_eq!(terrain.is_desert(), number.is_none());
        Self { position, terrain, number }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn number(&self) -> Option<NumberToken> {
        self.number
    }

    pub fn pips(&self) -> u32 {
        pip_weight(self.number)
    }

    /// Holds a 6 or an 8
    pub fn is_high(&self) -> bool {
        self.number.is_some_and(NumberToken::is_high)
    }
}

/// A complete board: exactly one hex per position, in position order
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    layout: Layout,
    hexes: Vec<Hex>,
}

impl Board {
    /// Build a board, checking that hex `i` sits at position `i`
    pub fn new(layout: Layout, hexes: Vec<Hex>) -> Result<Self> {
        if hexes.len() != layout.hex_count() {
            return Err(GeneratorError::InvalidBoard(format!(
                "{:?} layout has {} positions, got {} hexes",
                layout,
                layout.hex_count(),
                hexes.len()
            )));
        }
        if let Some((i, hex)) = hexes
            .iter()
            .enumerate()
            .find(|(i, hex)| hex.position as usize != *i)
        {
            return Err(GeneratorError::InvalidBoard(format!(
                "hex at index {} claims position {}",
                i, hex.position
            )));
        }
        Ok(Self { layout, hexes })
    }

    pub(crate) fn from_parts(layout: Layout, hexes: Vec<Hex>) -> Self {
        debug_assert_eq!(hexes.len(), layout.hex_count());
        Self { layout, hexes }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn get(&self, pos: Position) -> Option<&Hex> {
        self.hexes.get(pos as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hex> {
        self.hexes.iter()
    }

    /// Neighboring hexes of a position
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = &Hex> + '_ {
        self.layout
            .neighbors(pos)
            .iter()
            .filter_map(move |&p| self.get(p))
    }

    /// Hexes grouped into display rows
    pub fn rows(&self) -> Vec<&[Hex]> {
        self.layout
            .rows()
            .into_iter()
            .map(|range| &self.hexes[range])
            .collect()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Hex;
    type IntoIter = std::slice::Iter<'a, Hex>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.iter()
    }
}
