//! Distribution profiles - terrain and number-token pools per game variant

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Layout;
use crate::error::{GeneratorError, Result};
use crate::tiles::{NumberToken, Terrain};

/// Number tokens of the 19-hex game
const STANDARD_NUMBERS: &[u8] = &[2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

/// Number tokens of the 5-6 player extension
const EXTENDED_NUMBERS: &[u8] = &[
    2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6,
    8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12,
];

/// Named game variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// 3-4 players, 19 hexes
    Base,
    /// 5-6 player extension, 30 hexes
    FiveSixPlayer,
    /// Base frame with three Gold hexes in place of a Forest, Pasture and Field
    Custom,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Base, Profile::FiveSixPlayer, Profile::Custom];

    pub fn name(self) -> &'static str {
        match self {
            Profile::Base => "base",
            Profile::FiveSixPlayer => "five-six-player",
            Profile::Custom => "custom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Profile::Base => "Base game (3-4 players, 19 hexes)",
            Profile::FiveSixPlayer => "5-6 player extension (30 hexes)",
            Profile::Custom => "Custom distribution with Gold (19 hexes)",
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Profile::Base | Profile::Custom => Layout::Standard,
            Profile::FiveSixPlayer => Layout::Extended,
        }
    }

    /// Tile pools for this variant
    pub fn distribution(self) -> Distribution {
        use Terrain::*;

        let (terrains, numbers) = match self {
            Profile::Base => (
                vec![(Forest, 4), (Pasture, 4), (Field, 4), (Hill, 3), (Mountain, 3), (Desert, 1)],
                STANDARD_NUMBERS,
            ),
            Profile::FiveSixPlayer => (
                vec![(Forest, 6), (Pasture, 6), (Field, 6), (Hill, 5), (Mountain, 5), (Desert, 2)],
                EXTENDED_NUMBERS,
            ),
            Profile::Custom => (
                vec![(Forest, 3), (Pasture, 3), (Field, 3), (Hill, 3), (Mountain, 3), (Gold, 3), (Desert, 1)],
                STANDARD_NUMBERS,
            ),
        };

        Distribution {
            layout: self.layout(),
            terrains: terrains
                .into_iter()
                .flat_map(|(t, count)| std::iter::repeat(t).take(count))
                .collect(),
            // Literal tables above only hold legal token values
            numbers: numbers.iter().copied().map(NumberToken).collect(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Profile::Base),
            "five-six-player" | "5-6player" => Ok(Profile::FiveSixPlayer),
            "custom" => Ok(Profile::Custom),
            other => Err(GeneratorError::InvalidConfiguration(format!(
                "Unknown profile '{}' (expected base, five-six-player or custom)",
                other
            ))),
        }
    }
}

/// Terrain and number-token multisets for one board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Distribution {
    layout: Layout,
    terrains: Vec<Terrain>,
    numbers: Vec<NumberToken>,
}

impl Distribution {
    /// Build a distribution, checking pool sizes against the layout
    pub fn new(layout: Layout, terrains: Vec<Terrain>, numbers: Vec<NumberToken>) -> Result<Self> {
        let hexes = layout.hex_count();
        if terrains.len() != hexes {
            return Err(GeneratorError::DistributionMismatch(format!(
                "{:?} layout needs {} terrains, got {}",
                layout,
                hexes,
                terrains.len()
            )));
        }

        let deserts = terrains.iter().filter(|t| t.is_desert()).count();
        if numbers.len() != hexes - deserts {
            return Err(GeneratorError::DistributionMismatch(format!(
                "{} non-desert hexes need {} number tokens, got {}",
                hexes - deserts,
                hexes - deserts,
                numbers.len()
            )));
        }

        Ok(Self { layout, terrains, numbers })
    }

    /// Load a user-defined distribution from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: DistributionFile = serde_json::from_str(&content)?;
        file.try_into()
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = DistributionFile {
            layout: self.layout,
            terrains: self.terrains.iter().map(|t| t.name().to_string()).collect(),
            numbers: self.numbers.iter().map(|n| n.value()).collect(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn terrains(&self) -> &[Terrain] {
        &self.terrains
    }

    pub fn numbers(&self) -> &[NumberToken] {
        &self.numbers
    }

    pub fn desert_count(&self) -> usize {
        self.terrains.iter().filter(|t| t.is_desert()).count()
    }
}

/// On-disk form: terrain names and plain integers
#[derive(Debug, Serialize, Deserialize)]
struct DistributionFile {
    #[serde(default = "default_layout")]
    layout: Layout,
    terrains: Vec<String>,
    numbers: Vec<u8>,
}

fn default_layout() -> Layout {
    Layout::Standard
}

impl TryFrom<DistributionFile> for Distribution {
    type Error = GeneratorError;

    fn try_from(file: DistributionFile) -> Result<Self> {
        let terrains = file
            .terrains
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Terrain>>>()?;
        let numbers = file
            .numbers
            .into_iter()
            .map(NumberToken::new)
            .collect::<Result<Vec<_>>>()?;
        Distribution::new(file.layout, terrains, numbers)
    }
}
