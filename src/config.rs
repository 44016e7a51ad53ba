//! Game configuration types.
//!
//! A [`GameConfig`] holds everything needed to start a game: which board to
//! play on and who controls each side. The binary builds one from its
//! command line.

use crate::agent::ai::Difficulty;
use crate::game_repr::Color;

/// Board shape to play on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Variant {
    /// Standard 8x8 chess
    #[default]
    Standard,
    /// Three stacked 8x8 boards
    Layered,
}

impl Variant {
    pub fn layers(&self) -> usize {
        match self {
            Variant::Standard => 1,
            Variant::Layered => crate::game_repr::LAYERED_BOARD_LAYERS,
        }
    }
}

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player typing moves
    Human,
    /// Computer player with specified difficulty
    Computer { difficulty: Difficulty },
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: Variant,
    /// Configuration for the White player
    pub white_player: PlayerConfig,
    /// Configuration for the Black player
    pub black_player: PlayerConfig,
}

impl GameConfig {
    /// Two humans.
    pub fn pvp(variant: Variant) -> Self {
        Self {
            variant,
            white_player: PlayerConfig::Human,
            black_player: PlayerConfig::Human,
        }
    }

    /// Human against the computer.
    ///
    /// # Arguments
    /// * `user_color` - The color the human player will play as
    /// * `difficulty` - The difficulty level for the computer opponent
    pub fn pvc(variant: Variant, user_color: Color, difficulty: Difficulty) -> Self {
        let computer = PlayerConfig::Computer { difficulty };
        let (white_player, black_player) = match user_color {
            Color::White => (PlayerConfig::Human, computer),
            Color::Black => (computer, PlayerConfig::Human),
        };

        Self {
            variant,
            white_player,
            black_player,
        }
    }

    /// Computer against computer.
    pub fn cvc(variant: Variant, white_difficulty: Difficulty, black_difficulty: Difficulty) -> Self {
        Self {
            variant,
            white_player: PlayerConfig::Computer { difficulty: white_difficulty },
            black_player: PlayerConfig::Computer { difficulty: black_difficulty },
        }
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }

    /// The human's color when exactly one side is human
    pub fn human_color(&self) -> Option<Color> {
        match (self.white_player, self.black_player) {
            (PlayerConfig::Human, PlayerConfig::Computer { .. }) => Some(Color::White),
            (PlayerConfig::Computer { .. }, PlayerConfig::Human) => Some(Color::Black),
            _ => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pvc(Variant::Standard, Color::White, Difficulty::Medium)
    }
}
