//! Search, player and game settings.
//!
//! Everything here is plain data with defaults. The binary parses [`CliArgs`]
//! with clap and turns them into a [`GameConfig`]; the library never reads
//! the environment itself.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use log::warn;
use thiserror::Error;

use crate::game_repr::START_PLACEMENT;

/// Deepest iteration a search may be configured for
pub const MAX_SEARCH_DEPTH: u8 = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown difficulty {0:?} (expected easy, medium, hard, expert or random)")]
    UnknownDifficulty(String),
}

/// Limits for one iterative-deepening search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// No new iteration starts once this much time has passed
    pub time_budget: Duration,
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(5),
            max_depth: 20,
        }
    }
}

impl SearchConfig {
    /// Clamps the depth into `1..=MAX_SEARCH_DEPTH`, logging when it had to
    pub fn validated(mut self) -> Self {
        if self.max_depth == 0 || self.max_depth > MAX_SEARCH_DEPTH {
            let clamped = self.max_depth.clamp(1, MAX_SEARCH_DEPTH);
            warn!(
                "Rejected search depth {}, using {} instead",
                self.max_depth, clamped
            );
            self.max_depth = clamped;
        }
        self
    }
}

/// Engine strength presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Two plies, answers almost instantly
    Easy,
    #[default]
    Medium,
    Hard,
    /// Full default depth, deepening until the clock runs out
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn search_config(self) -> SearchConfig {
        let max_depth = match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => SearchConfig::default().max_depth,
        };
        SearchConfig {
            max_depth,
            ..SearchConfig::default()
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// Who picks the moves for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    Random,
    Engine(SearchConfig),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::Engine(Difficulty::default().search_config())
    }
}

impl FromStr for PlayerConfig {
    type Err = ConfigError;

    /// A difficulty name, or `random`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            return Ok(PlayerConfig::Random);
        }
        let difficulty: Difficulty = s.parse()?;
        Ok(PlayerConfig::Engine(difficulty.search_config()))
    }
}

/// One self-play game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white: PlayerConfig,
    pub black: PlayerConfig,
    pub start_placement: String,
    /// The game is abandoned after this many half-moves
    pub max_plies: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerConfig::default(),
            black: PlayerConfig::default(),
            start_placement: START_PLACEMENT.to_string(),
            max_plies: 400,
        }
    }
}

/// Command line of the self-play binary
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bitboard_chess", version, about = "Plays one engine game and logs the moves")]
pub struct CliArgs {
    /// Player for both sides: easy, medium, hard, expert or random
    #[arg(default_value = "medium")]
    pub player: PlayerConfig,

    /// Starting placement, rank 8 first (e.g. "4k3/8/8/8/8/8/8/4K3")
    pub placement: Option<String>,

    /// Abandon the game after this many half-moves
    #[arg(long, default_value_t = 400)]
    pub max_plies: u32,
}

impl From<CliArgs> for GameConfig {
    fn from(args: CliArgs) -> Self {
        GameConfig {
            white: args.player,
            black: args.player,
            start_placement: args.placement.unwrap_or_else(|| START_PLACEMENT.to_string()),
            max_plies: args.max_plies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let search = SearchConfig::default();
        assert_eq!(search.time_budget, Duration::from_secs(5));
        assert_eq!(search.max_depth, 20);

        let game = GameConfig::default();
        assert_eq!(game.start_placement, START_PLACEMENT);
        assert_eq!(game.white, PlayerConfig::Engine(Difficulty::Medium.search_config()));
    }

    #[test]
    fn test_difficulty_depths_increase() {
        let depths: Vec<u8> = Difficulty::ALL
            .iter()
            .map(|d| d.search_config().max_depth)
            .collect();
        assert!(depths.windows(2).all(|w| w[0] < w[1]), "{:?}", depths);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("EXPERT".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert_eq!(
            "grandmaster".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty("grandmaster".to_string()))
        );
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_validated_clamps_depth() {
        let zero = SearchConfig {
            max_depth: 0,
            ..SearchConfig::default()
        };
        assert_eq!(zero.validated().max_depth, 1);

        let huge = SearchConfig {
            max_depth: 200,
            ..SearchConfig::default()
        };
        assert_eq!(huge.validated().max_depth, MAX_SEARCH_DEPTH);

        assert_eq!(SearchConfig::default().validated(), SearchConfig::default());
    }

    #[test]
    fn test_cli_defaults_match_game_defaults() {
        let args = CliArgs::try_parse_from(["bitboard_chess"]).unwrap();
        assert_eq!(GameConfig::from(args), GameConfig::default());
    }

    #[test]
    fn test_cli_player_and_placement() {
        let args =
            CliArgs::try_parse_from(["bitboard_chess", "random", "4k3/8/8/8/8/8/8/4K3"]).unwrap();
        let config = GameConfig::from(args);
        assert_eq!(config.white, PlayerConfig::Random);
        assert_eq!(config.black, PlayerConfig::Random);
        assert_eq!(config.start_placement, "4k3/8/8/8/8/8/8/4K3");

        let args =
            CliArgs::try_parse_from(["bitboard_chess", "EASY", "--max-plies", "12"]).unwrap();
        let config = GameConfig::from(args);
        assert_eq!(config.black, PlayerConfig::Engine(Difficulty::Easy.search_config()));
        assert_eq!(config.max_plies, 12);
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        use clap::error::ErrorKind;

        let err = CliArgs::try_parse_from(["bitboard_chess", "nope"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = CliArgs::try_parse_from(["bitboard_chess", "easy", "8/8/8/8/8/8/8/8", "extra"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = CliArgs::try_parse_from(["bitboard_chess", "--max-plies", "lots"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = CliArgs::try_parse_from(["bitboard_chess", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
