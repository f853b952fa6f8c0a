//! Game engine: outcome evaluation and the tiered computer-move heuristic

use std::{fmt, str::FromStr};

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SIZE, Board, Cell, Player};

/// The computer's difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// Random open cell
    Easy,
    /// Takes an immediate win, otherwise random
    Harder,
    /// Takes an immediate win, blocks the human's, otherwise random
    #[default]
    Expert,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Harder => "harder",
            DifficultyLevel::Expert => "expert",
        };
        f.write_str(label)
    }
}

impl FromStr for DifficultyLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(DifficultyLevel::Easy),
            "harder" => Ok(DifficultyLevel::Harder),
            "expert" => Ok(DifficultyLevel::Expert),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, harder, expert".to_string(),
            }),
        }
    }
}

/// Classification of the current board state.
///
/// Computed on demand by [`GameEngine::evaluate_outcome`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Tie,
    HumanWin,
    ComputerWin,
}

impl Outcome {
    /// Check whether the game has ended
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning outcome for a player
    pub fn win_for(player: Player) -> Outcome {
        match player {
            Player::Human => Outcome::HumanWin,
            Player::Computer => Outcome::ComputerWin,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::InProgress => "in progress",
            Outcome::Tie => "tie",
            Outcome::HumanWin => "human win",
            Outcome::ComputerWin => "computer win",
        };
        f.write_str(label)
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// The rules engine and computer opponent.
///
/// Owns the board, the current difficulty, and the random number
/// generator used for fallback moves. One engine instance is meant to
/// live across rounds; [`clear_board`] resets only the board between
/// games. The engine does not sequence turns or detect terminal states
/// on its own: the caller applies moves and polls
/// [`evaluate_outcome`] after each one, stopping once it reports
/// anything other than [`Outcome::InProgress`].
///
/// # Examples
///
/// ```
/// use triqui::{DifficultyLevel, GameEngine, Outcome, Player};
///
/// let mut engine = GameEngine::new().with_seed(42);
/// assert_eq!(engine.difficulty_level(), DifficultyLevel::Expert);
///
/// assert!(engine.apply_move(Player::Human, 4).unwrap());
/// let reply = engine.compute_computer_move().unwrap();
/// assert_ne!(reply, 4);
/// assert_eq!(engine.evaluate_outcome(), Outcome::InProgress);
/// ```
///
/// [`clear_board`]: Self::clear_board
/// [`evaluate_outcome`]: Self::evaluate_outcome
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    difficulty: DifficultyLevel,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine with an open board and expert difficulty
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            difficulty: DifficultyLevel::default(),
            rng: build_rng(None),
        }
    }

    /// Seed the move RNG for reproducible computer play
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the difficulty at construction time
    pub fn with_difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Start from a preset position
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Read-only view of the board, for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty_level(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn set_difficulty_level(&mut self, difficulty: DifficultyLevel) {
        self.difficulty = difficulty;
    }

    /// Reset every cell to open. Callable at any time; idempotent.
    pub fn clear_board(&mut self) {
        self.board.clear();
    }

    /// Place the given player's mark at `location` (0-8).
    ///
    /// Returns `Ok(true)` if the mark was placed and `Ok(false)` if the
    /// cell was already occupied, in which case the board is left
    /// untouched. Callers are expected to validate availability
    /// themselves; the boolean lets them notice when they have not.
    ///
    /// # Errors
    ///
    /// Returns error if `location` is outside 0-8.
    pub fn apply_move(&mut self, player: Player, location: usize) -> Result<bool, crate::Error> {
        if location >= BOARD_SIZE {
            return Err(crate::Error::LocationOutOfBounds { location });
        }

        if !self.board.is_open(location) {
            return Ok(false);
        }

        self.board.place(location, player.to_cell());
        Ok(true)
    }

    /// Classify the current board.
    ///
    /// The 8 winning lines are scanned in a fixed order (rows, columns,
    /// diagonals) and the first completed line decides between
    /// [`Outcome::HumanWin`] and [`Outcome::ComputerWin`]. With no
    /// completed line the result is [`Outcome::Tie`] on a full board and
    /// [`Outcome::InProgress`] otherwise. Pure query; call it as often
    /// as needed.
    pub fn evaluate_outcome(&self) -> Outcome {
        Self::outcome_of(&self.board)
    }

    fn outcome_of(board: &Board) -> Outcome {
        match board.winner() {
            Some(Player::Human) => Outcome::HumanWin,
            Some(Player::Computer) => Outcome::ComputerWin,
            None if board.is_full() => Outcome::Tie,
            None => Outcome::InProgress,
        }
    }

    /// Select and apply a move for the computer, returning its location.
    ///
    /// Selection depends on the current difficulty:
    ///
    /// - `Easy`: uniformly random open cell.
    /// - `Harder`: the first open cell that wins for the computer,
    ///   otherwise random.
    /// - `Expert`: the first open cell that wins for the computer, else
    ///   the first open cell where the human would win next (occupied to
    ///   deny it), else random.
    ///
    /// The winning/blocking search probes open cells in index order
    /// 0-8, placing the relevant mark on a board copy and evaluating the
    /// result. This is a single-ply lookahead; it does not detect forks
    /// or multi-move traps.
    ///
    /// # Errors
    ///
    /// Returns error if no open cell remains. Callers should check
    /// [`evaluate_outcome`] before invoking this.
    ///
    /// [`evaluate_outcome`]: Self::evaluate_outcome
    pub fn compute_computer_move(&mut self) -> Result<usize, crate::Error> {
        let open = self.board.open_positions();
        if open.is_empty() {
            return Err(crate::Error::BoardFull);
        }

        let heuristic = match self.difficulty {
            DifficultyLevel::Easy => None,
            DifficultyLevel::Harder => self.winning_probe(Player::Computer),
            DifficultyLevel::Expert => self
                .winning_probe(Player::Computer)
                .or_else(|| self.winning_probe(Player::Human)),
        };

        let location = match heuristic {
            Some(location) => location,
            // open is non-empty, checked above
            None => *open.choose(&mut self.rng).unwrap(),
        };

        self.board.place(location, Cell::Computer);
        Ok(location)
    }

    /// Find the lowest open location where `player`'s mark would
    /// complete a line.
    fn winning_probe(&self, player: Player) -> Option<usize> {
        let target = Outcome::win_for(player);
        (0..BOARD_SIZE).find(|&location| {
            self.board.is_open(location) && {
                let mut probe = self.board;
                probe.place(location, player.to_cell());
                Self::outcome_of(&probe) == target
            }
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
