//! Turn controller state machine.

use crate::board::{Board, Line, Player};
use crate::rules::{self, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// What a call to [`Game::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move was rejected (finished game, occupied cell, or bad index)
    /// and the state is unchanged.
    Ignored,
    /// Move accepted, game continues; the named player is now to move.
    ///
    /// Fires exactly once per accepted non-terminal move - this is the
    /// hook that triggers an oracle request when the turn passes to the
    /// oracle side.
    Handover(Player),
    /// Move accepted and won the game for the named player.
    Won(Player),
    /// Move accepted and filled the board with no winner.
    Drawn,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the player to move, and the terminal outcome. Moves from
/// the human and from the oracle both enter through [`Game::apply_move`];
/// the engine cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<Line>,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Applies a move at `index` for the current player.
    ///
    /// Moves on a finished game, on an occupied cell, or at an out-of-range
    /// index are ignored and leave the state unchanged - the caller is a UI
    /// click or an oracle answer, and neither is surfaced an error.
    #[instrument(skip(self), fields(player = ?self.current_player, status = ?self.status))]
    pub fn apply_move(&mut self, index: usize) -> Transition {
        if self.status != GameStatus::InProgress {
            debug!(index, "move ignored: game is over");
            return Transition::Ignored;
        }
        let player = self.current_player;
        if let Err(reason) = self.board.set(index, player) {
            debug!(index, %reason, "move ignored");
            return Transition::Ignored;
        }

        match rules::evaluate(&self.board, player) {
            Outcome::Win(line) => {
                // Winner keeps the turn; the board stays frozen until reset.
                self.status = GameStatus::Won(player);
                self.winning_line = Some(line);
                debug!(index, ?player, ?line, "game won");
                Transition::Won(player)
            }
            Outcome::Draw => {
                self.status = GameStatus::Draw;
                debug!(index, "game drawn");
                Transition::Drawn
            }
            Outcome::NoResult => {
                self.current_player = player.opponent();
                debug!(index, ?player, next = ?self.current_player, "turn handover");
                Transition::Handover(self.current_player)
            }
        }
    }

    /// Resets to the initial state. Legal from any status.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
