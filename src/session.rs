//! Coordination between the human side and the opponent oracle.

use crate::board::{Board, Line, Player};
use crate::game::{Game, GameStatus, Transition};
use crate::oracle::Opponent;
use tracing::{debug, info, instrument, warn};

/// Presentation-visible state of the oracle turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleStatus {
    /// No request outstanding.
    Idle,
    /// A request is in flight.
    Pending,
    /// The last request failed; the oracle side is stalled until reset.
    Unavailable,
}

/// A game session pairing a human with an oracle-controlled opponent.
///
/// Human moves enter through [`Session::play`]. Whenever an accepted move
/// hands the turn to the oracle side, the session drives exactly one oracle
/// request and applies the answer through the same move path the human
/// uses; the turn controller cannot tell the two apart.
#[derive(Debug)]
pub struct Session<O: Opponent> {
    game: Game,
    opponent: O,
    oracle_side: Player,
    oracle_status: OracleStatus,
}

impl<O: Opponent> Session<O> {
    /// Creates a session where `opponent` plays `oracle_side`.
    pub fn new(opponent: O, oracle_side: Player) -> Self {
        Self {
            game: Game::new(),
            opponent,
            oracle_side,
            oracle_status: OracleStatus::Idle,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.game.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.game.winner()
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.game.winning_line()
    }

    /// Returns the state of the oracle turn.
    pub fn oracle_status(&self) -> OracleStatus {
        self.oracle_status
    }

    /// True when the game is stuck waiting on a failed oracle.
    ///
    /// Only a [`Session::reset`] recovers; the session never retries on
    /// its own.
    pub fn is_stalled(&self) -> bool {
        self.oracle_status == OracleStatus::Unavailable
            && self.game.status() == GameStatus::InProgress
            && self.game.current_player() == self.oracle_side
    }

    /// Plays the human's move at `index`, then lets the oracle answer if
    /// the turn passed to its side.
    ///
    /// Invalid clicks (occupied cell, finished game, oracle to move) are
    /// ignored without reaching the oracle. An oracle transport or protocol
    /// failure leaves the game in progress with
    /// [`OracleStatus::Unavailable`].
    #[instrument(skip(self))]
    pub async fn play(&mut self, index: usize) -> Transition {
        if self.game.current_player() == self.oracle_side
            && self.game.status() == GameStatus::InProgress
        {
            debug!(index, "click ignored: waiting on the oracle");
            return Transition::Ignored;
        }
        let transition = self.game.apply_move(index);
        if let Transition::Handover(next) = transition
            && next == self.oracle_side
        {
            self.oracle_turn().await;
        }
        transition
    }

    /// Runs one oracle request and applies its answer.
    ///
    /// Fired once per handover to the oracle side; the `Pending` status
    /// stands in for the outstanding request, so a second request cannot be
    /// issued for the same turn.
    async fn oracle_turn(&mut self) {
        if self.oracle_status == OracleStatus::Pending {
            warn!("oracle request already outstanding, not re-firing");
            return;
        }
        self.oracle_status = OracleStatus::Pending;

        match self.opponent.choose(self.game.board()).await {
            Ok(index) => {
                self.oracle_status = OracleStatus::Idle;
                // Validate against the current state before applying: a
                // stale or out-of-range answer is discarded by the turn
                // controller's precondition check and the oracle side
                // simply stays to move.
                match self.game.apply_move(index) {
                    Transition::Ignored => {
                        debug!(index, "stale oracle answer discarded");
                    }
                    transition => {
                        info!(index, ?transition, "oracle moved");
                    }
                }
            }
            Err(error) => {
                self.oracle_status = OracleStatus::Unavailable;
                warn!(%error, "oracle unavailable");
            }
        }
    }

    /// Resets the game to its initial state and clears any oracle failure.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.oracle_status = OracleStatus::Idle;
    }
}
