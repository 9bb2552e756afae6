//! Tic-tac-toe core with a remote opponent oracle.
//!
//! One side is a human, the other side's moves are chosen by an external
//! decision endpoint (the "opponent oracle") reached over HTTP.
//!
//! # Architecture
//!
//! - **Board**: nine cells in row-major order, the only mutation being a
//!   validated mark placement
//! - **Rules**: pure win/draw evaluation over the eight canonical lines
//! - **Game**: the turn controller state machine; human and oracle moves
//!   share one entry point
//! - **Oracle**: async adapter that POSTs the board and awaits a cell index
//! - **Session**: wires a human's clicks to the game and drives exactly one
//!   oracle request per turn handover
//!
//! Rendering and theming are a consumer's concern; this crate only exposes
//! the read-only state a presentation layer needs.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_oracle::{OracleClient, Player, Session};
//!
//! # async fn example() {
//! let oracle = OracleClient::new("https://example.com/api/bot");
//! let mut session = Session::new(oracle, Player::O);
//!
//! // Human plays X at the top-left; the oracle answers as O.
//! session.play(0).await;
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod oracle;
mod rules;
mod session;

pub use board::{Board, Cell, InvalidMove, Line, Player, LINES};
pub use game::{Game, GameStatus, Transition};
pub use oracle::{wire_board, Opponent, OracleClient, OracleError};
pub use rules::{evaluate, Outcome};
pub use session::{OracleStatus, Session};
