//! Opponent oracle adapter.
//!
//! Move selection for the non-human side is delegated to an external
//! decision endpoint: the board is POSTed as JSON and the endpoint answers
//! with the cell index it wants to play.

use crate::board::{Board, Cell, Player};
use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

/// Failure to obtain a move from the oracle.
///
/// An answer that targets an occupied or out-of-range cell is not an
/// adapter error; it is discarded downstream by the turn controller's
/// precondition check.
#[derive(Debug, Display, Error, From)]
pub enum OracleError {
    /// Transport-level failure (connection, timeout, body read).
    #[display("oracle transport failure: {_0}")]
    Transport(reqwest::Error),
    /// Endpoint answered with a non-success status.
    #[display("oracle returned status {_0}")]
    #[from(ignore)]
    Status(#[error(not(source))] u16),
    /// Response body did not carry a cell index.
    #[display("malformed oracle response: {_0}")]
    #[from(ignore)]
    Malformed(#[error(not(source))] String),
}

/// A source of moves for one side of the game.
#[async_trait::async_trait]
pub trait Opponent: Send {
    /// Chooses a cell index (expected 0-8) for the next move on `board`.
    async fn choose(&mut self, board: &Board) -> Result<usize, OracleError>;
}

/// Serializes the board for the oracle wire format: nine values, `null` for
/// an empty cell, `"X"`/`"O"` otherwise.
pub fn wire_board(board: &Board) -> [Option<Player>; 9] {
    let mut wire = [None; 9];
    for (slot, cell) in wire.iter_mut().zip(board.cells()) {
        if let Cell::Occupied(p) = cell {
            *slot = Some(*p);
        }
    }
    wire
}

/// HTTP client for the external decision endpoint.
#[derive(Debug, Clone)]
pub struct OracleClient {
    endpoint: String,
    client: reqwest::Client,
}

impl OracleClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Requests a move for `board` from the endpoint.
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn request_move(&self, board: &Board) -> Result<usize, OracleError> {
        debug!("requesting oracle move");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&wire_board(board))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let value: serde_json::Value = response.json().await?;
        let index = parse_index(&value)
            .ok_or_else(|| OracleError::Malformed(value.to_string()))?;
        debug!(index, "oracle answered");
        Ok(index)
    }
}

/// Extracts the cell index from the response body: either a bare integer or
/// an object carrying one under `"move"`.
fn parse_index(value: &serde_json::Value) -> Option<usize> {
    let raw = match value {
        serde_json::Value::Object(map) => map.get("move")?,
        other => other,
    };
    raw.as_u64().map(|n| n as usize)
}

#[async_trait::async_trait]
impl Opponent for OracleClient {
    async fn choose(&mut self, board: &Board) -> Result<usize, OracleError> {
        self.request_move(board).await
    }
}
