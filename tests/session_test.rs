//! Tests for session coordination with a scripted opponent.

use std::collections::VecDeque;
use tictactoe_oracle::{
    Board, Cell, GameStatus, Opponent, OracleError, OracleStatus, Player, Session, Transition,
};

/// Opponent that answers from a fixed script.
struct Scripted {
    answers: VecDeque<usize>,
}

impl Scripted {
    fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Opponent for Scripted {
    async fn choose(&mut self, _board: &Board) -> Result<usize, OracleError> {
        self.answers
            .pop_front()
            .ok_or_else(|| OracleError::Malformed("script exhausted".to_string()))
    }
}

/// Opponent whose endpoint is down.
struct Failing;

#[async_trait::async_trait]
impl Opponent for Failing {
    async fn choose(&mut self, _board: &Board) -> Result<usize, OracleError> {
        Err(OracleError::Status(500))
    }
}

#[tokio::test]
async fn test_handover_drives_oracle_move() {
    let mut session = Session::new(Scripted::new([4]), Player::O);

    let transition = session.play(0).await;
    assert_eq!(transition, Transition::Handover(Player::O));

    // The oracle answered 4 as O and handed the turn back.
    assert_eq!(session.board().get(0), Some(Cell::Occupied(Player::X)));
    assert_eq!(session.board().get(4), Some(Cell::Occupied(Player::O)));
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.oracle_status(), OracleStatus::Idle);
}

#[tokio::test]
async fn test_occupied_oracle_answer_is_discarded() {
    // Oracle answers the cell the human just took.
    let mut session = Session::new(Scripted::new([0]), Player::O);
    session.play(0).await;

    assert_eq!(session.board().get(0), Some(Cell::Occupied(Player::X)));
    assert!(session.board().is_empty(1));
    assert_eq!(session.status(), GameStatus::InProgress);
    // The oracle side stays to move; no retry.
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.oracle_status(), OracleStatus::Idle);

    // Human clicks are ignored while the turn belongs to the oracle.
    assert_eq!(session.play(1).await, Transition::Ignored);
    assert!(session.board().is_empty(1));
}

#[tokio::test]
async fn test_out_of_range_oracle_answer_is_discarded() {
    let mut session = Session::new(Scripted::new([42]), Player::O);
    session.play(0).await;

    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.current_player(), Player::O);
    assert!(session.board().cells().iter().filter(|&&c| c != Cell::Empty).count() == 1);
}

#[tokio::test]
async fn test_oracle_failure_stalls_turn_until_reset() {
    let mut session = Session::new(Failing, Player::O);

    assert_eq!(session.play(0).await, Transition::Handover(Player::O));
    assert_eq!(session.oracle_status(), OracleStatus::Unavailable);
    assert!(session.is_stalled());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.current_player(), Player::O);

    // Stuck: clicks do nothing.
    assert_eq!(session.play(1).await, Transition::Ignored);

    session.reset();
    assert_eq!(session.oracle_status(), OracleStatus::Idle);
    assert!(!session.is_stalled());
    assert_eq!(session.current_player(), Player::X);
    assert!(session.board().is_empty(0));
}

#[tokio::test]
async fn test_winning_move_does_not_invoke_oracle() {
    // X takes the top row; the script holds exactly the two O replies, so a
    // third request would surface as an oracle failure.
    let mut session = Session::new(Scripted::new([3, 4]), Player::O);

    session.play(0).await;
    session.play(1).await;
    let transition = session.play(2).await;

    assert_eq!(transition, Transition::Won(Player::X));
    assert_eq!(session.winner(), Some(Player::X));
    assert_eq!(session.winning_line(), Some([0, 1, 2]));
    assert_eq!(session.oracle_status(), OracleStatus::Idle);

    // Finished game rejects further clicks.
    assert_eq!(session.play(5).await, Transition::Ignored);
}

#[tokio::test]
async fn test_oracle_can_win_the_game() {
    // O takes the left column: human feeds 1, 2, 5; oracle answers 0, 3, 6.
    let mut session = Session::new(Scripted::new([0, 3, 6]), Player::O);

    session.play(1).await;
    session.play(2).await;
    assert_eq!(session.play(5).await, Transition::Handover(Player::O));

    assert_eq!(session.status(), GameStatus::Won(Player::O));
    assert_eq!(session.winner(), Some(Player::O));
    assert_eq!(session.winning_line(), Some([0, 3, 6]));
}

#[tokio::test]
async fn test_session_plays_to_a_draw() {
    // X: 0, 2, 3, 7, 8; O: 1, 4, 5, 6 - no line for either side.
    let mut session = Session::new(Scripted::new([1, 4, 5, 6]), Player::O);

    session.play(0).await;
    session.play(2).await;
    session.play(3).await;
    session.play(7).await;
    assert_eq!(session.play(8).await, Transition::Drawn);

    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.winner(), None);
    assert_eq!(session.winning_line(), None);
}

#[tokio::test]
async fn test_reset_mid_game_returns_to_start() {
    let mut session = Session::new(Scripted::new([4]), Player::O);
    session.play(0).await;
    session.reset();

    assert!(session.board().cells().iter().all(|&c| c == Cell::Empty));
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.status(), GameStatus::InProgress);
}
