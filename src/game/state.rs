use super::board;
use super::{Board, DimensionError, Player};

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

/// Result of a single accepted `drop_piece` call.
///
/// `ColumnFull` is a rejected move, not an error: the call is a no-op and the
/// turn stays with the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(Player),
    Tie,
    ColumnFull,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    IllegalColumn,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial state for an empty board of the given shape.
    /// Player One moves first.
    pub fn new(width: usize, height: usize) -> Result<Self, DimensionError> {
        Ok(GameState {
            board: Board::new(width, height)?,
            current_player: Player::One,
            outcome: None,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Exactly one of the following happens per call, in this order:
    /// the call is rejected without touching any state (`Err`, or
    /// `Ok(ColumnFull)`), the move wins (`Win`), the move fills the board
    /// (`Tie`), or the turn passes to the other player (`Continue`).
    /// On `Win` and `Tie` the game becomes terminal and the active player
    /// stays on the player who just moved.
    pub fn drop_piece(&mut self, column: usize) -> Result<Outcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        match self.board.drop_piece(column, player.to_cell()) {
            Ok(_row) => {}
            Err(board::MoveError::IllegalColumn) => return Err(MoveError::IllegalColumn),
            Err(board::MoveError::ColumnFull) => return Ok(Outcome::ColumnFull),
        }

        if self.board.has_winning_run(player.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(player));
            return Ok(Outcome::Win(player));
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
            return Ok(Outcome::Tie);
        }

        self.current_player = player.other();
        Ok(Outcome::Continue)
    }

    /// Start a fresh game on the same board shape.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(7, 6).unwrap();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.width(), 7);
        assert_eq!(state.height(), 6);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert_eq!(GameState::new(0, 6), Err(DimensionError::InvalidWidth(0)));
        assert_eq!(GameState::new(7, 0), Err(DimensionError::InvalidHeight(0)));
    }

    #[test]
    fn test_drop_switches_player() {
        let mut state = GameState::new(7, 6).unwrap();

        assert_eq!(state.drop_piece(3), Ok(Outcome::Continue));
        assert_eq!(state.board().get(5, 3), Cell::One);
        assert_eq!(state.current_player(), Player::Two);

        assert_eq!(state.drop_piece(3), Ok(Outcome::Continue));
        assert_eq!(state.board().get(4, 3), Cell::Two);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_illegal_column_does_not_mutate() {
        let mut state = GameState::new(7, 6).unwrap();
        let before = state.clone();

        assert_eq!(state.drop_piece(7), Err(MoveError::IllegalColumn));
        assert_eq!(state, before);
    }

    #[test]
    fn test_column_full_is_a_no_op() {
        let mut state = GameState::new(2, 2).unwrap();
        state.drop_piece(0).unwrap(); // One
        state.drop_piece(0).unwrap(); // Two

        let before = state.clone();
        assert_eq!(state.drop_piece(0), Ok(Outcome::ColumnFull));
        assert_eq!(state, before);
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_vertical_win_in_column_zero() {
        // One stacks column 0, Two stacks column 1; One's fourth piece
        // (the seventh drop overall) completes rows 5..=2 of column 0.
        let mut state = GameState::new(7, 6).unwrap();

        for _ in 0..3 {
            assert_eq!(state.drop_piece(0), Ok(Outcome::Continue)); // One
            assert_eq!(state.drop_piece(1), Ok(Outcome::Continue)); // Two
        }
        assert_eq!(state.drop_piece(0), Ok(Outcome::Win(Player::One)));

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::One)));
        for row in 2..6 {
            assert_eq!(state.board().get(row, 0), Cell::One);
        }
    }

    #[test]
    fn test_finished_game_rejects_moves_and_freezes_player() {
        let mut state = GameState::new(7, 6).unwrap();
        for _ in 0..3 {
            state.drop_piece(0).unwrap();
            state.drop_piece(1).unwrap();
        }
        state.drop_piece(0).unwrap(); // One wins

        // Winner stays the active player; further drops are rejected
        assert_eq!(state.current_player(), Player::One);
        let before = state.clone();
        assert_eq!(state.drop_piece(3), Err(MoveError::GameOver));
        assert_eq!(state, before);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_tie_on_board_too_small_to_win() {
        // A 3x3 board cannot hold a four-in-a-row, so filling it ties.
        let mut state = GameState::new(3, 3).unwrap();

        for round in 0..3 {
            for col in 0..3 {
                let expected = if round == 2 && col == 2 {
                    Outcome::Tie
                } else {
                    Outcome::Continue
                };
                assert_eq!(state.drop_piece(col), Ok(expected));
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Tie));
        assert!(state.board().is_full());
        assert_eq!(state.drop_piece(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_diagonal_win_through_legal_drops() {
        // One builds the \ diagonal (2,2),(3,3),(4,4),(5,5); Two's pieces
        // (and two One fillers) provide the support underneath.
        let mut state = GameState::new(7, 6).unwrap();

        let moves = [5, 4, 4, 3, 2, 3, 3, 2, 2, 0];
        for &col in &moves {
            assert_eq!(state.drop_piece(col), Ok(Outcome::Continue));
        }

        // One's eleventh-move drop lands at (2,2) and completes the run
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.drop_piece(2), Ok(Outcome::Win(Player::One)));
        for i in 0..4 {
            assert_eq!(state.board().get(2 + i, 2 + i), Cell::One);
        }
    }

    #[test]
    fn test_reset_starts_a_fresh_game() {
        let mut state = GameState::new(7, 6).unwrap();
        for _ in 0..3 {
            state.drop_piece(0).unwrap();
            state.drop_piece(1).unwrap();
        }
        state.drop_piece(0).unwrap(); // One wins

        state.reset();
        assert!(!state.is_terminal());
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.width(), 7);
        assert_eq!(state.height(), 6);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(state.board().get(row, col), Cell::Empty);
            }
        }
    }
}
