use tracing::{debug, info, instrument};

use super::{Board, Player};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Result of one successful turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub row: usize,
    pub col: usize,
    pub status: GameStatus,
}

/// Validate `rows x columns` with win length `n`, returning them as sizes.
pub fn validate_dimensions(
    rows: isize,
    columns: isize,
    n: isize,
) -> Result<(usize, usize, usize), GameError> {
    if rows < 1 || columns < 1 || rows.checked_mul(columns).is_none() {
        return Err(GameError::InvalidDimensions { rows, columns });
    }
    if rows < n || columns < n {
        return Err(GameError::ThresholdTooLarge { rows, columns, n });
    }
    if n <= 0 {
        return Err(GameError::InvalidThreshold(n));
    }
    Ok((rows as usize, columns as usize, n as usize))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    n: usize,
    players: [Player; 2],
    current: usize,
    turns: usize,
    status: GameStatus,
}

impl Game {
    /// Create a game on an empty `rows x columns` board where `n` in a row wins.
    pub fn new(rows: isize, columns: isize, n: isize) -> Result<Self, GameError> {
        let (rows, columns, n) = validate_dimensions(rows, columns, n)?;
        Ok(Game {
            board: Board::new(rows, columns),
            n,
            players: Player::ALL,
            current: 0,
            turns: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Start over on an empty board of the same size
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.rows(), self.board.cols());
        self.current = 0;
        self.turns = 0;
        self.status = GameStatus::InProgress;
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Win length
    pub fn threshold(&self) -> usize {
        self.n
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.players[self.current]
    }

    /// Number of successful turns so far
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop `player`'s marker into `column` and return the row where it landed.
    ///
    /// Every successful placement counts as a turn and settles a win or a
    /// draw. It does not advance the current player; [`Game::play`] does.
    #[instrument(level = "debug", skip(self))]
    pub fn place_marker(&mut self, player: Player, column: isize) -> Result<usize, GameError> {
        let columns = self.board.cols();
        if column < 0 || column as usize >= columns {
            return Err(GameError::ColumnOutOfRange { column, columns });
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let col = column as usize;
        let row = self.board.drop_piece(col, player)?;
        self.turns += 1;
        debug!(row, turns = self.turns, "marker placed");

        // A win on the last free cell is still a win.
        if self.board.check_win(player, row, col, self.n) {
            info!(%player, turns = self.turns, "game won");
            self.status = GameStatus::Won(player);
        } else if self.turns == self.board.capacity() {
            info!(turns = self.turns, "game drawn");
            self.status = GameStatus::Draw;
        }
        Ok(row)
    }

    /// Check whether the marker at `(row, col)` completes a line of at least
    /// `n` for `player`.
    pub fn check_win(&self, player: Player, row: usize, col: usize) -> Result<bool, GameError> {
        if row >= self.board.rows() || col >= self.board.cols() {
            return Err(GameError::CellOutOfRange { row, col });
        }
        Ok(self.board.check_win(player, row, col, self.n))
    }

    /// Play one turn for the current player and pass the move to the next one.
    ///
    /// A rejected move leaves the game untouched and the same player to move.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, column: isize) -> Result<MoveOutcome, GameError> {
        let player = self.current_player();
        let row = self.place_marker(player, column).inspect_err(|err| {
            debug!(%err, "move rejected");
        })?;

        if !self.is_over() {
            self.current = (self.current + 1) % self.players.len();
        }

        Ok(MoveOutcome {
            player,
            row,
            col: column as usize,
            status: self.status,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::default(),
            n: 4,
            players: Player::ALL,
            current: 0,
            turns: 0,
            status: GameStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = Game::new(6, 7, 4).unwrap();
        assert_eq!(game.current_player(), Player::Red);
        assert_eq!(game.turns(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.legal_columns().len(), 7);
        assert_eq!(game, Game::default());
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert_eq!(
            Game::new(0, 7, 4),
            Err(GameError::InvalidDimensions { rows: 0, columns: 7 })
        );
        assert_eq!(
            Game::new(6, -2, 4),
            Err(GameError::InvalidDimensions { rows: 6, columns: -2 })
        );
        assert_eq!(
            Game::new(3, 7, 4),
            Err(GameError::ThresholdTooLarge { rows: 3, columns: 7, n: 4 })
        );
        assert_eq!(
            Game::new(6, 3, 4),
            Err(GameError::ThresholdTooLarge { rows: 6, columns: 3, n: 4 })
        );
        assert_eq!(Game::new(6, 7, 0), Err(GameError::InvalidThreshold(0)));
        assert_eq!(Game::new(6, 7, -1), Err(GameError::InvalidThreshold(-1)));
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        assert_eq!(
            Game::new(isize::MAX, isize::MAX, 1),
            Err(GameError::InvalidDimensions {
                rows: isize::MAX,
                columns: isize::MAX,
            })
        );
        assert_eq!(
            validate_dimensions(isize::MAX / 2, 3, 2),
            Err(GameError::InvalidDimensions {
                rows: isize::MAX / 2,
                columns: 3,
            })
        );
    }

    #[test]
    fn test_new_accepts_valid_dimensions() {
        for (rows, cols, n) in [(1, 1, 1), (4, 9, 4), (10, 3, 2)] {
            let game = Game::new(rows, cols, n).unwrap();
            let board = game.board();
            assert_eq!((board.rows(), board.cols()), (rows as usize, cols as usize));
            assert!(board.iter_rows().flatten().all(|&cell| cell == Cell::Empty));
        }
    }

    #[test]
    fn test_place_marker_column_bounds() {
        let mut game = Game::new(6, 7, 4).unwrap();
        let assert_out_of_range = |game: &mut Game| {
            let before = game.clone();
            for column in [-1, 7, 100] {
                assert!(matches!(
                    game.place_marker(Player::Red, column),
                    Err(GameError::ColumnOutOfRange { columns: 7, .. })
                ));
                assert!(matches!(
                    game.play(column),
                    Err(GameError::ColumnOutOfRange { columns: 7, .. })
                ));
            }
            assert_eq!(*game, before);
        };

        assert_out_of_range(&mut game);

        for col in [3, 3, 4, 0] {
            game.play(col).unwrap();
        }
        assert_out_of_range(&mut game);

        for col in [1, 0, 2] {
            game.play(col).unwrap();
        }
        assert!(game.is_over());
        assert_out_of_range(&mut game);
    }

    #[test]
    fn test_place_marker_gravity() {
        let mut game = Game::new(6, 7, 4).unwrap();
        for k in 0..6 {
            let player = Player::ALL[k % 2];
            assert_eq!(game.place_marker(player, 2).unwrap(), 5 - k);
        }
        assert_eq!(game.turns(), 6);
        assert_eq!(
            game.place_marker(Player::Red, 2),
            Err(GameError::ColumnFull { column: 2 })
        );
    }

    #[test]
    fn test_failed_move_is_idempotent() {
        let mut game = Game::new(3, 3, 3).unwrap();
        for _ in 0..3 {
            game.play(0).unwrap();
        }
        let before = game.clone();

        for _ in 0..3 {
            assert_eq!(game.play(0), Err(GameError::ColumnFull { column: 0 }));
            assert_eq!(
                game.place_marker(Player::Red, 0),
                Err(GameError::ColumnFull { column: 0 })
            );
            assert!(matches!(
                game.play(5),
                Err(GameError::ColumnOutOfRange { column: 5, .. })
            ));
            assert_eq!(game, before);
        }
        assert_eq!(game.current_player(), Player::Yellow);
        assert_eq!(game.turns(), 3);
    }

    #[test]
    fn test_turns_track_filled_cells() {
        let mut game = Game::new(3, 3, 3).unwrap();
        game.place_marker(Player::Red, 1).unwrap();
        game.place_marker(Player::Yellow, 0).unwrap();
        assert_eq!(game.turns(), 2);

        // Same final board as `test_draw`, with the first two moves placed directly
        for col in [2, 1, 0, 2, 0, 1, 2] {
            game.play(col).unwrap();
        }

        assert_eq!(game.turns(), 9);
        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.play(0), Err(GameError::GameOver));
        assert_eq!(game.place_marker(Player::Red, 1), Err(GameError::GameOver));
    }

    #[test]
    fn test_place_marker_settles_win() {
        let mut game = Game::new(6, 7, 4).unwrap();
        for _ in 0..4 {
            game.place_marker(Player::Yellow, 5).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::Yellow));
        assert_eq!(game.place_marker(Player::Red, 0), Err(GameError::GameOver));
        assert_eq!(game.turns(), 4);
    }

    #[test]
    fn test_check_win_rejects_off_board_pivot() {
        let game = Game::new(6, 7, 4).unwrap();
        assert_eq!(
            game.check_win(Player::Red, 6, 0),
            Err(GameError::CellOutOfRange { row: 6, col: 0 })
        );
    }

    #[test]
    fn test_horizontal_win_only_on_fourth() {
        let mut game = Game::new(6, 7, 4).unwrap();
        for col in 0..4 {
            let row = game.place_marker(Player::Red, col).unwrap();
            assert_eq!(row, 5);
            let won = game.check_win(Player::Red, row, col as usize).unwrap();
            assert_eq!(won, col == 3);
        }
    }

    #[test]
    fn test_incline_win_only_when_complete() {
        let mut game = Game::new(6, 7, 4).unwrap();
        // Yellow padding so that Red's markers form a `/` staircase
        for (col, padding) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            for _ in 0..padding {
                game.place_marker(Player::Yellow, col).unwrap();
            }
        }
        for col in [3, 0, 2] {
            let row = game.place_marker(Player::Red, col).unwrap();
            assert!(!game.check_win(Player::Red, row, col as usize).unwrap());
        }
        let row = game.place_marker(Player::Red, 1).unwrap();
        assert_eq!(row, 4);
        assert!(game.check_win(Player::Red, row, 1).unwrap());
    }

    #[test]
    fn test_end_to_end_red_wins() {
        let mut game = Game::new(6, 7, 4).unwrap();
        for col in 0..3 {
            let outcome = game.play(col).unwrap();
            assert_eq!(outcome.player, Player::Red);
            assert_eq!(outcome.status, GameStatus::InProgress);
            let outcome = game.play(6).unwrap();
            assert_eq!(outcome.player, Player::Yellow);
        }

        let outcome = game.play(3).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome {
                player: Player::Red,
                row: 5,
                col: 3,
                status: GameStatus::Won(Player::Red),
            }
        );
        assert_eq!(game.turns(), 7);
        assert!(game.is_over());
        assert!(game.legal_columns().is_empty());
        assert_eq!(game.play(6), Err(GameError::GameOver));
        assert_eq!(game.turns(), 7);
    }

    #[test]
    fn test_draw() {
        // Fills a 3x3 board as
        //   R Y R
        //   R Y Y
        //   Y R R
        let mut game = Game::new(3, 3, 3).unwrap();
        let pattern = [1, 0, 2, 1, 0, 2, 0, 1, 2];

        for (i, &col) in pattern.iter().enumerate() {
            let outcome = game.play(col).unwrap();
            if i + 1 < pattern.len() {
                assert_eq!(outcome.status, GameStatus::InProgress);
            }
        }

        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.turns(), 9);
        assert!(game.board().is_full());
        assert_eq!(game.board().get(0, 0), Some(Cell::Occupied(Player::Red)));
        assert_eq!(game.board().get(2, 0), Some(Cell::Occupied(Player::Yellow)));
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut game = Game::new(1, 1, 1).unwrap();
        let outcome = game.play(0).unwrap();
        assert_eq!(outcome.status, GameStatus::Won(Player::Red));
        assert!(game.board().is_full());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(4, 4, 3).unwrap();
        game.play(0).unwrap();
        game.play(1).unwrap();
        game.reset();
        assert_eq!(game, Game::new(4, 4, 3).unwrap());
    }
}
