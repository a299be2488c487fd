use tracing::{debug, info};

use super::board::{Board, Cell, Dimensions, DropSpot, InvalidColumn, Line};
use super::player::{Player, Seat};

/// Result of a placement attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mover completed four in a row. The game is over.
    Win(Seat),
    /// The board filled up without a line. The game is over.
    Tie,
    /// Piece placed, turn passed to the other player.
    Continue,
    /// The column has no room; nothing changed.
    ColumnFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    Tied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error(transparent)]
    InvalidColumn(#[from] InvalidColumn),

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// One game session: the board, whose turn it is, and whether the game ended.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [Player; 2],
    board: Board,
    current: Seat,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game on an empty board. `first` moves first.
    pub fn new(first: Player, second: Player, dims: Dimensions) -> Self {
        GameEngine {
            players: [first, second],
            board: Board::new(dims),
            current: Seat::First,
            status: GameStatus::InProgress,
        }
    }

    /// Start a game on the standard 6x7 board.
    pub fn standard(first: Player, second: Player) -> Self {
        Self::new(first, second, Dimensions::default())
    }

    /// Throw away the current board and start over with the same players.
    pub fn restart(&mut self) {
        self.board = Board::new(self.board.dimensions());
        self.current = Seat::First;
        self.status = GameStatus::InProgress;
        info!(
            height = self.board.height(),
            width = self.board.width(),
            "game restarted"
        );
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// Cell contents, `None` when (row, col) is off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// The player occupying (row, col), if any.
    pub fn occupant(&self, row: usize, col: usize) -> Option<&Player> {
        self.cell(row, col)
            .and_then(Cell::seat)
            .map(|seat| self.player(seat))
    }

    pub fn lowest_empty_row(&self, column: usize) -> Result<DropSpot, InvalidColumn> {
        self.board.lowest_empty_row(column)
    }

    /// Columns that can still take a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// The four cells of the winning line, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(seat) => self.board.find_line(seat),
            _ => None,
        }
    }

    pub fn moves_played(&self) -> usize {
        self.board.occupied_count()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A win is checked before a tie, so a move that both completes a line and
    /// fills the board is a win. The turn only passes on `Continue`.
    pub fn attempt_placement(&mut self, column: usize) -> Result<Placement, PlacementError> {
        if self.is_game_over() {
            return Err(PlacementError::GameAlreadyOver);
        }

        let seat = self.current;
        let row = match self.board.drop_piece(column, seat)? {
            DropSpot::Row(row) => row,
            DropSpot::ColumnFull => {
                debug!(column, "column full, placement rejected");
                return Ok(Placement::ColumnFull);
            }
        };
        debug!(column, row, ?seat, "piece placed");

        if self.board.has_line(seat) {
            self.status = GameStatus::Won(seat);
            info!(?seat, moves = self.moves_played(), "game won");
            return Ok(Placement::Win(seat));
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves_played(), "game tied");
            return Ok(Placement::Tie);
        }

        self.current = seat.other();
        Ok(Placement::Continue)
    }
}
