//! Turn-sequencing game state over a [`board::Board`]
//!
//! [`ChessGame`] decodes coordinate notation, enforces turn order, and keeps
//! the move history. All legality checking is delegated to the board.

use core::{fmt, str::FromStr};

use board::{Board, Color, Piece, PieceKind, Square, BOARD_SIZE};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors from decoding notation or applying moves to a game
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Board(#[from] board::Error),
    #[error("no piece on {0}")]
    NoPieceOnSquare(String),
    #[error("it is {0} to move")]
    WrongTurn(Color),
    #[error("unsupported notation: {0}")]
    UnsupportedNotation(String),
    #[error("unsupported promotion: {0}")]
    UnsupportedPromotion(char),
}

/// A move described in coordinate notation
///
/// `start` and `end` are algebraic square names ("e2"); decoding happens
/// when the move is applied. Equality is value equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub start: String,
    pub end: String,
    pub promotion: Option<PieceKind>,
}
impl Move {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            promotion: None,
        }
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
impl FromStr for Move {
    type Err = Error;

    /// Parses coordinate notation: 4 characters ("e2e4"), or 5 with a
    /// trailing promotion letter ("e7e8q"). Expects lowercased input.
    fn from_str(s: &str) -> Result<Self> {
        if !s.is_ascii() || !matches!(s.len(), 4 | 5) {
            return Err(Error::UnsupportedNotation(s.to_string()));
        }
        let promotion = if s.len() == 5 {
            let letter = s.as_bytes()[4] as char;
            Some(promotion_from_letter(letter).ok_or(Error::UnsupportedPromotion(letter))?)
        } else {
            None
        };
        Ok(Self {
            start: s[..2].to_string(),
            end: s[2..4].to_string(),
            promotion,
        })
    }
}

fn promotion_from_letter(letter: char) -> Option<PieceKind> {
    match letter {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

/// A single chess game: a board, whose turn it is, and the moves so far
///
/// The turn flips only after a successfully applied move; a failed move
/// leaves the board, turn, and history all unchanged.
#[derive(Clone, Debug)]
pub struct ChessGame {
    board: Board,
    turn: Color,
    history: Vec<Move>,
}

impl ChessGame {
    /// A fresh game: standard starting position, white to move
    pub fn new() -> Self {
        Self::from_position(Board::initial_position(), Color::White)
    }

    /// A game starting from an arbitrary position
    pub fn from_position(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move next
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Every successfully applied move, in order
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Apply a single move for the side to move
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        let start: Square = mv.start.parse().map_err(Error::Board)?;
        let end: Square = mv.end.parse().map_err(Error::Board)?;

        let piece = self
            .board
            .get(start)
            .ok_or_else(|| Error::NoPieceOnSquare(mv.start.clone()))?;
        if piece.color != self.turn {
            return Err(Error::WrongTurn(self.turn));
        }

        self.board.move_piece(start, end, mv.promotion)?;
        self.history.push(mv);
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Apply a move written in coordinate notation ("e2e4")
    ///
    /// Promotions are specified by appending the piece letter ("e7e8q").
    /// Input is trimmed and lowercased first.
    pub fn apply_notation(&mut self, notation: &str) -> Result<()> {
        let notation = notation.trim().to_ascii_lowercase();
        self.apply_move(notation.parse()?)
    }

    /// Apply a series of coordinate moves, stopping at the first failure
    pub fn load_moves<I, S>(&mut self, moves: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for notation in moves {
            self.apply_notation(notation.as_ref())?;
        }
        Ok(())
    }

    /// A snapshot of the board indexed `[rank][file]`
    ///
    /// Purely a convenience view; the board itself stays authoritative.
    pub fn board_as_matrix(&self) -> [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        let mut matrix = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (square, piece) in self.board.pieces() {
            matrix[square.rank as usize][square.file as usize] = Some(piece);
        }
        matrix
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}
