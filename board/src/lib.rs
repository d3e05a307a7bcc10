//! Core chess types: colors, pieces, squares, and a board that knows the
//! movement rules for a single move.
//!
//! The board deliberately checks only per-piece geometry, path obstruction,
//! and occupancy. Check detection, castling, en passant, and draw rules are
//! out of scope.

use core::{fmt, str::FromStr};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The number of files and ranks on the board
pub const BOARD_SIZE: usize = 8;

/// The file letters, in order from file index 0 to 7
const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Errors from parsing squares or moving pieces
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid square name: {0}")]
    InvalidNotation(String),
    #[error("square out of bounds")]
    OutOfBounds,
    #[error("no piece at square {0}")]
    NoPieceAtSquare(Square),
    #[error("illegal move for {piece} from {start} to {end}")]
    IllegalMove {
        piece: PieceKind,
        start: Square,
        end: Square,
    },
    #[error("cannot capture own piece")]
    OwnPieceCapture,
    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}
impl Color {
    /// The opposing color
    ///
    /// ```
    /// # use board::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 6] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
    ];

    /// The capitalized one-letter notation symbol for this piece
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Whether a pawn can promote into this kind of piece
    pub const fn is_promotable(self) -> bool {
        match self {
            Self::Pawn | Self::King => false,
            Self::Rook | Self::Queen | Self::Knight | Self::Bishop => true,
        }
    }
}
impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        })
    }
}

/// A piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}
impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// The display symbol: uppercase for white, lowercase for black
    pub const fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// A board position as zero-based (file, rank) indices
///
/// File 0 is the a-file and rank 0 is the rank printed as "1". Both indices
/// must be in `[0, 7]` for the square to be on the board; using an
/// out-of-bounds square to index a [`Board`] is a usage error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}
impl Square {
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Returns if this square is on the board
    pub const fn in_bounds(self) -> bool {
        self.file < BOARD_SIZE as u8 && self.rank < BOARD_SIZE as u8
    }

    /// The algebraic name ("e4") of this square
    pub fn name(self) -> Result<String> {
        if !self.in_bounds() {
            return Err(Error::OutOfBounds);
        }
        Ok(self.to_string())
    }
}
/// Writes the algebraic name, or `"??"` for a square off the board
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", FILES[self.file as usize], self.rank + 1)
        } else {
            f.write_str("??")
        }
    }
}
impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidNotation(s.to_string()));
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(Error::InvalidNotation(s.to_string())),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'1',
            _ => return Err(Error::InvalidNotation(s.to_string())),
        };
        Ok(Self { file, rank })
    }
}

/// The state of a chess board
///
/// Stores placements densely, indexed by `[file][rank]`. The board is a bag
/// of placements: nothing enforces piece counts or exactly one king per
/// side, and [`Board::set`] mutates freely. All *moves* go through
/// [`Board::move_piece`], which validates legality before touching anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces on it
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// A board set up in the standard starting position
    pub fn initial_position() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Clear all placements and install the standard starting position
    pub fn reset(&mut self) {
        const BACK_RANK: [PieceKind; BOARD_SIZE] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        self.squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            self.squares[file][0] = Some(Piece::new(Color::White, kind));
            self.squares[file][1] = Some(Piece::new(Color::White, PieceKind::Pawn));
            self.squares[file][6] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            self.squares[file][7] = Some(Piece::new(Color::Black, kind));
        }
    }

    /// The piece at the given square, if any
    pub fn get(&self, square: Square) -> Option<Piece> {
        debug_assert!(square.in_bounds(), "square {square} is off the board");
        self.squares[square.file as usize][square.rank as usize]
    }

    /// Place or remove a piece directly, with no legality check
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(square.in_bounds(), "square {square} is off the board");
        self.squares[square.file as usize][square.rank as usize] = piece;
    }

    /// An iterator over all occupied squares
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..BOARD_SIZE as u8).flat_map(move |file| {
            (0..BOARD_SIZE as u8).filter_map(move |rank| {
                let square = Square::new(file, rank);
                self.get(square).map(|piece| (square, piece))
            })
        })
    }

    /// Whether the given piece may move from `start` to `end`
    ///
    /// Checks geometry, path obstruction for sliding pieces, and occupancy
    /// of the destination. Does not mutate and does not consider check,
    /// castling, or en passant.
    pub fn is_legal_move(&self, piece: Piece, start: Square, end: Square) -> bool {
        if start == end || !end.in_bounds() {
            return false;
        }
        let target = self.get(end);
        if target.is_some_and(|target| target.color == piece.color) {
            return false;
        }

        let file_delta = end.file as i8 - start.file as i8;
        let rank_delta = end.rank as i8 - start.rank as i8;

        match piece.kind {
            PieceKind::Pawn => {
                let direction: i8 = match piece.color {
                    Color::White => 1,
                    Color::Black => -1,
                };
                let start_rank = match piece.color {
                    Color::White => 1,
                    Color::Black => 6,
                };

                if file_delta == 0 {
                    // Forward movement
                    if rank_delta == direction {
                        return target.is_none();
                    }
                    if rank_delta == 2 * direction && start.rank == start_rank {
                        let intermediate =
                            Square::new(start.file, (start.rank as i8 + direction) as u8);
                        return target.is_none() && self.get(intermediate).is_none();
                    }
                    false
                } else if file_delta.abs() == 1 && rank_delta == direction {
                    // Diagonal capture
                    target.is_some_and(|target| target.color == piece.color.opponent())
                } else {
                    false
                }
            }
            PieceKind::Knight => {
                matches!((file_delta.abs(), rank_delta.abs()), (1, 2) | (2, 1))
            }
            PieceKind::King => file_delta.abs().max(rank_delta.abs()) == 1,
            PieceKind::Bishop => {
                file_delta.abs() == rank_delta.abs() && self.is_path_clear(start, end)
            }
            PieceKind::Rook => {
                (file_delta == 0 || rank_delta == 0) && self.is_path_clear(start, end)
            }
            PieceKind::Queen => {
                (file_delta.abs() == rank_delta.abs() || file_delta == 0 || rank_delta == 0)
                    && self.is_path_clear(start, end)
            }
        }
    }

    /// Whether every square strictly between `start` and `end` is empty
    ///
    /// Walks unit steps along the line from `start` towards `end`. Only
    /// meaningful for straight or diagonal lines, which is all the sliding
    /// pieces can produce.
    fn is_path_clear(&self, start: Square, end: Square) -> bool {
        let file_step = (end.file as i8 - start.file as i8).signum();
        let rank_step = (end.rank as i8 - start.rank as i8).signum();

        let mut file = start.file as i8 + file_step;
        let mut rank = start.rank as i8 + rank_step;
        while (file, rank) != (end.file as i8, end.rank as i8) {
            if self.get(Square::new(file as u8, rank as u8)).is_some() {
                return false;
            }
            file += file_step;
            rank += rank_step;
        }
        true
    }

    /// Move the piece at `start` to `end`, validating legality first
    ///
    /// A pawn landing on the last rank is replaced by `promotion` (queen
    /// when not given). All validation happens before any placement
    /// changes, so a failed call leaves the board exactly as it was.
    pub fn move_piece(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Result<()> {
        let piece = self.get(start).ok_or(Error::NoPieceAtSquare(start))?;

        if !self.is_legal_move(piece, start, end) {
            return Err(Error::IllegalMove {
                piece: piece.kind,
                start,
                end,
            });
        }

        // Redundant with the legality check above, but kept as a
        // recognizable error for direct callers.
        if self.get(end).is_some_and(|target| target.color == piece.color) {
            return Err(Error::OwnPieceCapture);
        }

        let promotes =
            piece.kind == PieceKind::Pawn && (end.rank == 0 || end.rank == BOARD_SIZE as u8 - 1);
        let landed = if promotes {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            if !kind.is_promotable() {
                return Err(Error::InvalidPromotion(kind));
            }
            Piece::new(piece.color, kind)
        } else {
            piece
        };

        self.set(end, Some(landed));
        self.set(start, None);
        Ok(())
    }

    /// An ASCII rendering of the board
    ///
    /// Ranks are printed from 8 down to 1, each row prefixed with its rank
    /// number, with a final row labelling the files. Empty squares render
    /// as `.`.
    pub fn render(&self) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE + 1);
        for rank in (0..BOARD_SIZE as u8).rev() {
            let mut row = (rank + 1).to_string();
            for file in 0..BOARD_SIZE as u8 {
                row.push(' ');
                row.push(self.get(Square::new(file, rank)).map_or('.', Piece::symbol));
            }
            rows.push(row);
        }
        let mut files_row = String::from(" ");
        for file in FILES {
            files_row.push(' ');
            files_row.push(file);
        }
        rows.push(files_row);
        rows.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
