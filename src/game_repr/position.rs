use std::fmt;

use super::bitboards::{popcount, Bitboards};
use super::board::*;
use super::moves::Move;
use super::piece::{Color, Piece, Type};
use super::square::*;
use super::zobrist::ZobristKeys;
use crate::error::{ChessError, ChessResult, ParseError};

/*
 * THE LIVE GAME: A BOARD PLUS EVERYTHING
 * THAT ONLY MATTERS BETWEEN MOVES
 */

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    ThreefoldRepetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {:?} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(DrawReason::ThreefoldRepetition) => write!(f, "draw by repetition"),
            GameStatus::Draw(DrawReason::FiftyMoveRule) => write!(f, "draw by fifty-move rule"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
        }
    }
}

/// A game in progress.
///
/// Built once from a placement string, then only changed through
/// [`Position::apply_move`], which keeps the history and the cached
/// legal-move list in step with the board.
#[derive(Clone)]
pub struct Position {
    board: Board,
    keys: &'static ZobristKeys,
    /// Placement after every ply, starting with the initial one
    history: Vec<String>,
    /// Zobrist key after every ply, parallel to `history`
    hash_history: Vec<u64>,
    last_move: Option<Move>,
    legal_moves: Vec<Move>,
    fullmove_number: u32,
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("last_move", &self.last_move)
            .finish()
    }
}

impl Default for Position {
    fn default() -> Self {
        let mut board = Board::empty();
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.put_piece(Piece::new(Color::White, piece_type), square_at(file, 0));
            board.put_piece(Piece::new(Color::White, Type::Pawn), square_at(file, 1));
            board.put_piece(Piece::new(Color::Black, Type::Pawn), square_at(file, 6));
            board.put_piece(Piece::new(Color::Black, piece_type), square_at(file, 7));
        }
        Self::from_board(board, 1)
    }
}

impl Position {
    /// Parses a placement string (rank 8 first, `/` between ranks).
    /// White to move, every castling right held, no en-passant target.
    pub fn new(placement: &str) -> Result<Self, ParseError> {
        let mut board = Board::empty();
        board.bitboards = parse_placement(placement)?;
        Ok(Self::from_board(board, 1))
    }

    /// Parses a FEN record. Fields after the placement are optional;
    /// a missing one keeps the default `new` would use.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let mut fields = fen.split_whitespace();
        let mut board = Board::empty();
        board.bitboards = parse_placement(fields.next().unwrap_or(""))?;

        if let Some(side) = fields.next() {
            board.side_to_move = match side {
                "w" => Color::White,
                "b" => Color::Black,
                _ => return Err(ParseError::InvalidSideToMove(side.to_string())),
            };
        }

        if let Some(castling) = fields.next() {
            board.castling = parse_castling(castling)?;
        }

        if let Some(ep) = fields.next() {
            board.en_passant = parse_en_passant(ep, &board)?;
        }

        if let Some(clock) = fields.next() {
            board.halfmove_clock = clock
                .parse()
                .map_err(|_| ParseError::InvalidClock(clock.to_string()))?;
        }

        let mut fullmove_number = 1;
        if let Some(number) = fields.next() {
            fullmove_number = number
                .parse()
                .ok()
                .filter(|&n: &u32| n >= 1)
                .ok_or_else(|| ParseError::InvalidClock(number.to_string()))?;
        }

        Ok(Self::from_board(board, fullmove_number))
    }

    fn from_board(board: Board, fullmove_number: u32) -> Self {
        let keys = ZobristKeys::shared();
        Self {
            board,
            keys,
            history: vec![serialize_placement(&board.bitboards)],
            hash_history: vec![keys.hash(&board)],
            last_move: None,
            legal_moves: board.legal_moves(),
            fullmove_number,
        }
    }

    /// Canonical placement string. Side, castling and en passant are not part of it.
    pub fn serialize(&self) -> String {
        serialize_placement(&self.board.bitboards)
    }

    /// Full FEN record
    pub fn to_fen(&self) -> String {
        let side = match self.board.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };

        let mut castling: String = [
            (WHITE_KINGSIDE, 'K'),
            (WHITE_QUEENSIDE, 'Q'),
            (BLACK_KINGSIDE, 'k'),
            (BLACK_QUEENSIDE, 'q'),
        ]
        .iter()
        .filter(|(idx, _)| self.board.castling[*idx])
        .map(|&(_, c)| c)
        .collect();
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .board
            .en_passant
            .map_or_else(|| "-".to_string(), to_algebraic);

        format!(
            "{} {} {} {} {} {}",
            self.serialize(),
            side,
            castling,
            en_passant,
            self.board.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Plays a move from the current legal-move list
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<()> {
        if self.board.piece_at(mv.from).is_none() {
            return Err(ChessError::EmptySquare { square: mv.from });
        }
        if !self.legal_moves.contains(&mv) {
            return Err(ChessError::IllegalMove { mv });
        }

        let mover = self.board.side_to_move;
        self.board.make_move(mv);
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.history.push(self.serialize());
        self.hash_history.push(self.keys.hash(&self.board));
        self.last_move = Some(mv);
        self.board.legal_moves_into(&mut self.legal_moves);
        Ok(())
    }

    /// Legal move matching the given squares (and promotion piece, if any)
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<Type>) -> Option<Move> {
        self.legal_moves
            .iter()
            .copied()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
    }

    /// Legal move written in long algebraic form, e.g. "e2e4" or "a7a8q"
    pub fn find_move_str(&self, text: &str) -> Option<Move> {
        let from = from_algebraic(text.get(0..2)?)?;
        let to = from_algebraic(text.get(2..4)?)?;
        let promotion = match text.get(4..) {
            None | Some("") => None,
            Some(letter) => {
                let piece = Piece::from_char(letter.chars().next()?)?;
                Some(piece.piece_type)
            }
        };
        self.find_move(from, to, promotion)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn keys(&self) -> &'static ZobristKeys {
        self.keys
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn castling_rights(&self) -> [bool; 4] {
        self.board.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.board.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// True for the start or target square of the last move
    pub fn is_last_move_square(&self, square: Square) -> bool {
        self.last_move
            .is_some_and(|mv| mv.from == square || mv.to == square)
    }

    /// Zobrist key of the current position
    pub fn hash(&self) -> u64 {
        self.hash_history
            .last()
            .copied()
            .unwrap_or_else(|| self.keys.hash(&self.board))
    }

    /// Is the side to move in check
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.board.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.legal_moves.is_empty() && self.is_in_check()
    }

    pub fn is_stalemate(&self) -> bool {
        self.legal_moves.is_empty() && !self.is_in_check()
    }

    /// The current position has occurred at least three times
    pub fn is_draw_by_repetition(&self) -> bool {
        let current = self.hash();
        self.hash_history.iter().filter(|&&h| h == current).count() >= 3
    }

    /// A hundred half-moves without a capture or pawn move
    pub fn is_draw_by_fifty_moves(&self) -> bool {
        self.board.halfmove_clock >= 100
    }

    /// Neither side has mating material: K v K, K+minor v K, or
    /// K+B v K+B with both bishops on the same square color
    pub fn is_insufficient_material(&self) -> bool {
        let bb = &self.board.bitboards;
        let count = |color, piece_type| popcount(bb.pieces_of_type(color, piece_type));

        for color in [Color::White, Color::Black] {
            if count(color, Type::Pawn) + count(color, Type::Rook) + count(color, Type::Queen) > 0 {
                return false;
            }
        }

        let white_minors = count(Color::White, Type::Knight) + count(Color::White, Type::Bishop);
        let black_minors = count(Color::Black, Type::Knight) + count(Color::Black, Type::Bishop);

        match (white_minors, black_minors) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (1, 1) => {
                let white_bishop = bb.pieces_of_type(Color::White, Type::Bishop);
                let black_bishop = bb.pieces_of_type(Color::Black, Type::Bishop);
                white_bishop != 0
                    && black_bishop != 0
                    && square_shade(white_bishop) == square_shade(black_bishop)
            }
            _ => false,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.legal_moves.is_empty() {
            return if self.is_in_check() {
                GameStatus::Checkmate {
                    winner: !self.board.side_to_move,
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_draw_by_repetition() {
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        } else if self.is_draw_by_fifty_moves() {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else {
            GameStatus::Ongoing
        }
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    pub fn perft(&self, depth: u32) -> u64 {
        let mut board = self.board;
        board.perft(depth)
    }

    /// Perft split by first move (debugging tool)
    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        let mut board = self.board;
        self.legal_moves
            .iter()
            .map(|&mv| {
                let undo = board.make_move(mv);
                let count = board.perft(depth.saturating_sub(1));
                board.unmake_move(mv, undo);
                (mv, count)
            })
            .collect()
    }
}

/// 0 for dark squares, 1 for light, of the single square set in `bb`
fn square_shade(bb: u64) -> u8 {
    let sq = bb.trailing_zeros() as Square;
    (file_of(sq) + rank_of(sq)) % 2
}

fn parse_placement(placement: &str) -> Result<Bitboards, ParseError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::WrongRankCount { count: ranks.len() });
    }

    let mut bitboards = Bitboards::empty();
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0usize;

        for c in rank_str.chars() {
            match c {
                '1'..='8' => file += (c as u8 - b'0') as usize,
                _ => {
                    let piece = Piece::from_char(c)
                        .ok_or(ParseError::InvalidCharacter { character: c })?;
                    if file < 8 {
                        bitboards.add_piece(piece, square_at(file as u8, rank) as usize);
                    }
                    file += 1;
                }
            }
        }

        if file != 8 {
            return Err(ParseError::BadRankLength {
                rank: rank + 1,
                squares: file,
            });
        }
    }

    bitboards.update_aggregates();
    Ok(bitboards)
}

fn serialize_placement(bitboards: &Bitboards) -> String {
    let mut out = String::with_capacity(72);

    for rank in (0..8u8).rev() {
        let mut empty = 0;
        for file in 0..8u8 {
            match bitboards.piece_at(square_at(file, rank) as usize) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn parse_castling(field: &str) -> Result<[bool; 4], ParseError> {
    let mut rights = [false; 4];
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let idx = match c {
            'K' => WHITE_KINGSIDE,
            'Q' => WHITE_QUEENSIDE,
            'k' => BLACK_KINGSIDE,
            'q' => BLACK_QUEENSIDE,
            _ => return Err(ParseError::InvalidCastling(field.to_string())),
        };
        rights[idx] = true;
    }
    Ok(rights)
}

/// The target must be the square the opponent's last double push skipped:
/// on the far side's third rank, empty, with that pawn just beyond it.
fn parse_en_passant(field: &str, board: &Board) -> Result<Option<Square>, ParseError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || ParseError::InvalidEnPassant(field.to_string());

    let target = from_algebraic(field).ok_or_else(invalid)?;
    let mover = board.side_to_move;
    let skipped_rank = match mover {
        Color::White => 5,
        Color::Black => 2,
    };
    if rank_of(target) != skipped_rank || board.piece_at(target).is_some() {
        return Err(invalid());
    }

    let victim = en_passant_victim(target, mover);
    if board.piece_at(victim) != Some(Piece::new(!mover, Type::Pawn)) {
        return Err(invalid());
    }
    Ok(Some(target))
}
