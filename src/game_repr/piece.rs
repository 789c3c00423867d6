#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    pub const ALL: [Type; 6] = [
        Type::Pawn,
        Type::Knight,
        Type::Bishop,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Pieces a pawn may promote to, in the order the generator emits them
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    /// Offset of this kind inside a color's block of six bitboards
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Type::Pawn => 0,
            Type::Knight => 1,
            Type::Bishop => 2,
            Type::Rook => 3,
            Type::Queen => 4,
            Type::King => 5,
        }
    }

    /// Material value in centipawns
    pub const fn value(self) -> i32 {
        match self {
            Type::Pawn => 100,
            Type::Knight => 320,
            Type::Bishop => 330,
            Type::Rook => 500,
            Type::Queen => 900,
            Type::King => 20000,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opposite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Index into the 12 piece bitboards: white 0..6, black 6..12
    #[inline(always)]
    pub const fn bitboard_index(self) -> usize {
        self.color.index() * 6 + self.piece_type.index()
    }

    /// Inverse of [`Piece::bitboard_index`]
    pub const fn from_bitboard_index(idx: usize) -> Self {
        let color = if idx < 6 { Color::White } else { Color::Black };
        let piece_type = Type::ALL[idx % 6];
        Self { color, piece_type }
    }

    /// Placement letter: uppercase for white, lowercase for black.
    /// Returns `None` for anything that is not one of `KQRBNPkqrbnp`.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}
