use std::fmt;

use super::piece::Type;
use super::square::{to_algebraic, Square};

/// A single move as produced by the generator.
///
/// `Move::NULL` (a1 to a1, no flags) stands for "no move selected yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub en_passant: bool,
    pub promotion: Option<Type>,
    pub castling: bool,
}

impl Move {
    pub const NULL: Move = Move {
        from: 0,
        to: 0,
        en_passant: false,
        promotion: None,
        castling: false,
    };

    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            en_passant: false,
            promotion: None,
            castling: false,
        }
    }

    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            en_passant: true,
            promotion: None,
            castling: false,
        }
    }

    pub const fn promotion(from: Square, to: Square, piece_type: Type) -> Self {
        Self {
            from,
            to,
            en_passant: false,
            promotion: Some(piece_type),
            castling: false,
        }
    }

    pub const fn castling(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            en_passant: false,
            promotion: None,
            castling: true,
        }
    }

    pub fn is_null(&self) -> bool {
        *self == Move::NULL
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", to_algebraic(self.from), to_algebraic(self.to))?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_move_is_default() {
        assert_eq!(Move::default(), Move::NULL);
        assert!(Move::NULL.is_null());
        assert!(!Move::new(12, 28).is_null());
    }

    #[test]
    fn test_display_long_algebraic() {
        assert_eq!(Move::new(12, 28).to_string(), "e2e4");
        assert_eq!(Move::promotion(52, 60, Type::Knight).to_string(), "e7e8n");
        assert_eq!(Move::NULL.to_string(), "0000");
    }
}
