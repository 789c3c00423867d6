// Square indexing: 0..64, rank-major, a1 = 0, h1 = 7, a8 = 56, h8 = 63

pub type Square = u8;

pub const A1: Square = 0;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

#[inline(always)]
pub const fn file_of(sq: Square) -> u8 {
    sq % 8
}

#[inline(always)]
pub const fn rank_of(sq: Square) -> u8 {
    sq / 8
}

#[inline(always)]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// "e4" style name of a square
pub fn to_algebraic(sq: Square) -> String {
    let file = (b'a' + file_of(sq)) as char;
    let rank = (b'1' + rank_of(sq)) as char;
    format!("{}{}", file, rank)
}

/// Parses "e4" style names; anything else is `None`
pub fn from_algebraic(name: &str) -> Option<Square> {
    let mut chars = name.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Some(square_at(file as u8 - b'a', rank as u8 - b'1'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_names() {
        assert_eq!(to_algebraic(A1), "a1");
        assert_eq!(to_algebraic(H8), "h8");
        assert_eq!(to_algebraic(28), "e4");
        assert_eq!(from_algebraic("e4"), Some(28));
        assert_eq!(from_algebraic("a8"), Some(A8));
    }

    #[test]
    fn test_from_algebraic_rejects_garbage() {
        assert_eq!(from_algebraic("i1"), None);
        assert_eq!(from_algebraic("a9"), None);
        assert_eq!(from_algebraic("e44"), None);
        assert_eq!(from_algebraic(""), None);
    }

    #[test]
    fn test_file_and_rank() {
        assert_eq!(file_of(28), 4);
        assert_eq!(rank_of(28), 3);
        assert_eq!(square_at(4, 3), 28);
    }
}
