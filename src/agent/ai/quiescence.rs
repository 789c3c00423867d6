// Quiescence search
//
// At the horizon the main search hands over to a capture-only search so that
// a position is never scored halfway through an exchange. The side to move may
// always "stand pat" on the static evaluation instead of capturing.

use super::evaluation::evaluate;
use super::move_ordering::order_captures;
use super::negamax::SearchState;
use crate::game_repr::Board;

/// Captures deeper than this are not followed; the static score is used instead
pub const MAX_QSEARCH_DEPTH: u8 = 16;

impl SearchState {
    /// Capture-only search inside (alpha, beta). Fails hard: the result is
    /// clamped to the window.
    pub fn quiescence(&mut self, board: &mut Board, mut alpha: i32, beta: i32, qs_depth: u8) -> i32 {
        self.nodes += 1;

        let stand_pat = evaluate(board);
        if qs_depth >= MAX_QSEARCH_DEPTH {
            return stand_pat.clamp(alpha, beta);
        }

        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut captures = Vec::new();
        board.legal_captures_into(&mut captures);

        for mv in order_captures(board, &captures) {
            let undo = board.make_move(mv);
            let score = -self.quiescence(board, -beta, -alpha, qs_depth + 1);
            board.unmake_move(mv, undo);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::negamax::INFINITY;
    use crate::agent::ai::transposition_table::TranspositionTable;
    use crate::game_repr::{Position, ZobristKeys};

    fn qsearch(fen: &str, alpha: i32, beta: i32) -> (i32, Board) {
        let mut board = *Position::from_fen(fen).unwrap().board();
        let mut state =
            SearchState::with_table(ZobristKeys::shared(), TranspositionTable::with_capacity(16));
        let score = state.quiescence(&mut board, alpha, beta, 0);
        (score, board)
    }

    #[test]
    fn test_quiet_position_returns_static_eval() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
        let (score, board) = qsearch(fen, -INFINITY, INFINITY);
        assert_eq!(score, evaluate(&board));
    }

    #[test]
    fn test_stand_pat_cutoff_returns_beta() {
        let (score, _) = qsearch("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1", -10000, -500);
        assert_eq!(score, -500);
    }

    #[test]
    fn test_resolves_winning_capture() {
        let (score, _) = qsearch("4k3/8/8/8/4q3/8/8/4RK2 w - - 0 1", -INFINITY, INFINITY);
        assert!(score > 300, "Rxe4 should be seen: {}", score);
    }

    #[test]
    fn test_sees_recapture() {
        // Qxd5 loses the queen to exd5; standing pat is better
        let fen = "4k3/8/4p3/3p4/8/8/3Q4/4K3 w - - 0 1";
        let (score, board) = qsearch(fen, -INFINITY, INFINITY);
        assert_eq!(score, evaluate(&board));
    }

    #[test]
    fn test_en_passant_is_searched() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2";
        let (score, board) = qsearch(fen, -INFINITY, INFINITY);
        assert!(score > evaluate(&board));
    }

    #[test]
    fn test_board_restored() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let before = *Position::from_fen(fen).unwrap().board();
        let (_, after) = qsearch(fen, -INFINITY, INFINITY);
        assert_eq!(before, after);
    }
}
