//! Perft: exhaustive legal-move tree counts used as a rules regression check.
//!
//! The generator emits one queen promotion per promoting move; perft expands
//! it into all four promotion kinds so counts match published tables.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::has_any_legal_move;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Every move, with the queen promotion expanded to all four kinds.
fn expanded_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for mv in game_state.all_legal_moves() {
        if mv.promotion.is_some() {
            moves.extend(PROMOTION_KINDS.iter().map(|kind| ChessMove {
                promotion: Some(*kind),
                ..mv
            }));
        } else {
            moves.push(mv);
        }
    }
    moves
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in expanded_moves(game_state) {
        perft_recurse(game_state, &mv, depth, 1, &mut total);
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(ChessMove, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    expanded_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(game_state, &mv, depth, 1, &mut counts);
            (mv, counts.nodes)
        })
        .collect()
}

fn perft_recurse(
    parent: &GameState,
    mv: &ChessMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let mut child = parent.snapshot();
    child.apply_simulated(mv);

    if current_depth == search_depth {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if mv.captured.is_some() {
            leaf.captures = 1;
            if mv.moved.kind == PieceKind::Pawn && parent.board().is_empty(mv.to) {
                leaf.en_passant = 1;
            }
        }
        if mv.moved.kind == PieceKind::King && (mv.to.column - mv.from.column).abs() == 2 {
            leaf.castles = 1;
        }
        if mv.promotion.is_some() {
            leaf.promotions = 1;
        }
        if child.in_check(child.side_to_move()) {
            leaf.checks = 1;
            if !has_any_legal_move(&child) {
                leaf.checkmates = 1;
            }
        }
        counts.merge(leaf);
        return;
    }

    for next in expanded_moves(&child) {
        perft_recurse(&child, &next, search_depth, current_depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::game_state::GameState;

    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";

    #[test]
    fn depth_zero_counts_single_node() {
        assert_eq!(
            perft(&GameState::new_game(), 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth_three = perft(&game, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn position_three_exercises_en_passant_and_pins() {
        let game = GameState::from_fen(POSITION_3).expect("FEN should parse");
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);

        let depth_three = perft(&game, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.captures, 209);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn kiwipete_exercises_castling() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let depth_one = perft(&game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&game, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn promotions_count_four_ways() {
        // Lone pawn on a7 with both kings far away: 4 promotions + 5 king moves.
        let game = GameState::from_fen("8/P7/8/8/8/8/7k/4K3 w - - 0 1").expect("FEN should parse");
        let counts = perft(&game, 1);
        assert_eq!(counts.promotions, 4);
        assert_eq!(counts.nodes, 9);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let split = perft_divide(&game, 2);
        assert_eq!(split.len(), 48);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<usize>(), 2039);
    }
}
