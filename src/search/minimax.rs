//! Minimax search with alpha-beta pruning over disposable snapshots.
//!
//! Scores are always from White's perspective: White nodes maximize and
//! Black nodes minimize. The live `GameState` is never touched; every tree
//! edge works on its own snapshot.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::game_state::chess_types::{ChessMove, Color};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{piece_value, BoardScorer, Score};

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// Value of `best_move` from the mover's point of view.
    pub best_score: Score,
    pub nodes: u64,
}

#[inline]
fn capture_value(mv: &ChessMove) -> Score {
    mv.captured.map_or(0.0, |piece| piece_value(piece.kind))
}

/// Legal moves for the side to move, most valuable captures first. The sort is
/// stable so equal moves keep generation order.
pub fn ordered_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut moves = game_state.all_legal_moves();
    moves.sort_by(|a, b| capture_value(b).total_cmp(&capture_value(a)));
    moves
}

#[inline]
pub fn child_state(game_state: &GameState, mv: &ChessMove) -> GameState {
    let mut child = game_state.snapshot();
    child.apply_simulated(mv);
    child
}

pub fn minimax<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    if depth == 0 || game_state.is_game_over() {
        return scorer.score(game_state);
    }

    let moves = ordered_moves(game_state);
    if moves.is_empty() {
        let mut ended = game_state.snapshot();
        ended.outcome = game_state.outcome_without_moves();
        return scorer.score(&ended);
    }

    if maximizing {
        let mut best = Score::NEG_INFINITY;
        for mv in &moves {
            let child = child_state(game_state, mv);
            let value = minimax(
                &child,
                scorer,
                depth - 1,
                child.white_to_move(),
                alpha,
                beta,
                nodes,
            );
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = Score::INFINITY;
        for mv in &moves {
            let child = child_state(game_state, mv);
            let value = minimax(
                &child,
                scorer,
                depth - 1,
                child.white_to_move(),
                alpha,
                beta,
                nodes,
            );
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Pick a move for the side to move. Root moves are shuffled first, so
/// equally valued moves are chosen among at random; the first move reaching
/// the best value wins. If no move scores above negative infinity (a scorer
/// returning NaN), a random legal move is returned instead.
pub fn search_root<S, R>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    rng: &mut R,
) -> SearchResult
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let mover = game_state.side_to_move();
    let orientation = match mover {
        Color::White => 1.0,
        Color::Black => -1.0,
    };

    let mut moves = game_state.all_legal_moves();
    moves.shuffle(rng);

    let mut result = SearchResult {
        best_move: None,
        best_score: Score::NEG_INFINITY,
        nodes: 1,
    };

    for mv in &moves {
        let child = child_state(game_state, mv);
        let value = minimax(
            &child,
            scorer,
            depth.saturating_sub(1),
            child.white_to_move(),
            Score::NEG_INFINITY,
            Score::INFINITY,
            &mut result.nodes,
        );
        let oriented = orientation * value;
        if oriented > result.best_score {
            result.best_score = oriented;
            result.best_move = Some(*mv);
        }
    }

    if result.best_move.is_none() {
        result.best_move = moves.choose(rng).copied();
    }

    result
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{child_state, minimax, ordered_moves, search_root};
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::{BoardScorer, HeuristicScorer, Score};

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";

    fn sq(name: &str) -> Position {
        Position::from_algebraic(name).expect("test square should parse")
    }

    /// Exhaustive minimax without pruning.
    fn plain_minimax(game: &GameState, scorer: &HeuristicScorer, depth: u8) -> Score {
        if depth == 0 || game.is_game_over() {
            return scorer.score(game);
        }
        let moves = game.all_legal_moves();
        if moves.is_empty() {
            let mut ended = game.snapshot();
            ended.outcome = game.outcome_without_moves();
            return scorer.score(&ended);
        }
        let values = moves
            .iter()
            .map(|mv| plain_minimax(&child_state(game, mv), scorer, depth - 1));
        if game.white_to_move() {
            values.fold(Score::NEG_INFINITY, Score::max)
        } else {
            values.fold(Score::INFINITY, Score::min)
        }
    }

    fn pruned(game: &GameState, scorer: &HeuristicScorer, depth: u8) -> (Score, u64) {
        let mut nodes = 0;
        let value = minimax(
            game,
            scorer,
            depth,
            game.white_to_move(),
            Score::NEG_INFINITY,
            Score::INFINITY,
            &mut nodes,
        );
        (value, nodes)
    }

    #[test]
    fn alpha_beta_matches_exhaustive_minimax_from_start() {
        let game = GameState::new_game();
        let scorer = HeuristicScorer::default();
        for depth in 1..=3 {
            let (value, _) = pruned(&game, &scorer, depth);
            assert_eq!(value, plain_minimax(&game, &scorer, depth), "depth {depth}");
        }
    }

    #[test]
    fn alpha_beta_matches_exhaustive_minimax_in_kiwipete() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let scorer = HeuristicScorer::default();
        let (value, nodes) = pruned(&game, &scorer, 2);
        assert_eq!(value, plain_minimax(&game, &scorer, 2));
        // 1 root + 48 children + at most 2039 leaves.
        assert!(nodes < 1 + 48 + 2039);
    }

    #[test]
    fn captures_are_ordered_by_victim_value() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let moves = ordered_moves(&game);
        // Be2xa6 wins the bishop, the most valuable piece en prise.
        let first = moves[0].captured.expect("best capture should come first");
        assert_eq!(first.kind, PieceKind::Bishop);
        let mut seen_quiet = false;
        for mv in &moves {
            if mv.captured.is_none() {
                seen_quiet = true;
            } else {
                assert!(!seen_quiet, "capture listed after a quiet move");
            }
        }
    }

    #[test]
    fn takes_undefended_queen_at_depth_one_and_two() {
        let game =
            GameState::from_fen("K7/7k/8/5n2/3Q4/8/8/8 b - - 0 1").expect("FEN should parse");
        let scorer = HeuristicScorer::default();
        for depth in [1, 2] {
            for seed in 0..4 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = search_root(&game, &scorer, depth, &mut rng);
                let best = result.best_move.expect("black has moves");
                assert_eq!((best.from, best.to), (sq("f5"), sq("d4")), "depth {depth}");
                assert!(result.best_score > 0.0);
            }
        }
    }

    #[test]
    fn white_side_search_also_maximizes_for_the_mover() {
        // Mirror image: white knight f4 can take the black queen on d5.
        let game =
            GameState::from_fen("8/8/8/3q4/5N2/8/7K/k7 w - - 0 1").expect("FEN should parse");
        let scorer = HeuristicScorer::new(Color::White);
        let mut rng = StdRng::seed_from_u64(7);
        let result = search_root(&game, &scorer, 1, &mut rng);
        let best = result.best_move.expect("white has moves");
        assert_eq!((best.from, best.to), (sq("f4"), sq("d5")));
    }

    struct NanScorer;

    impl BoardScorer for NanScorer {
        fn score(&self, _game_state: &GameState) -> Score {
            Score::NAN
        }
    }

    #[test]
    fn unscorable_positions_fall_back_to_a_random_legal_move() {
        let game = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(9);
        let result = search_root(&game, &NanScorer, 1, &mut rng);
        let mv = result.best_move.expect("a legal move should be picked");
        assert!(game.all_legal_moves().contains(&mv));
        assert_eq!(result.best_score, Score::NEG_INFINITY);
    }

    #[test]
    fn search_never_mutates_the_live_state() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let before = game.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = search_root(&game, &HeuristicScorer::default(), 2, &mut rng);
        assert_eq!(game, before);
    }

    #[test]
    fn no_moves_at_root_yields_no_move() {
        let game = GameState::from_fen("k7/1Q6/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(3);
        let result = search_root(&game, &HeuristicScorer::default(), 2, &mut rng);
        assert!(result.best_move.is_none());
    }
}
