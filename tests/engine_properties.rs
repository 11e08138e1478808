use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use minimax_connect_four::ai::{Difficulty, Minimax, MinimaxPlayer};
use minimax_connect_four::config::EngineConfig;
use minimax_connect_four::error::SelectError;
use minimax_connect_four::game::{check_win, Board, GameState, Player, Position};

/// Play up to `moves` random legal moves, stopping early if the game ends.
fn random_position(seed: u64, moves: usize) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::initial();
    for _ in 0..moves {
        let legal = state.legal_actions();
        if legal.is_empty() {
            break;
        }
        let column = legal[rng.random_range(0..legal.len())];
        let next = state.apply_move(column).unwrap();
        if next.is_terminal() {
            break;
        }
        state = next;
    }
    state
}

#[test]
fn pruning_never_changes_the_score() {
    for seed in 0..12 {
        let state = random_position(seed, (seed as usize * 3) % 20);
        let piece = state.current_player();
        for depth in 1..=4 {
            let full = Minimax::new(piece, false);
            let pruned = Minimax::new(piece, true);
            let mut rng = StdRng::seed_from_u64(seed + 1000);
            let (full_out, full_stats) =
                full.search_root(state.board(), depth, state.last_move(), &mut rng);
            let (pruned_out, pruned_stats) =
                pruned.search_root(state.board(), depth, state.last_move(), &mut rng);

            assert_eq!(
                full_out.score, pruned_out.score,
                "seed {seed}, depth {depth}: scores differ"
            );
            assert!(pruned_stats.nodes <= full_stats.nodes);
        }
    }
}

#[test]
fn searched_move_is_always_legal() {
    let engine = EngineConfig {
        depth: 3,
        pruning: true,
    };
    for seed in 0..10 {
        let state = random_position(seed, 15);
        let player = MinimaxPlayer::new(state.current_player(), Difficulty::Hard, &engine);
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = player
            .select_move(state.board(), state.last_move(), &mut rng)
            .unwrap();
        assert!(state.legal_actions().contains(&choice.column));
        assert!(choice.searched);
        assert!(choice.nodes >= 1);
    }
}

#[test]
fn hard_player_completes_a_vertical_four() {
    let board = Board::from_rows(&[
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 2, 0, 0],
        vec![0, 0, 1, 0, 2, 2, 0],
    ])
    .unwrap();
    let last = Some(Position::new(5, 5));
    let engine = EngineConfig {
        depth: 4,
        pruning: true,
    };
    let player = MinimaxPlayer::new(Player::One, Difficulty::Hard, &engine);
    let mut rng = StdRng::seed_from_u64(3);
    let choice = player.select_move(&board, last, &mut rng).unwrap();
    assert_eq!(choice.column, 2);
    assert_eq!(choice.score, Some(f64::INFINITY));

    let (next, row) = board.apply_move(choice.column, Player::One).unwrap();
    assert_eq!(
        check_win(&next, Some(Position::new(row, 2))),
        Some(Player::One)
    );
}

/// Fill each column to a random height with random pieces, ignoring wins.
/// Every fourth seed fills the board completely.
fn filled_board(seed: u64) -> (Board, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::default();
    let heights: Vec<usize> = (0..board.cols())
        .map(|_| {
            if seed % 4 == 0 {
                board.rows()
            } else {
                rng.random_range(0..=board.rows())
            }
        })
        .collect();
    for (col, &height) in heights.iter().enumerate() {
        for _ in 0..height {
            let player = if rng.random::<bool>() {
                Player::One
            } else {
                Player::Two
            };
            board.drop_piece(col, player).unwrap();
        }
    }
    (board, heights)
}

#[test]
fn full_boards_have_no_legal_moves() {
    let mut full = 0;
    let mut partial = 0;
    for seed in 0..40 {
        let (board, heights) = filled_board(seed);
        let open: Vec<usize> = (0..board.cols())
            .filter(|&col| heights[col] < board.rows())
            .collect();

        assert_eq!(board.legal_moves(), open, "seed {seed}");
        assert_eq!(board.is_full(), board.legal_moves().is_empty(), "seed {seed}");
        if board.is_full() {
            full += 1;
        } else {
            partial += 1;
        }
    }
    assert!(full >= 10);
    assert!(partial >= 1);
}

#[test]
fn full_board_without_winner_is_rejected_as_draw() {
    // Columns in pairs of alternating owners never line up four in a row.
    let rows: Vec<Vec<u8>> = (0..6usize)
        .map(|row| {
            (0..7usize)
                .map(|col| if (col / 2 + row) % 2 == 0 { 1 } else { 2 })
                .collect()
        })
        .collect();
    let board = Board::from_rows(&rows).unwrap();
    assert!(board.is_full());

    let engine = EngineConfig::default();
    let player = MinimaxPlayer::new(Player::One, Difficulty::Hard, &engine);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        player.select_move(&board, None, &mut rng),
        Err(SelectError::NoLegalMoves)
    );
}
