//! Tests for the minimax move selector.

use minimax_tictactoe::{
    Board, GameState, Outcome, Player, Square, evaluate_outcome, pick_best_move,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Plays every possible human (X) line against the computer (O) and returns
/// how many games each outcome produced.
fn play_all_lines(state: GameState, tally: &mut [usize; 3]) {
    match state.outcome() {
        Outcome::Won(Player::X) => {
            tally[0] += 1;
            return;
        }
        Outcome::Won(Player::O) => {
            tally[1] += 1;
            return;
        }
        Outcome::Draw => {
            tally[2] += 1;
            return;
        }
        Outcome::InProgress => {}
    }

    let empty: Vec<usize> = state.board().empty_indices().collect();
    for index in empty {
        let after_human = state.apply_move(index, Player::X).unwrap();
        if after_human.outcome().is_terminal() {
            play_all_lines(after_human, tally);
            continue;
        }
        let reply = pick_best_move(after_human.board()).unwrap();
        let after_computer = after_human.apply_move(reply, Player::O).unwrap();
        play_all_lines(after_computer, tally);
    }
}

#[test]
fn test_computer_never_loses() {
    let mut tally = [0; 3];
    play_all_lines(GameState::new(), &mut tally);
    assert_eq!(tally, [0, 386, 183]);
}

fn mirrored(b: &Board) -> Board {
    b.squares()
        .iter()
        .map(|square| match square {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'O',
            Square::Occupied(Player::O) => 'X',
        })
        .collect::<String>()
        .parse()
        .expect("nine squares")
}

#[test]
fn test_perfect_play_is_a_draw() {
    let mut state = GameState::new();
    let mut player = Player::X;
    while !state.outcome().is_terminal() {
        let index = if player == Player::O {
            pick_best_move(state.board()).unwrap()
        } else {
            // The selector plays O, so X searches on a board with marks swapped.
            pick_best_move(&mirrored(state.board())).unwrap()
        };
        state = state.apply_move(index, player).unwrap();
        player = player.opponent();
    }
    assert_eq!(state.outcome(), Outcome::Draw);
}

#[test]
fn test_scenario_blocks_or_wins_row() {
    // O to move can win at 5 immediately, which outranks blocking at 2.
    assert_eq!(pick_best_move(&board("XX_OO____")), Ok(5));
    // Without its own threat, O blocks X's top row.
    assert_eq!(pick_best_move(&board("XX_O_____")), Ok(2));
}

#[test]
fn test_scenario_completes_own_row() {
    assert_eq!(pick_best_move(&board("OO_XX_X__")), Ok(2));
}

#[test]
fn test_scenario_last_square_draws() {
    let state = GameState::from_board(board("XOXXOOOX_"), Player::X);
    let state = state.apply_move(8, Player::X).unwrap();
    assert_eq!(state.outcome(), Outcome::Draw);
}

#[test]
fn test_scenario_last_square_on_diagonal_wins() {
    let state = GameState::from_board(board("XOXOXOOX_"), Player::X);
    let state = state.apply_move(8, Player::X).unwrap();
    assert_eq!(state.outcome(), Outcome::Won(Player::X));
}

#[test]
fn test_pick_leaves_board_unchanged() {
    for s in ["_________", "X________", "X___O___X", "XX_O_____", "XOXOXO___"] {
        let b = board(s);
        let before = b;
        pick_best_move(&b).unwrap();
        assert_eq!(b, before, "board {} changed", s);
    }
}

#[test]
fn test_evaluation_pure_on_every_reachable_board() {
    fn walk(state: GameState, seen: &mut usize) {
        *seen += 1;
        let b = *state.board();
        let first = evaluate_outcome(&b);
        assert_eq!(evaluate_outcome(&b), first);
        assert_eq!(&b, state.board());
        if first.is_terminal() {
            return;
        }
        let empty: Vec<usize> = b.empty_indices().collect();
        for index in empty {
            let next = state
                .apply_move(index, state.current_player())
                .unwrap()
                .switch_player();
            walk(next, seen);
        }
    }

    let mut seen = 0;
    walk(GameState::new(), &mut seen);
    // Paths through the game tree, not distinct boards.
    assert_eq!(seen, 549_946);
}
