//! Tests for the session state machine.

use minimax_tictactoe::{
    GameError, GameEvent, GameMode, GameState, Outcome, Phase, Player, Session,
};

#[test]
fn test_turn_alternation_in_two_player_mode() {
    let mut session = Session::new(GameMode::TwoPlayer);
    // X O X / X O O / O X _ : no line completes before the last square.
    for (n, index) in [0, 1, 2, 4, 3, 5, 7, 6].into_iter().enumerate() {
        session.apply_human_move(index).unwrap();
        let moves = n + 1;
        let expected = if moves % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(session.state().current_player(), expected, "after {} moves", moves);
    }
}

#[test]
fn test_game_against_computer_ends_and_locks() {
    let mut session = Session::new(GameMode::VsComputer);
    let mut ended = None;

    // The human always takes the lowest free square.
    while ended.is_none() {
        let index = session.state().board().empty_indices().next().unwrap();
        let mut events = session.apply_human_move(index).unwrap();
        if session.is_locked() {
            events.extend(session.play_computer_move().unwrap());
        }
        ended = events.into_iter().find_map(|event| match event {
            GameEvent::GameEnded {
                outcome,
                winning_line,
            } => Some((outcome, winning_line)),
            _ => None,
        });
    }

    let (outcome, line) = ended.unwrap();
    assert_eq!(outcome, Outcome::Won(Player::O));
    assert!(line.is_some());
    assert_eq!(session.phase(), Phase::Finished(outcome));
    assert_eq!(
        session.apply_human_move(8),
        Err(GameError::GameAlreadyOver { outcome })
    );
}

#[test]
fn test_winning_line_reported_in_two_player_mode() {
    let mut session = Session::new(GameMode::TwoPlayer);
    for index in [0, 3, 1, 4] {
        session.apply_human_move(index).unwrap();
    }
    let events = session.apply_human_move(2).unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::MoveApplied {
                index: 2,
                mark: Player::X
            },
            GameEvent::GameEnded {
                outcome: Outcome::Won(Player::X),
                winning_line: Some([0, 1, 2]),
            },
        ]
    );
    // No turn switch after a winning move.
    assert_eq!(session.state().current_player(), Player::X);
}

#[test]
fn test_draw_has_no_winning_line() {
    let mut session = Session::new(GameMode::TwoPlayer);
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        session.apply_human_move(index).unwrap();
    }
    let events = session.apply_human_move(8).unwrap();
    assert!(events.contains(&GameEvent::GameEnded {
        outcome: Outcome::Draw,
        winning_line: None,
    }));
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut session = Session::new(GameMode::TwoPlayer);
    session.apply_human_move(4).unwrap();
    let before = session.clone();

    assert_eq!(
        session.apply_human_move(4),
        Err(GameError::InvalidMove { index: 4 })
    );
    assert_eq!(
        session.apply_human_move(12),
        Err(GameError::IndexOutOfRange { index: 12 })
    );
    assert_eq!(session, before);
}

#[test]
fn test_reset_is_idempotent_from_any_state() {
    let fresh = Session::new(GameMode::VsComputer);

    let mut pending = Session::new(GameMode::VsComputer);
    pending.apply_human_move(0).unwrap();
    pending.reset();
    assert_eq!(pending, fresh);
    assert_eq!(*pending.state(), GameState::new());

    let mut finished = Session::new(GameMode::VsComputer);
    while !finished.outcome().is_terminal() {
        let index = finished.state().board().empty_indices().next().unwrap();
        finished.apply_human_move(index).unwrap();
        if finished.is_locked() {
            finished.play_computer_move().unwrap();
        }
    }
    finished.reset();
    finished.reset();
    assert_eq!(finished, fresh);
    assert!(!finished.has_started());
}
