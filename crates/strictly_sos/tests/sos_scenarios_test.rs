//! End-to-end scenarios for both variants.

use strictly_sos::{
    Letter, Move, MoveError, Outcome, Player, Scores, SosGame, SosLine, SosVariant, Variant,
};

const OPENING: [(usize, usize, &str); 5] =
    [(0, 0, "S"), (1, 0, "S"), (0, 1, "O"), (1, 1, "O"), (0, 2, "S")];

fn play(game: &mut SosGame, moves: &[(usize, usize, &str)]) {
    for &(row, col, letter) in moves {
        assert!(game.make_move(row, col, letter), "move {row},{col},{letter} rejected");
    }
}

#[test]
fn test_simple_first_sos_wins() {
    let mut game = SosGame::new(3, Variant::Simple);
    play(&mut game, &OPENING[..4]);
    assert!(!game.is_over());
    play(&mut game, &OPENING[4..]);

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Player::Blue));
    assert_eq!(game.current_turn(), Player::Blue);
    assert_eq!(game.last_move_player(), Some(Player::Blue));
    assert_eq!(game.cell(0, 2), Some(Letter::S));

    let lines = game.last_sos_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], SosLine { r1: 0, c1: 2, r2: 0, c2: 0 });
    assert_eq!(lines[0].normalized(), SosLine { r1: 0, c1: 0, r2: 0, c2: 2 });
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Blue)));
}

#[test]
fn test_general_scores_and_toggles() {
    let mut game = SosGame::new(3, Variant::General);
    play(&mut game, &OPENING[..1]);
    assert_eq!(game.current_turn(), Player::Red);
    play(&mut game, &OPENING[1..2]);
    assert_eq!(game.current_turn(), Player::Blue);
    play(&mut game, &OPENING[2..]);

    assert_eq!(game.scores(), Some(Scores { blue: 1, red: 0 }));
    assert_eq!(game.current_turn(), Player::Red);
    assert_eq!(game.last_move_player(), Some(Player::Blue));
    assert_eq!(game.last_sos_lines().len(), 1);
    assert!(!game.is_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_general_ends_on_last_cell() {
    let mut game = SosGame::new(3, Variant::General);
    play(&mut game, &OPENING);
    let remaining: Vec<_> = game.board().empty_cells().collect();
    assert_eq!(remaining.len(), 4);

    for (i, (row, col)) in remaining.iter().copied().enumerate() {
        assert!(!game.is_over(), "ended early at move {i}");
        assert!(game.make_move(row, col, "O"));
    }
    assert!(game.is_board_full());
    assert!(game.is_over());
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Blue)));
    assert_eq!(game.try_move(0, 0, "S"), Err(MoveError::GameOver));
}

#[test]
fn test_placing_o_between_two_s_does_not_score() {
    let mut game = SosGame::new(3, Variant::General);
    play(&mut game, &[(0, 0, "S"), (0, 2, "S")]);
    let report = game.try_move(0, 1, "O").unwrap();
    assert!(report.lines.is_empty());
    assert_eq!(game.scores(), Some(Scores::default()));

    let mut game = SosGame::new(3, Variant::Simple);
    play(&mut game, &[(0, 0, "S"), (0, 2, "S"), (0, 1, "O")]);
    assert!(!game.is_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_rejections_change_nothing() {
    for variant in [Variant::Simple, Variant::General] {
        let mut game = SosGame::new(3, variant);
        play(&mut game, &[(1, 1, "S")]);
        let before = game.clone();

        assert_eq!(
            game.try_move(1, 1, "O"),
            Err(MoveError::InvalidMove { row: 1, col: 1 })
        );
        assert_eq!(
            game.try_move(3, 0, "O"),
            Err(MoveError::InvalidMove { row: 3, col: 0 })
        );
        assert_eq!(
            game.try_move(0, 0, "Z"),
            Err(MoveError::InvalidLetter("Z".to_string()))
        );
        assert!(!game.make_move(0, 0, ""));
        assert!(!game.make_move(usize::MAX, usize::MAX, "S"));
        assert_eq!(game, before);
    }
}

#[test]
fn test_apply_takes_parsed_moves() {
    let mut game = SosGame::new(4, Variant::Simple);
    let report = game.apply(Move::new(3, 3, Letter::O)).unwrap();
    assert_eq!(report.player, Player::Blue);
    assert!(!report.scored());
    assert_eq!(game.cell_owner(3, 3), Some(Player::Blue));
}

#[test]
fn test_game_state_serializes() {
    let mut game = SosGame::new(3, Variant::General);
    play(&mut game, &OPENING);
    let json = serde_json::to_string(&game).expect("serialize");
    let back: SosGame = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, game);
}
