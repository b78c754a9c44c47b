//! Integration tests for the session lifecycle and command surface

use tetris_arena::core::{ActionOutcome, GameSession, SessionConfig, SessionStats};
use tetris_arena::types::{Command, PieceKind, EMPTY};

fn started(seed: u64) -> GameSession {
    let mut session = GameSession::new(SessionConfig::default(), seed);
    session.start();
    session
}

fn initial_stats() -> SessionStats {
    SessionStats {
        score: 0,
        level: 1,
        lines: 0,
        drop_interval_ms: 1000,
        paused: false,
        game_over: false,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::new(SessionConfig::default(), 12345);
    assert!(!session.started());
    assert!(session.active().is_none());

    session.start();
    assert!(session.started());
    assert!(session.active().is_some());
    assert!(!session.game_over());
    assert!(!session.paused());
    assert_eq!(session.stats(), initial_stats());
}

#[test]
fn test_game_actions() {
    let mut session = started(12345);
    let (x0, y0) = session.active().unwrap().position();

    assert_eq!(session.apply(Command::MoveLeft), ActionOutcome::Applied);
    assert_eq!(session.active().unwrap().position(), (x0 - 1, y0));

    assert_eq!(session.apply(Command::MoveRight), ActionOutcome::Applied);
    assert_eq!(session.apply(Command::SoftDrop), ActionOutcome::Applied);
    assert_eq!(session.active().unwrap().position(), (x0, y0 + 1));
    assert_eq!(session.score(), 1);

    let outcome = session.apply(Command::HardDrop);
    assert!(matches!(outcome, ActionOutcome::Landed(_)));
    assert!(session.score() > 1);
    assert!(session.board().cells().iter().any(|&c| c != EMPTY));
}

#[test]
fn test_concrete_o_piece_scenario() {
    let mut session = started(7);
    let board = session.board_mut();
    for x in 0..10 {
        if x != 4 && x != 5 {
            board.set(x, 19, 3);
        }
    }
    assert!(session.spawn(PieceKind::O));

    let landing = session
        .apply(Command::HardDrop)
        .landing()
        .expect("hard drop lands");
    assert_eq!(landing.lines_cleared, 1);
    assert_eq!(landing.line_points, 40);
    assert_eq!(session.lines(), 1);
    assert_eq!(session.score(), 40 + 2 * 18);
}

#[test]
fn test_game_over_and_reset() {
    let mut session = started(99);
    // Hard-drop until the stack reaches the spawn rows
    let mut drops = 0;
    while !session.game_over() {
        session.apply(Command::HardDrop);
        drops += 1;
        assert!(drops < 500, "stack should reach the spawn rows");
    }
    let frozen = session.snapshot();
    for command in [
        Command::MoveLeft,
        Command::RotateCw,
        Command::SoftDrop,
        Command::HardDrop,
        Command::Pause,
    ] {
        assert_eq!(session.apply(command), ActionOutcome::Ignored);
    }
    assert_eq!(session.tick(60_000), None);
    assert_eq!(session.snapshot(), frozen);

    assert_eq!(session.apply(Command::Reset), ActionOutcome::Applied);
    assert_eq!(session.stats(), initial_stats());
    assert!(session.board().cells().iter().all(|&c| c == EMPTY));
    assert!(session.active().is_some());
}

#[test]
fn test_pause_suspends_gravity() {
    let mut session = started(3);
    let y0 = session.active().unwrap().position().1;

    assert!(session.pause());
    assert!(!session.pause());
    assert_eq!(session.tick(5_000), None);
    assert_eq!(session.active().unwrap().position().1, y0);
    assert_eq!(session.apply(Command::RotateCw), ActionOutcome::Ignored);

    assert_eq!(session.apply(Command::Pause), ActionOutcome::Applied);
    assert!(!session.paused());
    session.tick(1_001);
    assert_eq!(session.active().unwrap().position().1, y0 + 1);
}

#[test]
fn test_soft_drop_restarts_gravity_timer() {
    let mut session = started(11);
    let y0 = session.active().unwrap().position().1;
    session.tick(900);
    session.soft_drop_step();
    // 900 + 200 would have exceeded the interval without the restart
    session.tick(200);
    assert_eq!(session.active().unwrap().position().1, y0 + 1);
}

#[test]
fn test_custom_config_is_respected() {
    let config = SessionConfig {
        width: 8,
        height: 12,
        initial_drop_interval_ms: 500,
        min_drop_interval_ms: 100,
        level_speed_step_ms: 200,
        lines_per_level: 2,
    };
    let mut session = GameSession::new(config, 1);
    session.start();
    assert_eq!(session.board().width(), 8);
    assert_eq!(session.drop_interval_ms(), 500);

    session.on_lines_cleared(2);
    assert_eq!(session.level(), 2);
    assert_eq!(session.drop_interval_ms(), 300);
    session.on_lines_cleared(4);
    assert_eq!(session.level(), 4);
    assert_eq!(session.drop_interval_ms(), 100);
}

#[test]
fn test_same_seed_replays_same_game() {
    let script = [
        Command::MoveLeft,
        Command::RotateCw,
        Command::HardDrop,
        Command::MoveRight,
        Command::MoveRight,
        Command::HardDrop,
        Command::RotateCcw,
        Command::SoftDrop,
        Command::HardDrop,
    ];
    let play = || {
        let mut session = started(2024);
        for _ in 0..4 {
            for &command in &script {
                session.apply(command);
            }
            session.tick(1_500);
        }
        session.snapshot()
    };
    assert_eq!(play(), play());
}
