//! Tests for the console turn loop.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use tictactoe_cli::{Difficulty, Orchestrator, Participant};
use tictactoe_core::{GameStatus, Mark};

fn orchestrator(input: &str, seed: u64) -> Orchestrator<Cursor<Vec<u8>>, Vec<u8>> {
    Orchestrator::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        StdRng::seed_from_u64(seed),
    )
}

fn output_of(orchestrator: &Orchestrator<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let bytes = orchestrator.output().clone();
    String::from_utf8(bytes).expect("utf-8 output")
}

#[test]
fn test_two_humans_x_wins_top_row() {
    // X: (1,1) (1,2) (1,3)   O: (2,1) (2,2)
    let mut game = orchestrator("1 1\n2 1\n1 2\n2 2\n1 3\n", 0);

    let status = game.play(Participant::Human, Participant::Human).unwrap();

    assert_eq!(status, GameStatus::Won(Mark::X));
    let out = output_of(&game);
    assert!(out.contains("| X X X |"));
    assert!(out.contains("| O O   |"));
    assert!(out.trim_end().ends_with("X wins"));
}

#[test]
fn test_human_retries_bad_input() {
    let input = "1 1\n1 1\nabc\n0 2\n2 1\n1 2\n2 2\n1 3\n";
    let mut game = orchestrator(input, 0);

    let status = game.play(Participant::Human, Participant::Human).unwrap();

    assert_eq!(status, GameStatus::Won(Mark::X));
    let out = output_of(&game);
    assert!(out.contains("This cell is occupied! Choose another one!"));
    assert!(out.contains("You should enter numbers!"));
    assert!(out.contains("Coordinates should be from 1 to 3!"));
}

#[test]
fn test_input_closed_mid_game_is_error() {
    let mut game = orchestrator("1 1\n", 0);
    let err = game
        .play(Participant::Human, Participant::Human)
        .unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[test]
fn test_scripted_games_terminate() {
    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    for seed in 0..20 {
        for x in difficulties {
            for o in difficulties {
                let mut game = orchestrator("", seed);
                let status = game
                    .play(Participant::Scripted(x), Participant::Scripted(o))
                    .unwrap();
                assert!(status.is_over());

                let out = output_of(&game);
                let result_line = out.lines().last().unwrap_or_default();
                assert!(
                    matches!(result_line, "X wins" | "O wins" | "Draw"),
                    "{result_line}"
                );
            }
        }
    }
}

#[test]
fn test_scripted_move_announced() {
    let easy = Participant::Scripted(Difficulty::Easy);
    let medium = Participant::Scripted(Difficulty::Medium);
    let mut game = orchestrator("", 11);
    game.play(easy, medium).unwrap();

    let out = output_of(&game);
    assert!(out.contains("Making move level \"easy\""));
    assert!(out.contains("Making move level \"medium\""));
}

#[test]
fn test_announcement_can_be_disabled() {
    let easy = Participant::Scripted(Difficulty::Easy);
    let mut game = orchestrator("", 11).with_announce_moves(false);
    game.play(easy, easy).unwrap();

    assert!(!output_of(&game).contains("Making move level"));
}

#[test]
fn test_human_against_medium_finishes_on_row_major_input() {
    // The human walks the cells in order; cells already taken by O are
    // rejected and the next line is tried, so nine lines always suffice.
    let input = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\n";

    let medium = Participant::Scripted(Difficulty::Medium);

    for seed in 0..20 {
        let mut game = orchestrator(input, seed);
        let status = game.play(Participant::Human, medium).unwrap();
        assert!(status.is_over());
    }
}

#[test]
fn test_same_seed_same_game() {
    let easy = Participant::Scripted(Difficulty::Easy);
    let run = |seed| {
        let mut game = orchestrator("", seed);
        game.play(easy, easy).unwrap();
        output_of(&game)
    };

    assert_eq!(run(31), run(31));
}

#[test]
fn test_session_reprompts_then_exits() {
    let mut session = orchestrator("start\nstart user robot\nexit\n", 0);

    session.run_session().unwrap();

    let out = output_of(&session);
    assert_eq!(out.matches("Bad parameters!").count(), 2);
    assert_eq!(out.matches("Input command: ").count(), 3);
}

#[test]
fn test_session_plays_game_then_returns_to_prompt() {
    let mut session = orchestrator("start easy easy\nexit\n", 3);

    session.run_session().unwrap();

    let out = output_of(&session);
    assert_eq!(out.matches("Input command: ").count(), 2);
    assert!(out.contains("wins") || out.contains("Draw"));
}

#[test]
fn test_session_ends_on_closed_input() {
    let mut session = orchestrator("", 0);
    session.run_session().unwrap();
    assert_eq!(output_of(&session), "Input command: ");
}
