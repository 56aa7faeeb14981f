//! GTP sessions driven through in-memory buffers.

use std::io::Cursor;

use goban::board::Board;
use goban::game::Game;
use goban::gtp::GtpEngine;
use goban::player::RandomPlayer;

fn session(commands: &str) -> String {
    let mut engine =
        GtpEngine::with_game(Game::new(Board::empty(9).unwrap()), RandomPlayer::with_seed(5));
    let mut out = Vec::new();
    engine.run(Cursor::new(commands), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Split a transcript into responses (each ends with a blank line).
fn responses(transcript: &str) -> Vec<&str> {
    transcript
        .split("\n\n")
        .filter(|r| !r.is_empty())
        .collect()
}

#[test]
fn test_ids_and_comments() {
    let out = session("# a comment\n1 protocol_version\n\nname\n2 bogus\n");
    let r = responses(&out);
    assert_eq!(r, vec!["=1 2", "= goban", "?2 unknown command: bogus"]);
}

#[test]
fn test_game_to_final_score() {
    let out = session(
        "boardsize 9\nclear_board\nplay B E5\nplay W pass\nplay B pass\nfinal_score\nquit\n",
    );
    let r = responses(&out);
    assert_eq!(r.len(), 7);
    assert!(r[..5].iter().all(|s| s.starts_with('=')));
    assert_eq!(r[5], "= B+81");
}

#[test]
fn test_illegal_moves_are_reported() {
    let out = session("play B E5\nplay W E5\nplay W J1\nplay B D4\n");
    let r = responses(&out);
    assert_eq!(r[0], "= ");
    assert!(r[1].starts_with("? illegal move"));
    assert_eq!(r[2], "? invalid coordinate");
    assert_eq!(r[3], "? white to play");
}

#[test]
fn test_quit_stops_reading() {
    let out = session("quit\nname\n");
    assert_eq!(responses(&out), vec!["= "]);
}

#[test]
fn test_showboard_and_genmove() {
    let out = session("genmove B\nshowboard\n");
    let r = responses(&out);
    assert!(r[0].starts_with("= "));
    let board = r[1];
    assert!(board.contains("   A B C D E F G H I"));
    assert_eq!(board.matches('X').count(), 1);
}
