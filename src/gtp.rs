//! Go Text Protocol (GTP) front-end.
//!
//! Implements the subset of GTP version 2 needed to play a game from a
//! graphical client such as Sabaki or GoGui.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - 9, 13 or 19; clears the board
//! - `clear_board`
//! - `play <color> <vertex|pass>`
//! - `genmove <color>` - random legal move
//! - `showboard`
//! - `final_score` - `W+n`, `B+n` or `0`
//!
//! Players strictly alternate: `play` and `genmove` for the colour that is
//! not to move are refused.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::Board;
use crate::game::{Game, Move};
use crate::player::RandomPlayer;
use crate::stone::Stone;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "final_score",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    game: Game,
    generator: RandomPlayer,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Engine on an empty board of the default size.
    pub fn new() -> Self {
        Self::with_game(Game::new(Board::default()), RandomPlayer::new())
    }

    /// Engine resuming `game`, generating moves with `generator`.
    pub fn with_game(game: Game, generator: RandomPlayer) -> Self {
        Self { game, generator }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            debug!("gtp {command} {args:?} -> {success} {message:?}");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if let Ok(id) = trimmed[..end].parse::<u32>() {
            return (Some(id), trimmed[end..].trim());
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match Board::empty(size) {
                    Ok(board) => {
                        self.game = Game::new(board);
                        (true, String::new())
                    }
                    Err(_) => (false, "unacceptable size".to_string()),
                }
            }

            "clear_board" => {
                self.game = Game::new(self.game.board().cleared());
                (true, String::new())
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                if let Err(msg) = self.expect_turn(color) {
                    return (false, msg);
                }
                let mv = if vertex.eq_ignore_ascii_case("pass") {
                    Move::Pass
                } else {
                    match self.game.board().parse_coord(vertex) {
                        Ok(c) => Move::Play(c),
                        Err(_) => return (false, "invalid coordinate".to_string()),
                    }
                };
                match self.game.submit(mv) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                if let Err(msg) = self.expect_turn(color) {
                    return (false, msg);
                }
                let mv = self.generator.choose(&self.game);
                match self.game.submit(mv) {
                    Ok(_) => (true, mv.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "final_score" => {
                let margin = self.game.result().score.margin();
                let text = match margin {
                    0 => "0".to_string(),
                    m if m > 0 => format!("W+{m}"),
                    m => format!("B+{}", -m),
                };
                (true, text)
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Check that `color` names the player to move.
    fn expect_turn(&self, color: &str) -> Result<(), String> {
        let stone = parse_color(color).ok_or_else(|| "invalid color".to_string())?;
        match self.game.to_move() {
            Some(s) if s == stone => Ok(()),
            Some(s) => Err(format!("{s} to play")),
            None => Err("the game is over".to_string()),
        }
    }
}

fn parse_color(s: &str) -> Option<Stone> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Stone::Black),
        "w" | "white" => Some(Stone::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_coord;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = GtpEngine::new();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "goban");
    }

    #[test]
    fn test_known_command() {
        let mut engine = GtpEngine::new();

        let (success, response) = engine.execute("known_command", &["showboard"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["undo"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_boardsize() {
        let mut engine = GtpEngine::new();
        let (success, _) = engine.execute("boardsize", &["19"]);
        assert!(success);
        assert_eq!(engine.game().board().size(), 19);

        let (success, _) = engine.execute("boardsize", &["10"]);
        assert!(!success);
        assert_eq!(engine.game().board().size(), 19);
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = GtpEngine::new();

        let (success, _) = engine.execute("play", &["black", "D4"]);
        assert!(success);
        assert_eq!(engine.game().board().get(parse_coord("D4").unwrap()), Stone::Black);

        // white is to move
        let (success, _) = engine.execute("play", &["black", "E4"]);
        assert!(!success);

        let (success, _) = engine.execute("play", &["w", "D4"]);
        assert!(!success);

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(engine.game().moves(), 0);
        assert!(engine.game().board().is_empty());
    }

    #[test]
    fn test_genmove() {
        let mut engine =
            GtpEngine::with_game(Game::new(Board::empty(9).unwrap()), RandomPlayer::with_seed(3));
        let (success, response) = engine.execute("genmove", &["b"]);
        assert!(success);
        let c = parse_coord(&response).unwrap();
        assert_eq!(engine.game().board().get(c), Stone::Black);
    }

    #[test]
    fn test_final_score() {
        let mut engine = GtpEngine::new();
        assert_eq!(engine.execute("final_score", &[]), (true, "0".to_string()));
        engine.execute("play", &["b", "E5"]);
        assert_eq!(engine.execute("final_score", &[]), (true, "B+81".to_string()));
    }
}
