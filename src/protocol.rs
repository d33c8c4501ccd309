//! Line-based text protocol for playing against the engine.
//!
//! The protocol follows the shape of the Go Text Protocol: one command per
//! line, an optional numeric id in front, and responses starting with `=`
//! on success or `?` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `new [<width> <height>]` - Start a new game, optionally resizing the board
//! - `show` - Print the board
//! - `turn` - Side to move
//! - `moves` - Legal moves for the side to move
//! - `play <turn>` - Play a full turn for the side to move, e.g. `c3-e5-c7`
//! - `genmove` - Let the engine play the side to move
//! - `winner` - The winning side, or `none` while the game goes on
//!
//! ## Example
//!
//! ```ignore
//! use checkers_rust::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run().unwrap();
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::debug;

use crate::constants::{X_SIZE, Y_SIZE};
use crate::game::{Game, new_game};
use crate::notation::{parse_turn, str_move, str_turn};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "genmove",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "new",
    "play",
    "protocol_version",
    "quit",
    "show",
    "turn",
    "version",
    "winner",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    game: Game,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::with_game(Game::new(X_SIZE, Y_SIZE))
    }

    /// Serve an existing game, e.g. one with a fixed seed or search depth.
    pub fn with_game(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("command {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("failed to write response")?;
            output.flush().context("failed to flush response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        let height = self.game.board().height();
        let width = self.game.board().width();

        match command {
            "name" => (true, "checkers-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new" => match args {
                [] => {
                    self.game.reset();
                    (true, String::new())
                }
                [w, h] => match (w.parse::<usize>(), h.parse::<usize>()) {
                    (Ok(w), Ok(h)) if (1..=26).contains(&w) && (4..=99).contains(&h) => {
                        self.game.state = new_game(w, h);
                        (true, String::new())
                    }
                    _ => (false, "invalid board size".to_string()),
                },
                _ => (false, "expected no arguments or <width> <height>".to_string()),
            },

            "show" => (true, format!("\n{}", self.game.board())),

            "turn" => (true, self.game.turn().to_string()),

            "moves" => {
                let moves = self.game.legal_moves(self.game.turn());
                let listed: Vec<String> = moves.iter().map(|mv| str_move(mv, height)).collect();
                (true, listed.join(" "))
            }

            "play" => {
                let text = match args {
                    [text] => text,
                    [] => return (false, "missing argument".to_string()),
                    _ => return (false, "expected a single turn such as c3-d4".to_string()),
                };
                let turn = match parse_turn(text, width, height) {
                    Ok(turn) => turn,
                    Err(e) => return (false, e.to_string()),
                };
                let side = self.game.turn();
                match self.game.try_apply_turn(side, &turn) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                if self.game.is_game_over().is_some() {
                    return (false, "game over".to_string());
                }
                let turn = self.game.play_engine_turn();
                if turn.is_empty() {
                    return (false, "no move found".to_string());
                }
                (true, str_turn(&turn, height))
            }

            "winner" => match self.game.is_game_over() {
                Some(loser) => (true, loser.opposite().to_string()),
                None => (true, "none".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
