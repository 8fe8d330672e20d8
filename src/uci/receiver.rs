//! Command side of the protocol: read lines, tokenize, dispatch.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::Engine;
use crate::position::{Move, Position, STARTING_FEN};

use super::sender::Sender;

/// Source of protocol lines. `Ok(None)` signals end of input.
pub trait ReadLine {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Line reader over stdin.
pub struct StdinReader {
    stdin: io::Stdin,
}

impl StdinReader {
    #[must_use]
    pub fn new() -> Self {
        StdinReader { stdin: io::stdin() }
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadLine for StdinReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Reads commands and drives the engine until `quit` or end of input.
pub struct Receiver<R, E> {
    reader: R,
    sender: Arc<Mutex<Sender>>,
    engine: E,
}

impl<R: ReadLine, E: Engine> Receiver<R, E> {
    pub fn new(reader: R, sender: Arc<Mutex<Sender>>, engine: E) -> Self {
        Receiver {
            reader,
            sender,
            engine,
        }
    }

    /// The command loop. Returns on `quit`, end of input, or a read/write
    /// error; the engine is told to quit in every case.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let line = match self.reader.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.engine.quit();
                    return Ok(());
                }
                Err(err) => {
                    self.engine.quit();
                    return Err(err);
                }
            };

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some((&command, args)) = tokens.split_first() else {
                continue;
            };
            log::trace!("dispatching {command}");

            match command {
                "uci" => self.engine.initialize()?,
                "debug" => self.parse_debug(args)?,
                "isready" => self.engine.ready()?,
                "setoption" => self.parse_set_option(args)?,
                "register" => self
                    .sender
                    .lock()
                    .debug("Unsupported command: register")?,
                "ucinewgame" => self.engine.new_game(),
                "position" => self.parse_position(args)?,
                "go" => self.engine.start(),
                "stop" => self.engine.stop(),
                "ponderhit" => self.engine.ponder_hit(),
                "quit" => {
                    self.engine.quit();
                    return Ok(());
                }
                unknown => self
                    .sender
                    .lock()
                    .debug(&format!("Unknown command: {unknown}"))?,
            }
        }
    }

    fn parse_debug(&mut self, args: &[&str]) -> io::Result<()> {
        let mut sender = self.sender.lock();
        match args {
            [] => sender.toggle_debug_mode(),
            ["on"] => sender.set_debug_mode(true),
            ["off"] => sender.set_debug_mode(false),
            other => sender.debug(&format!("Unknown argument: {}", other.join(" ")))?,
        }
        Ok(())
    }

    // setoption name NAME [value VALUE]; the name runs until "value".
    fn parse_set_option(&mut self, args: &[&str]) -> io::Result<()> {
        if args.first() != Some(&"name") {
            return self.sender.lock().debug("Argument required");
        }
        let rest = &args[1..];
        match rest.iter().position(|&token| token == "value") {
            Some(at) if at > 0 && at + 1 < rest.len() => {
                let name = rest[..at].join(" ");
                let value = rest[at + 1..].join(" ");
                self.engine.set_name_value_option(&name, &value);
                Ok(())
            }
            None if !rest.is_empty() => {
                self.engine.set_name_only_option(&rest.join(" "));
                Ok(())
            }
            _ => self
                .sender
                .lock()
                .debug(&format!("Error parsing argument: {}", args.join(" "))),
        }
    }

    // position {startpos | fen FEN} [moves m1 m2 ...]
    //
    // A bad FEN or an unmatched move token keeps the engine on its prior
    // position; there is nothing to retry.
    fn parse_position(&mut self, args: &[&str]) -> io::Result<()> {
        let moves_at = args.iter().position(|&token| token == "moves");
        let setup = &args[..moves_at.unwrap_or(args.len())];

        let fen = match setup.split_first() {
            Some((&"startpos", [])) => STARTING_FEN.to_string(),
            Some((&"fen", fen_fields)) if !fen_fields.is_empty() => fen_fields.join(" "),
            _ => {
                return self
                    .sender
                    .lock()
                    .debug(&format!("Error parsing argument: {}", args.join(" ")));
            }
        };

        let mut position = match Position::from_fen(&fen) {
            Ok(position) => position,
            Err(err) => return self.sender.lock().debug(&format!("Invalid position: {err}")),
        };

        for token in moves_at.map_or(&[][..], |at| &args[at + 1..]) {
            match find_move(&mut position, token) {
                Some(m) => position.make_move(m),
                None => {
                    return self.sender.lock().debug(&format!(
                        "Invalid move: {token}, position: {}",
                        position.to_fen()
                    ));
                }
            }
        }

        self.engine.set_position(position);
        Ok(())
    }
}

/// Match a long-algebraic token against the legal moves of `position`.
fn find_move(position: &mut Position, token: &str) -> Option<Move> {
    position
        .generate_legal_moves()
        .iter()
        .find(|m| m.to_string() == token)
}
