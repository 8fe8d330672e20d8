//! The engine facade driven by the UCI front-end.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::position::Position;
use crate::uci::Sender;

pub const ENGINE_NAME: &str = "Cadence 0.1.0";
pub const ENGINE_AUTHOR: &str = "the Cadence authors";

/// Operations the command front-end drives. No transport is implied; the
/// front-end owns the reader, the engine shares the sender with it.
pub trait Engine {
    /// Identify the engine and confirm UCI mode.
    fn initialize(&mut self) -> io::Result<()>;
    /// Confirm the engine is ready for the next command.
    fn ready(&mut self) -> io::Result<()>;
    /// Accept a value-less option.
    fn set_name_only_option(&mut self, name: &str);
    /// Accept a name/value option.
    fn set_name_value_option(&mut self, name: &str, value: &str);
    /// Reset search state for a new game. The current position is kept; the
    /// next `position` command replaces it.
    fn new_game(&mut self);
    /// Replace the current position.
    fn set_position(&mut self, position: Position);
    /// Begin searching the current position.
    fn start(&mut self);
    /// Stop an ongoing search.
    fn stop(&mut self);
    /// The pondered move was played.
    fn ponder_hit(&mut self);
    /// Release resources ahead of shutdown.
    fn quit(&mut self);
}

/// The default engine: owns the current position, shares the sender with the
/// front-end.
pub struct Cadence {
    sender: Arc<Mutex<Sender>>,
    position: Position,
}

impl Cadence {
    #[must_use]
    pub fn new(sender: Arc<Mutex<Sender>>) -> Self {
        Cadence {
            sender,
            position: Position::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }
}

impl Engine for Cadence {
    fn initialize(&mut self) -> io::Result<()> {
        self.stop();
        let mut sender = self.sender.lock();
        sender.id(ENGINE_NAME, ENGINE_AUTHOR)?;
        sender.uci_ok()
    }

    fn ready(&mut self) -> io::Result<()> {
        self.sender.lock().ready_ok()
    }

    fn set_name_only_option(&mut self, name: &str) {
        log::debug!("option {name} set");
    }

    fn set_name_value_option(&mut self, name: &str, value: &str) {
        log::debug!("option {name} set to {value}");
    }

    fn new_game(&mut self) {
        // Search tables would be cleared here once a search exists.
        log::debug!("new game");
    }

    fn set_position(&mut self, position: Position) {
        log::debug!("position set to {}", position.to_fen());
        self.position = position;
    }

    // TODO: drive the search from start/stop/ponder_hit once one exists.
    fn start(&mut self) {
        log::debug!("search start requested");
    }

    fn stop(&mut self) {
        log::debug!("search stop requested");
    }

    fn ponder_hit(&mut self) {
        log::debug!("ponderhit received");
    }

    fn quit(&mut self) {
        self.stop();
    }
}
