//! Universal Chess Interface front-end.
//!
//! The receiver reads commands from a line source and dispatches them to the
//! engine facade; the sender writes responses back, flushed per line.
//! Diagnostic `info string` lines are only written while debug mode is on.

mod receiver;
mod sender;

pub use receiver::{ReadLine, Receiver, StdinReader};
pub use sender::{Sender, StdoutWriter, Writeln};
